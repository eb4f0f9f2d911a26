//! Иерархия файл / группа / счёт.

use serde::{Deserialize, Serialize};

use crate::record::{
    AccountIdentifier, AccountTrailer, FileHeader, FileTrailer, GroupHeader, GroupTrailer,
    TransactionDetail,
};

/// Полный BAI2 файл.
///
/// Поля заголовка и трейлера раскрываются в JSON объект, группы вложены
/// в `Groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(flatten)]
    pub header: FileHeader,
    #[serde(rename = "Groups", default)]
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub trailer: FileTrailer,
}

/// Конверт `02` ... `98`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(flatten)]
    pub header: GroupHeader,
    #[serde(rename = "Accounts", default)]
    pub accounts: Vec<Account>,
    #[serde(flatten)]
    pub trailer: GroupTrailer,
}

/// Конверт `03` ... `49`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub identifier: AccountIdentifier,
    #[serde(rename = "Details", default)]
    pub details: Vec<TransactionDetail>,
    #[serde(flatten)]
    pub trailer: AccountTrailer,
}
