//! `49`, `98` and `99` trailers.
//!
//! Trailers carry a control total and counts. The values are read and
//! written as given; nothing here recomputes them.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, RecordCode, RecordCodec};
use crate::{error::RecordError, validate};

fn check_total(total: &str, record: &'static str, field: &'static str) -> Result<(), RecordError> {
    if !total.is_empty() && !validate::is_amount(total) {
        return Err(RecordError::invalid(record, field));
    }
    Ok(())
}

/// Closes an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrailer {
    pub account_control_total: String,
    pub number_of_records: i64,
}

impl RecordCodec for AccountTrailer {
    const CODE: RecordCode = RecordCode::AccountTrailer;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;
        let record = Self {
            account_control_total: cursor.field("Amount")?.to_string(),
            number_of_records: cursor.int("NumberOfRecords")?,
        };
        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        check_total(&self.account_control_total, Self::CODE.name(), "Amount")
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        format!("{},{},{}/", Self::CODE, self.account_control_total, self.number_of_records)
    }
}

/// Closes a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTrailer {
    pub group_control_total: String,
    pub number_of_accounts: i64,
    pub number_of_records: i64,
}

impl RecordCodec for GroupTrailer {
    const CODE: RecordCode = RecordCode::GroupTrailer;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;
        let record = Self {
            group_control_total: cursor.field("GroupControlTotal")?.to_string(),
            number_of_accounts: cursor.int("NumberOfAccounts")?,
            number_of_records: cursor.int("NumberOfRecords")?,
        };
        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        check_total(&self.group_control_total, Self::CODE.name(), "GroupControlTotal")
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        format!(
            "{},{},{},{}/",
            Self::CODE,
            self.group_control_total,
            self.number_of_accounts,
            self.number_of_records
        )
    }
}

/// Closes the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTrailer {
    pub file_control_total: String,
    pub number_of_groups: i64,
    pub number_of_records: i64,
}

impl RecordCodec for FileTrailer {
    const CODE: RecordCode = RecordCode::FileTrailer;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;
        let record = Self {
            file_control_total: cursor.field("FileControlTotal")?.to_string(),
            number_of_groups: cursor.int("NumberOfGroups")?,
            number_of_records: cursor.int("NumberOfRecords")?,
        };
        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        check_total(&self.file_control_total, Self::CODE.name(), "FileControlTotal")
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        format!(
            "{},{},{},{}/",
            Self::CODE,
            self.file_control_total,
            self.number_of_groups,
            self.number_of_records
        )
    }
}
