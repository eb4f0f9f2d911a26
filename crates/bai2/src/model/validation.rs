//! Каскадная валидация: заголовок, потомки, трейлер.

use super::{Account, File, Group};
use crate::{
    error::{RecordError, Result},
    reader::ReadOptions,
    record::RecordCodec,
};

impl File {
    /// Заново проверяет правила полей каждой записи файла.
    ///
    /// Работает и для файлов, собранных в коде, и для прочитанных.
    /// Останавливается на первой ошибке.
    ///
    /// ```
    /// use bai2::File;
    ///
    /// let file = File::default();
    /// assert_eq!(file.validate().unwrap_err().to_string(), "FileHeader: invalid Sender");
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.validate_with_options(&ReadOptions::default())
    }

    /// Как [`File::validate`], но с учётом [`ReadOptions::ignore_version`].
    pub fn validate_with_options(&self, options: &ReadOptions) -> Result<()> {
        self.header.validate_with_options(options)?;
        for group in &self.groups {
            group.validate()?;
        }
        self.trailer.validate()?;
        Ok(())
    }
}

impl Group {
    /// Проверяет заголовок, все счета, затем трейлер.
    pub fn validate(&self) -> std::result::Result<(), RecordError> {
        self.header.validate()?;
        for account in &self.accounts {
            account.validate()?;
        }
        self.trailer.validate()
    }
}

impl Account {
    /// Проверяет идентификатор, все детали, затем трейлер.
    pub fn validate(&self) -> std::result::Result<(), RecordError> {
        self.identifier.validate()?;
        for detail in &self.details {
            detail.validate()?;
        }
        self.trailer.validate()
    }
}
