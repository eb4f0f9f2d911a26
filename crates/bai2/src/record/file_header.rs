//! `01` file header.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, RecordCode, RecordCodec};
use crate::{error::RecordError, reader::ReadOptions, validate};

const NAME: &str = "FileHeader";

/// The only BAI2 version this crate reads and writes.
pub const VERSION_NUMBER: i64 = 2;

/// Sender, receiver and creation stamp of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHeader {
    pub sender: String,
    pub receiver: String,
    /// `YYMMDD`
    pub file_created_date: String,
    /// `HHMM`
    pub file_created_time: String,
    pub file_id_number: String,
    /// Maximum physical line length; also the default wrap width on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_record_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<i64>,
    pub version_number: i64,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            sender: String::new(),
            receiver: String::new(),
            file_created_date: String::new(),
            file_created_time: String::new(),
            file_id_number: String::new(),
            physical_record_length: None,
            block_size: None,
            version_number: VERSION_NUMBER,
        }
    }
}

impl FileHeader {
    /// Parses with explicit options; see [`ReadOptions::ignore_version`].
    pub fn parse_with_options(
        line: &str,
        options: &ReadOptions,
    ) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;

        let record = Self {
            sender: cursor.field("Sender")?.to_string(),
            receiver: cursor.field("Receiver")?.to_string(),
            file_created_date: cursor.field("FileCreatedDate")?.to_string(),
            file_created_time: cursor.field("FileCreatedTime")?.to_string(),
            file_id_number: cursor.field("FileIdNumber")?.to_string(),
            physical_record_length: cursor.optional_int("PhysicalRecordLength")?,
            block_size: cursor.optional_int("BlockSize")?,
            version_number: cursor.int("VersionNumber")?,
        };

        record.validate_with_options(options)?;
        Ok((record, cursor.consumed()))
    }

    /// Validates, optionally skipping the version check.
    pub fn validate_with_options(&self, options: &ReadOptions) -> Result<(), RecordError> {
        if self.sender.is_empty() {
            return Err(RecordError::invalid(NAME, "Sender"));
        }
        if self.receiver.is_empty() {
            return Err(RecordError::invalid(NAME, "Receiver"));
        }
        if !validate::is_date(&self.file_created_date) {
            return Err(RecordError::invalid(NAME, "FileCreatedDate"));
        }
        if !validate::is_time(&self.file_created_time) {
            return Err(RecordError::invalid(NAME, "FileCreatedTime"));
        }
        if self.file_id_number.is_empty() {
            return Err(RecordError::invalid(NAME, "FileIdNumber"));
        }
        if !options.ignore_version && self.version_number != VERSION_NUMBER {
            return Err(RecordError::invalid(NAME, "VersionNumber"));
        }
        Ok(())
    }

    /// Positive physical record length, used as the wrap width.
    #[must_use]
    pub fn line_width(&self) -> Option<usize> {
        self.physical_record_length
            .and_then(|len| usize::try_from(len).ok())
            .filter(|&len| len > 0)
    }
}

impl RecordCodec for FileHeader {
    const CODE: RecordCode = RecordCode::FileHeader;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        Self::parse_with_options(line, &ReadOptions::default())
    }

    fn validate(&self) -> Result<(), RecordError> {
        self.validate_with_options(&ReadOptions::default())
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}/",
            Self::CODE,
            self.sender,
            self.receiver,
            self.file_created_date,
            self.file_created_time,
            self.file_id_number,
            optional(self.physical_record_length),
            optional(self.block_size),
            self.version_number,
        )
    }
}

fn optional(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
