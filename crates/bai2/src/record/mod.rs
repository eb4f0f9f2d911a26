//! Record codecs, one per BAI2 record kind.
//!
//! Each codec parses a logical record (as produced by
//! [`RecordScanner`](crate::scanner::RecordScanner)), validates its fields
//! and writes it back. [`Record`] ties the eight kinds together.

mod account_identifier;
mod code;
mod continuation;
mod file_header;
mod funds_type;
mod group_header;
mod trailer;
mod transaction_detail;

pub use account_identifier::{AccountIdentifier, AccountSummary};
pub use code::RecordCode;
pub use continuation::ContinuationRecord;
pub use file_header::{FileHeader, VERSION_NUMBER};
pub use funds_type::{Distribution, FundsType};
pub use group_header::GroupHeader;
pub use trailer::{AccountTrailer, FileTrailer, GroupTrailer};
pub use transaction_detail::TransactionDetail;

use crate::{
    error::{FieldError, RecordError},
    field::{self, FieldPolicy},
};

/// Shared shape of the record codecs.
pub trait RecordCodec: Sized {
    /// Code this record starts with.
    const CODE: RecordCode;

    /// Parses a logical record, returning it with the number of bytes consumed.
    ///
    /// The parsed record is validated before it is returned.
    fn parse(line: &str) -> Result<(Self, usize), RecordError>;

    /// Checks field-level rules.
    fn validate(&self) -> Result<(), RecordError>;

    /// Writes the record. `max_width` folds long records into `88` lines;
    /// records without a composite tail ignore it.
    fn to_bai2(&self, max_width: Option<usize>) -> String;
}

/// Any single BAI2 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `01`
    FileHeader(FileHeader),
    /// `02`
    GroupHeader(GroupHeader),
    /// `03`
    AccountIdentifier(AccountIdentifier),
    /// `16`
    TransactionDetail(TransactionDetail),
    /// `88`
    Continuation(ContinuationRecord),
    /// `49`
    AccountTrailer(AccountTrailer),
    /// `98`
    GroupTrailer(GroupTrailer),
    /// `99`
    FileTrailer(FileTrailer),
}

impl Record {
    /// Parses one logical record, picking the codec from its code.
    ///
    /// Returns `Ok(None)` when the code is not part of the vocabulary.
    ///
    /// ```
    /// use bai2::record::{Record, RecordCode};
    ///
    /// let (record, _) = Record::parse("99,+00000000001280000,1,27/").unwrap().unwrap();
    /// assert_eq!(record.code(), RecordCode::FileTrailer);
    /// ```
    pub fn parse(line: &str) -> Result<Option<(Self, usize)>, RecordError> {
        let Some(code) = RecordCode::from_prefix(line) else {
            return Ok(None);
        };
        let parsed = match code {
            RecordCode::FileHeader => wrap(FileHeader::parse(line)?, Self::FileHeader),
            RecordCode::GroupHeader => wrap(GroupHeader::parse(line)?, Self::GroupHeader),
            RecordCode::AccountIdentifier => {
                wrap(AccountIdentifier::parse(line)?, Self::AccountIdentifier)
            }
            RecordCode::TransactionDetail => {
                wrap(TransactionDetail::parse(line)?, Self::TransactionDetail)
            }
            RecordCode::Continuation => wrap(ContinuationRecord::parse(line)?, Self::Continuation),
            RecordCode::AccountTrailer => wrap(AccountTrailer::parse(line)?, Self::AccountTrailer),
            RecordCode::GroupTrailer => wrap(GroupTrailer::parse(line)?, Self::GroupTrailer),
            RecordCode::FileTrailer => wrap(FileTrailer::parse(line)?, Self::FileTrailer),
        };
        Ok(Some(parsed))
    }

    /// Code of the wrapped record.
    #[must_use]
    pub fn code(&self) -> RecordCode {
        match self {
            Self::FileHeader(_) => RecordCode::FileHeader,
            Self::GroupHeader(_) => RecordCode::GroupHeader,
            Self::AccountIdentifier(_) => RecordCode::AccountIdentifier,
            Self::TransactionDetail(_) => RecordCode::TransactionDetail,
            Self::Continuation(_) => RecordCode::Continuation,
            Self::AccountTrailer(_) => RecordCode::AccountTrailer,
            Self::GroupTrailer(_) => RecordCode::GroupTrailer,
            Self::FileTrailer(_) => RecordCode::FileTrailer,
        }
    }

    /// Validates the wrapped record.
    pub fn validate(&self) -> Result<(), RecordError> {
        match self {
            Self::FileHeader(r) => r.validate(),
            Self::GroupHeader(r) => r.validate(),
            Self::AccountIdentifier(r) => r.validate(),
            Self::TransactionDetail(r) => r.validate(),
            Self::Continuation(r) => r.validate(),
            Self::AccountTrailer(r) => r.validate(),
            Self::GroupTrailer(r) => r.validate(),
            Self::FileTrailer(r) => r.validate(),
        }
    }

    /// Writes the wrapped record.
    #[must_use]
    pub fn to_bai2(&self, max_width: Option<usize>) -> String {
        match self {
            Self::FileHeader(r) => r.to_bai2(max_width),
            Self::GroupHeader(r) => r.to_bai2(max_width),
            Self::AccountIdentifier(r) => r.to_bai2(max_width),
            Self::TransactionDetail(r) => r.to_bai2(max_width),
            Self::Continuation(r) => r.to_bai2(max_width),
            Self::AccountTrailer(r) => r.to_bai2(max_width),
            Self::GroupTrailer(r) => r.to_bai2(max_width),
            Self::FileTrailer(r) => r.to_bai2(max_width),
        }
    }
}

fn wrap<T>((record, size): (T, usize), variant: fn(T) -> Record) -> (Record, usize) {
    (variant(record), size)
}

/// Empty optional fields read as `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Walks the fields of one record, mapping reader failures to the field name.
pub(crate) struct FieldCursor<'a> {
    line: &'a str,
    pos: usize,
    record: &'static str,
}

impl<'a> FieldCursor<'a> {
    /// Checks the record code and bounds the line to the record body.
    pub(crate) fn open(
        data: &'a str,
        code: RecordCode,
        allow_slash: bool,
    ) -> Result<Self, RecordError> {
        let record = code.name();
        let size = field::record_size(data, allow_slash);
        if size < 3 {
            return Err(RecordError::parse(record, "record"));
        }
        if !data.starts_with(code.as_str()) {
            return Err(RecordError::parse(record, "RecordCode"));
        }
        Ok(Self { line: &data[..size], pos: 3, record })
    }

    /// Cursor over a fragment that carries no record code.
    pub(crate) fn fragment(data: &'a str, record: &'static str) -> Self {
        Self { line: data, pos: 0, record }
    }

    pub(crate) fn field(&mut self, name: &'static str) -> Result<&'a str, RecordError> {
        self.field_with(name, FieldPolicy::STRICT)
    }

    pub(crate) fn field_with(
        &mut self,
        name: &'static str,
        policy: FieldPolicy,
    ) -> Result<&'a str, RecordError> {
        let (value, size) = field::read_field(self.line, self.pos, policy).map_err(self.err(name))?;
        self.pos += size;
        Ok(value)
    }

    pub(crate) fn int(&mut self, name: &'static str) -> Result<i64, RecordError> {
        let (value, size) = field::read_int_field(self.line, self.pos).map_err(self.err(name))?;
        self.pos += size;
        Ok(value)
    }

    pub(crate) fn optional_int(&mut self, name: &'static str) -> Result<Option<i64>, RecordError> {
        let (value, size) =
            field::read_optional_int_field(self.line, self.pos).map_err(self.err(name))?;
        self.pos += size;
        Ok(value)
    }

    /// Unread part of the record.
    pub(crate) fn rest(&self) -> &'a str {
        self.line.get(self.pos..).unwrap_or_default()
    }

    pub(crate) fn advance(&mut self, size: usize) {
        self.pos += size;
    }

    pub(crate) fn has_more(&self) -> bool {
        self.pos < self.line.len()
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes consumed so far, as a slice of the record.
    pub(crate) fn consumed_text(&self) -> &'a str {
        &self.line[..self.pos.min(self.line.len())]
    }

    fn err(&self, name: &'static str) -> impl FnOnce(FieldError) -> RecordError + use<> {
        let record = self.record;
        move |_| RecordError::parse(record, name)
    }
}
