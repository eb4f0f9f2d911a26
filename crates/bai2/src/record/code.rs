//! The fixed BAI2 record code vocabulary.

use std::fmt;

/// Two-digit code that opens every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCode {
    /// `01`, begins the file.
    FileHeader,
    /// `02`, begins a group.
    GroupHeader,
    /// `03`, begins an account.
    AccountIdentifier,
    /// `16`, one transaction within an account.
    TransactionDetail,
    /// `88`, overflow fields for the preceding record.
    Continuation,
    /// `49`, ends an account.
    AccountTrailer,
    /// `98`, ends a group.
    GroupTrailer,
    /// `99`, ends the file.
    FileTrailer,
}

impl RecordCode {
    /// Every code, in envelope order.
    pub const ALL: [Self; 8] = [
        Self::FileHeader,
        Self::GroupHeader,
        Self::AccountIdentifier,
        Self::TransactionDetail,
        Self::Continuation,
        Self::AccountTrailer,
        Self::GroupTrailer,
        Self::FileTrailer,
    ];

    /// Returns the two-digit code.
    ///
    /// ```
    /// use bai2::record::RecordCode;
    /// assert_eq!(RecordCode::Continuation.as_str(), "88");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileHeader => "01",
            Self::GroupHeader => "02",
            Self::AccountIdentifier => "03",
            Self::TransactionDetail => "16",
            Self::Continuation => "88",
            Self::AccountTrailer => "49",
            Self::GroupTrailer => "98",
            Self::FileTrailer => "99",
        }
    }

    /// Record kind name used as error prefix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FileHeader => "FileHeader",
            Self::GroupHeader => "GroupHeader",
            Self::AccountIdentifier => "AccountIdentifier",
            Self::TransactionDetail => "TransactionDetail",
            Self::Continuation => "ContinuationRecord",
            Self::AccountTrailer => "AccountTrailer",
            Self::GroupTrailer => "GroupTrailer",
            Self::FileTrailer => "FileTrailer",
        }
    }

    /// Lower-case description used in read errors, e.g. `file header`.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        match self {
            Self::FileHeader => "file header",
            Self::GroupHeader => "group header",
            Self::AccountIdentifier => "account identifier",
            Self::TransactionDetail => "transaction detail",
            Self::Continuation => "continuation",
            Self::AccountTrailer => "account trailer",
            Self::GroupTrailer => "group trailer",
            Self::FileTrailer => "file trailer",
        }
    }

    /// Looks up the code at the start of `line`.
    #[must_use]
    pub fn from_prefix(line: &str) -> Option<Self> {
        let prefix = line.get(..2)?;
        Self::ALL.into_iter().find(|code| code.as_str() == prefix)
    }

    /// True iff `bytes` is a known code immediately followed by a comma.
    ///
    /// This is the lookahead test the scanner uses to decide whether the
    /// next physical line begins a new record.
    #[must_use]
    pub fn starts_record(bytes: &[u8]) -> bool {
        match bytes {
            [a, b, b','] => Self::ALL.iter().any(|code| code.as_str().as_bytes() == [*a, *b]),
            _ => false,
        }
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
