//! Writing the hierarchy back to BAI2 text.
//!
//! Records are joined with `\n`; there is no newline after the file trailer.

use std::fmt;

use super::{Account, File, Group};
use crate::record::RecordCodec;

impl File {
    /// Serializes the file, folding long records at `max_width`.
    ///
    /// `None` falls back to the header's physical record length; `Some(0)`
    /// writes every record on one line.
    #[must_use]
    pub fn to_string_with_width(&self, max_width: Option<usize>) -> String {
        self.records(max_width.or_else(|| self.header.line_width())).join("\n")
    }

    /// Serialized records in file order, one entry per logical record.
    pub(crate) fn records(&self, max_width: Option<usize>) -> Vec<String> {
        let mut out = vec![self.header.to_bai2(max_width)];
        for group in &self.groups {
            group.push_records(max_width, &mut out);
        }
        out.push(self.trailer.to_bai2(max_width));
        out
    }
}

impl Group {
    /// Serializes the group from header to trailer.
    #[must_use]
    pub fn to_bai2(&self, max_width: Option<usize>) -> String {
        let mut out = Vec::new();
        self.push_records(max_width, &mut out);
        out.join("\n")
    }

    fn push_records(&self, max_width: Option<usize>, out: &mut Vec<String>) {
        out.push(self.header.to_bai2(max_width));
        for account in &self.accounts {
            account.push_records(max_width, out);
        }
        out.push(self.trailer.to_bai2(max_width));
    }
}

impl Account {
    /// Serializes the account from identifier to trailer.
    #[must_use]
    pub fn to_bai2(&self, max_width: Option<usize>) -> String {
        let mut out = Vec::new();
        self.push_records(max_width, &mut out);
        out.join("\n")
    }

    fn push_records(&self, max_width: Option<usize>, out: &mut Vec<String>) {
        out.push(self.identifier.to_bai2(max_width));
        out.extend(self.details.iter().map(|detail| detail.to_bai2(max_width)));
        out.push(self.trailer.to_bai2(max_width));
    }
}

/// Uses the header's physical record length as wrap width.
impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_width(None))
    }
}
