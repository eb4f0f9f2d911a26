//! `02` group header.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, RecordCode, RecordCodec, non_empty};
use crate::{error::RecordError, validate};

const NAME: &str = "GroupHeader";

/// Originator, status and as-of stamp shared by the accounts of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupHeader {
    pub receiver: Option<String>,
    pub originator: String,
    /// 1 update, 2 deletion, 3 correction, 4 test only.
    pub group_status: i64,
    /// `YYMMDD`
    pub as_of_date: String,
    /// `HHMM`
    pub as_of_time: Option<String>,
    pub currency_code: Option<String>,
    /// 0 when absent; 1-4 qualify the as-of date.
    pub as_of_date_modifier: i64,
}

impl RecordCodec for GroupHeader {
    const CODE: RecordCode = RecordCode::GroupHeader;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;

        let record = Self {
            receiver: non_empty(cursor.field("Receiver")?),
            originator: cursor.field("Originator")?.to_string(),
            group_status: cursor.int("GroupStatus")?,
            as_of_date: cursor.field("AsOfDate")?.to_string(),
            as_of_time: non_empty(cursor.field("AsOfTime")?),
            currency_code: non_empty(cursor.field("CurrencyCode")?),
            as_of_date_modifier: cursor.int("AsOfDateModifier")?,
        };

        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.originator.is_empty() {
            return Err(RecordError::invalid(NAME, "Originator"));
        }
        if !(0..=4).contains(&self.group_status) {
            return Err(RecordError::invalid(NAME, "GroupStatus"));
        }
        if !validate::is_date(&self.as_of_date) {
            return Err(RecordError::invalid(NAME, "AsOfDate"));
        }
        if self.as_of_time.as_deref().is_some_and(|t| !validate::is_time(t)) {
            return Err(RecordError::invalid(NAME, "AsOfTime"));
        }
        if self.currency_code.as_deref().is_some_and(|c| !validate::is_currency_code(c)) {
            return Err(RecordError::invalid(NAME, "CurrencyCode"));
        }
        if !(0..=4).contains(&self.as_of_date_modifier) {
            return Err(RecordError::invalid(NAME, "AsOfDateModifier"));
        }
        Ok(())
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        let modifier = match self.as_of_date_modifier {
            0 => String::new(),
            m => m.to_string(),
        };
        format!(
            "{},{},{},{},{},{},{},{}/",
            Self::CODE,
            self.receiver.as_deref().unwrap_or_default(),
            self.originator,
            self.group_status,
            self.as_of_date,
            self.as_of_time.as_deref().unwrap_or_default(),
            self.currency_code.as_deref().unwrap_or_default(),
            modifier,
        )
    }
}
