//! Funds availability attached to summaries and transaction details.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldCursor;
use crate::{error::RecordError, validate};

const NAME: &str = "FundsType";

/// One day/amount pair of a distributed availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Days until the amount becomes available.
    pub day: i64,
    /// Amount available on that day.
    pub amount: i64,
}

/// When the funds of an amount become available.
///
/// Serialized to JSON with a `type_code` tag holding the BAI2 code. Letter
/// codes remember whether they were written in lower case so they are
/// written back the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type_code")]
pub enum FundsType {
    /// Empty field.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    /// `0`
    #[serde(rename = "0")]
    Immediate,
    /// `1`
    #[serde(rename = "1")]
    OneDay,
    /// `2`
    #[serde(rename = "2")]
    TwoOrMoreDays,
    /// `S`: immediate, one-day and two-or-more-day amounts.
    #[serde(rename = "S")]
    Distributed {
        immediate_amount: i64,
        one_day_amount: i64,
        two_day_amount: i64,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        lowercase: bool,
    },
    /// `V`: available at a given date and time.
    #[serde(rename = "V")]
    ValueDated {
        date: String,
        time: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        lowercase: bool,
    },
    /// `D`: list of availability distributions.
    #[serde(rename = "D")]
    DistributedAvailability {
        distribution_number: i64,
        distributions: Vec<Distribution>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        lowercase: bool,
    },
    /// `Z`
    #[serde(rename = "Z")]
    Unknown {
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        lowercase: bool,
    },
}

impl FundsType {
    /// Parses a funds type fragment, e.g. `S,100,200,300,...`.
    ///
    /// Returns the value and the number of bytes consumed; the caller
    /// continues reading right after them.
    ///
    /// ```
    /// use bai2::record::FundsType;
    ///
    /// let (funds, size) = FundsType::parse("V,060316,,BANK REF/").unwrap();
    /// assert_eq!(
    ///     funds,
    ///     FundsType::ValueDated { date: "060316".into(), time: String::new(), lowercase: false }
    /// );
    /// assert_eq!(size, 10);
    /// ```
    pub fn parse(data: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::fragment(data, NAME);
        let code = cursor.field("TypeCode")?;
        let lowercase = code.bytes().any(|b| b.is_ascii_lowercase());

        let funds = match code.to_ascii_uppercase().as_str() {
            "" => Self::Unspecified,
            "0" => Self::Immediate,
            "1" => Self::OneDay,
            "2" => Self::TwoOrMoreDays,
            "Z" => Self::Unknown { lowercase },
            "S" => Self::Distributed {
                immediate_amount: cursor.int("ImmediateAmount")?,
                one_day_amount: cursor.int("OneDayAmount")?,
                two_day_amount: cursor.int("TwoDayAmount")?,
                lowercase,
            },
            "V" => Self::ValueDated {
                date: cursor.field("Date")?.to_string(),
                time: cursor.field("Time")?.to_string(),
                lowercase,
            },
            "D" => {
                let distribution_number = cursor.int("DistributionNumber")?;
                let mut distributions = Vec::new();
                for _ in 0..distribution_number.max(0) {
                    distributions.push(Distribution {
                        day: cursor.int("Day")?,
                        amount: cursor.int("Amount")?,
                    });
                }
                Self::DistributedAvailability { distribution_number, distributions, lowercase }
            }
            _ => return Err(RecordError::invalid(NAME, "TypeCode")),
        };

        let consumed = cursor.consumed_text();
        if consumed[..consumed.len().saturating_sub(1)].contains('/') {
            return Err(RecordError::parse(NAME, "SubElements"));
        }

        funds.validate()?;
        Ok((funds, cursor.consumed()))
    }

    /// Checks the payload against the code.
    pub fn validate(&self) -> Result<(), RecordError> {
        match self {
            Self::ValueDated { date, time, .. } => {
                if !date.is_empty() && !validate::is_date(date) {
                    return Err(RecordError::invalid(NAME, "Date"));
                }
                if !time.is_empty() && !validate::is_time(time) {
                    return Err(RecordError::invalid(NAME, "Time"));
                }
            }
            Self::DistributedAvailability { distribution_number, distributions, .. } => {
                if usize::try_from(*distribution_number).ok() != Some(distributions.len()) {
                    return Err(RecordError::invalid(NAME, "DistributionNumber"));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// The upper-case BAI2 code; empty for [`FundsType::Unspecified`].
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Immediate => "0",
            Self::OneDay => "1",
            Self::TwoOrMoreDays => "2",
            Self::Distributed { .. } => "S",
            Self::ValueDated { .. } => "V",
            Self::DistributedAvailability { .. } => "D",
            Self::Unknown { .. } => "Z",
        }
    }

    /// True when a letter code was read in lower case.
    #[must_use]
    pub const fn is_lowercase(&self) -> bool {
        match self {
            Self::Distributed { lowercase, .. }
            | Self::ValueDated { lowercase, .. }
            | Self::DistributedAvailability { lowercase, .. }
            | Self::Unknown { lowercase } => *lowercase,
            _ => false,
        }
    }
}

impl fmt::Display for FundsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_lowercase() {
            f.write_str(&self.code().to_ascii_lowercase())?;
        } else {
            f.write_str(self.code())?;
        }
        match self {
            Self::Distributed { immediate_amount, one_day_amount, two_day_amount, .. } => {
                write!(f, ",{immediate_amount},{one_day_amount},{two_day_amount}")
            }
            Self::ValueDated { date, time, .. } => write!(f, ",{date},{time}"),
            Self::DistributedAvailability { distribution_number, distributions, .. } => {
                write!(f, ",{distribution_number}")?;
                for Distribution { day, amount } in distributions {
                    write!(f, ",{day},{amount}")?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
