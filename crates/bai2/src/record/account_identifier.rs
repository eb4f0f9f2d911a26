//! `03` account identifier and its summary tuples.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, FundsType, RecordCode, RecordCodec, non_empty};
use crate::{error::RecordError, validate, wrap::LineWrapper};

const NAME: &str = "AccountIdentifier";

/// One `(type code, amount, item count, funds type)` tuple of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub type_code: String,
    pub amount: String,
    /// `None` when the field is empty in the source.
    pub item_count: Option<i64>,
    pub funds_type: FundsType,
}

/// Account number, currency and the balance/summary tuples of an account.
///
/// Summaries spread over `88` records are folded in before parsing, so a
/// single value holds all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentifier {
    pub account_number: String,
    pub currency_code: Option<String>,
    #[serde(default)]
    pub summaries: Vec<AccountSummary>,
}

impl RecordCodec for AccountIdentifier {
    const CODE: RecordCode = RecordCode::AccountIdentifier;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;

        let account_number = cursor.field("AccountNumber")?.to_string();
        let currency_code = non_empty(cursor.field("CurrencyCode")?);

        let mut summaries = Vec::new();
        while cursor.has_more() {
            let type_code = cursor.field("TypeCode")?.to_string();
            let amount = cursor.field("Amount")?.to_string();
            let item_count = cursor.optional_int("ItemCount")?;
            let (funds_type, size) = FundsType::parse(cursor.rest())
                .map_err(|_| RecordError::parse(NAME, "FundsType"))?;
            cursor.advance(size);
            summaries.push(AccountSummary { type_code, amount, item_count, funds_type });
        }

        let record = Self { account_number, currency_code, summaries };
        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.account_number.is_empty() {
            return Err(RecordError::invalid(NAME, "AccountNumber"));
        }
        if self.currency_code.as_deref().is_some_and(|c| !validate::is_currency_code(c)) {
            return Err(RecordError::invalid(NAME, "CurrencyCode"));
        }
        for summary in &self.summaries {
            if !summary.amount.is_empty() && !validate::is_amount(&summary.amount) {
                return Err(RecordError::invalid(NAME, "Amount"));
            }
            if !summary.type_code.is_empty() && !validate::is_type_code(&summary.type_code) {
                return Err(RecordError::invalid(NAME, "TypeCode"));
            }
            if summary.funds_type.validate().is_err() {
                return Err(RecordError::invalid(NAME, "FundsType"));
            }
        }
        Ok(())
    }

    fn to_bai2(&self, max_width: Option<usize>) -> String {
        let head = format!(
            "{},{},{},",
            Self::CODE,
            self.account_number,
            self.currency_code.as_deref().unwrap_or_default()
        );
        let mut out = LineWrapper::new(&head, max_width);

        if self.summaries.is_empty() {
            out.push_str(",,,");
        }
        for (index, summary) in self.summaries.iter().enumerate() {
            out.push_field(&summary.type_code);
            out.push_str(",");
            out.push_field(&summary.amount);
            out.push_str(",");
            match summary.item_count {
                Some(count) => {
                    out.push_field(&count.to_string());
                    out.push_str(",");
                }
                None => out.push_str(","),
            }
            out.push_field(&summary.funds_type.to_string());
            if index + 1 < self.summaries.len() {
                out.push_str(",");
            }
        }

        out.push_str("/");
        out.finish()
    }
}
