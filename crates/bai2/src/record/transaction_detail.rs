//! `16` transaction detail.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, FundsType, RecordCode, RecordCodec};
use crate::{error::RecordError, field::FieldPolicy, validate, wrap::LineWrapper};

const NAME: &str = "TransactionDetail";

/// One transaction of an account.
///
/// Reference numbers and text may contain `/`; the record ends at the
/// last slash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub type_code: String,
    pub amount: String,
    pub funds_type: FundsType,
    pub bank_reference_number: String,
    pub customer_reference_number: String,
    /// Free text, continuation fields joined by `,`. Stored without the
    /// record terminator.
    pub text: String,
}

impl RecordCodec for TransactionDetail {
    const CODE: RecordCode = RecordCode::TransactionDetail;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, true)?;

        let type_code = cursor.field("TypeCode")?.to_string();
        let amount = cursor.field("Amount")?.to_string();

        let (funds_type, size) =
            FundsType::parse(cursor.rest()).map_err(|_| RecordError::parse(NAME, "FundsType"))?;
        cursor.advance(size);

        let bank_reference_number =
            cursor.field_with("BankReferenceNumber", FieldPolicy::SLASH_LITERAL)?.to_string();
        let customer_reference_number =
            cursor.field_with("CustomerReferenceNumber", FieldPolicy::SLASH_LITERAL)?.to_string();
        let text = cursor.field_with("Text", FieldPolicy::REMAINDER)?;
        let text = text.strip_suffix('/').unwrap_or(text).to_string();

        let record = Self {
            type_code,
            amount,
            funds_type,
            bank_reference_number,
            customer_reference_number,
            text,
        };
        record.validate()?;
        Ok((record, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        if !self.type_code.is_empty() && !validate::is_type_code(&self.type_code) {
            return Err(RecordError::invalid(NAME, "TypeCode"));
        }
        if !self.amount.is_empty() && !validate::is_amount(&self.amount) {
            return Err(RecordError::invalid(NAME, "Amount"));
        }
        if self.funds_type.validate().is_err() {
            return Err(RecordError::invalid(NAME, "FundsType"));
        }
        Ok(())
    }

    fn to_bai2(&self, max_width: Option<usize>) -> String {
        let head = format!("{},{},{},", Self::CODE, self.type_code, self.amount);
        let mut out = LineWrapper::new(&head, max_width);

        out.push_field(&self.funds_type.to_string());
        out.push_str(",");
        out.push_field(&self.bank_reference_number);
        out.push_str(",");
        out.push_field(&self.customer_reference_number);
        out.push_str(",");
        out.push_field(&self.text);
        out.push_str("/");
        out.finish()
    }
}
