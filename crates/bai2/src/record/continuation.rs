//! `88` continuation record.

use serde::{Deserialize, Serialize};

use super::{FieldCursor, RecordCode, RecordCodec};
use crate::error::RecordError;

/// Raw overflow fields of the preceding `03` or `16` record.
///
/// The reader folds continuations into their owner; this type only exists
/// for record-level processing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationRecord {
    pub composite: Vec<String>,
}

impl RecordCodec for ContinuationRecord {
    const CODE: RecordCode = RecordCode::Continuation;

    fn parse(line: &str) -> Result<(Self, usize), RecordError> {
        let mut cursor = FieldCursor::open(line, Self::CODE, false)?;

        let mut composite = Vec::new();
        while cursor.has_more() {
            composite.push(cursor.field("Composite")?.to_string());
        }

        Ok((Self { composite }, cursor.consumed()))
    }

    fn validate(&self) -> Result<(), RecordError> {
        Ok(())
    }

    fn to_bai2(&self, _max_width: Option<usize>) -> String {
        format!("{},{}/", Self::CODE, self.composite.join(","))
    }
}
