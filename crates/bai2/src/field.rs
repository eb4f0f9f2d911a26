//! Field extraction from a logical record.
//!
//! A logical record is a comma separated list terminated by `/`. Readers
//! take the record text and a byte cursor and return the field together
//! with the number of bytes consumed, delimiter included, so codecs can
//! advance the cursor themselves.

use crate::error::FieldError;

/// Delimiter policy for [`read_field`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldPolicy {
    /// Treat `/` as an ordinary character when a comma follows.
    pub allow_slash: bool,
    /// Return everything up to the next newline (or end of input).
    pub read_remainder: bool,
}

impl FieldPolicy {
    /// Plain field: `,`, `/` and newline all terminate it.
    pub const STRICT: Self = Self { allow_slash: false, read_remainder: false };

    /// Free-text field that may contain `/`.
    pub const SLASH_LITERAL: Self = Self { allow_slash: true, read_remainder: false };

    /// Trailing free-text field that consumes the rest of the line.
    pub const REMAINDER: Self = Self { allow_slash: true, read_remainder: true };
}

/// Reads one field starting at byte offset `start`.
///
/// Returns the field text and the number of bytes consumed.
///
/// # Example
///
/// ```
/// use bai2::field::{FieldPolicy, read_field};
///
/// let line = "99,+00000000001280000,1,27/";
/// let (total, size) = read_field(line, 3, FieldPolicy::STRICT).unwrap();
/// assert_eq!(total, "+00000000001280000");
/// assert_eq!(size, 19);
/// ```
pub fn read_field(line: &str, start: usize, policy: FieldPolicy) -> Result<(&str, usize), FieldError> {
    let data = line.get(start..).filter(|d| !d.is_empty()).ok_or(FieldError::NotEnoughInput)?;

    let newline = data.find('\n');
    if policy.read_remainder {
        return Ok(match newline {
            Some(idx) => (&data[..idx], idx + 1),
            None => (data, data.len()),
        });
    }

    let idx = delimiter_index(data, newline, policy.allow_slash).ok_or(FieldError::NoDelimiter)?;
    Ok((&data[..idx], idx + 1))
}

/// Reads one field and parses it as a signed integer.
///
/// An empty field reads as zero and consumes only its delimiter.
pub fn read_int_field(line: &str, start: usize) -> Result<(i64, usize), FieldError> {
    let (value, size) = read_field(line, start, FieldPolicy::STRICT)?;
    if value.is_empty() {
        return Ok((0, size));
    }
    let value = value.parse().map_err(|_| FieldError::InvalidInteger(value.to_string()))?;
    Ok((value, size))
}

/// Like [`read_int_field`] but keeps an empty field distinct from zero.
pub fn read_optional_int_field(line: &str, start: usize) -> Result<(Option<i64>, usize), FieldError> {
    let (value, size) = read_field(line, start, FieldPolicy::STRICT)?;
    if value.is_empty() {
        return Ok((None, size));
    }
    let value = value.parse().map_err(|_| FieldError::InvalidInteger(value.to_string()))?;
    Ok((Some(value), size))
}

/// Length of the record body: up to and including the first `/`, or the
/// last one when slashes are literal. The whole input if there is none.
pub fn record_size(data: &str, allow_slash: bool) -> usize {
    let slash = if allow_slash { data.rfind('/') } else { data.find('/') };
    slash.map_or(data.len(), |idx| idx + 1)
}

fn delimiter_index(data: &str, newline: Option<usize>, allow_slash: bool) -> Option<usize> {
    let slash = data.find('/');
    let Some(comma) = data.find(',') else {
        return min_index(slash, newline);
    };

    let slash = if allow_slash { None } else { slash.filter(|&idx| idx < comma) };
    let newline = newline.filter(|&idx| idx < comma);
    Some(min_index(slash, newline).unwrap_or(comma))
}

fn min_index(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
