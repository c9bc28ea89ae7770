//! Line validation: raw text in, typed shipment or rejected line out.
//!
//! Validation is pure and never fails; a malformed line is downgraded to
//! [`ValidatedTransaction::Invalid`] carrying the line text.

use crate::shipment::{Provider, Shipment, Size, ValidatedTransaction};
use chrono::NaiveDate;
use std::fmt;

/// Why a line or one of its fields was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    FieldCount(usize),
    Date,
    Size,
    Provider,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            Rejection::Date => f.write_str("invalid date"),
            Rejection::Size => f.write_str("unknown package size"),
            Rejection::Provider => f.write_str("unknown provider"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Validates a single transaction line.
///
/// The line is trimmed at its ends; an invalid result carries the trimmed text.
pub fn validate(line: &str) -> ValidatedTransaction {
    validate_with_reason(line).0
}

/// Like [`validate`], also returning why an invalid line was rejected.
pub fn validate_with_reason(line: &str) -> (ValidatedTransaction, Option<Rejection>) {
    let line = line.trim();
    match parse_shipment(line) {
        Ok(shipment) => (ValidatedTransaction::Valid(shipment), None),
        Err(reason) => (
            ValidatedTransaction::Invalid {
                original_text: line.to_string(),
            },
            Some(reason),
        ),
    }
}

/// Validates every line, preserving order.
pub fn validate_all<I, S>(lines: I) -> Vec<ValidatedTransaction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| validate(l.as_ref())).collect()
}

/// Parses a line into a shipment, reporting the first failing check.
pub fn parse_shipment(line: &str) -> Result<Shipment, Rejection> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [date, size, provider] = parts[..] else {
        return Err(Rejection::FieldCount(parts.len()));
    };

    let date = parse_date(date).ok_or(Rejection::Date)?;
    let size = size.parse::<Size>()?;
    let provider = provider.parse::<Provider>()?;

    Ok(Shipment {
        date,
        size,
        provider,
    })
}

/// Parses a strict `YYYY-MM-DD` date that exists on the calendar.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
