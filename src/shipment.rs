//! Shipment models produced by validation and consumed by the engine.

use crate::validator::Rejection;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Package size code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Size {
    /// Small package.
    S,
    /// Medium package.
    M,
    /// Large package.
    L,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];
}

impl FromStr for Size {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            _ => Err(Rejection::Size),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        })
    }
}

/// Shipping provider code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    /// La Poste.
    LP,
    /// Mondial Relay.
    MR,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::LP, Provider::MR];
}

impl FromStr for Provider {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LP" => Ok(Provider::LP),
            "MR" => Ok(Provider::MR),
            _ => Err(Rejection::Provider),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::LP => "LP",
            Provider::MR => "MR",
        })
    }
}

/// Calendar month a shipment belongs to, the key of the monthly counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A shipment whose fields all passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shipment {
    pub date: NaiveDate,
    pub size: Size,
    pub provider: Provider,
}

impl Shipment {
    /// The month whose counters and budget this shipment is charged against.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from(self.date)
    }
}

/// Outcome of validating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedTransaction {
    /// Well-formed line, ready for pricing.
    Valid(Shipment),

    /// Malformed line, carried through untouched.
    Invalid { original_text: String },
}

impl ValidatedTransaction {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidatedTransaction::Valid(_))
    }
}
