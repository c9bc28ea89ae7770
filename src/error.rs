//! Error types for the shipping discount engine.

use crate::shipment::{Provider, Size};
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ShippingError>;

/// Errors that can occur during a processing run.
///
/// Malformed input lines are not errors: they are reported as ignored
/// results and never reach this type.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// Failed to read the input source or write to the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validated provider/size pair has no base price
    #[error("Internal error: no base price for {size} {provider} in the price table")]
    MissingPrice { provider: Provider, size: Size },
}
