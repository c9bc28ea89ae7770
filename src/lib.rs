//! # Shipping Discounts
//!
//! A streaming processor that prices parcel shipments and applies the
//! monthly discount rules:
//!
//! - Small shipments are matched to the cheapest provider's small price
//! - The third Large LP shipment of a calendar month is free, once a month
//! - Discounts granted within a calendar month never exceed 10.00
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Total over input**: Malformed lines are passed through, never fatal
//! - **Order-sensitive state**: One engine pass per run, in input order
//!
//! ## Example
//!
//! ```
//! use shipping_discounts::{process_lines, RunOptions};
//! use std::io::Cursor;
//!
//! let input = "2024-08-09 S MR\n2024-08-10 M LP\n";
//! let mut output = Vec::new();
//! process_lines(Cursor::new(input), &mut output, &RunOptions::default()).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "2024-08-09 S MR 1.50 0.50\n2024-08-10 M LP 4.90 -\n"
//! );
//! ```

pub mod engine;
pub mod error;
pub mod formatter;
pub mod ledger;
pub mod money;
pub mod pipeline;
pub mod pricing;
pub mod shipment;
pub mod validator;

pub use engine::{process, DiscountEngine, ProcessedResult, Quote};
pub use error::{Result, ShippingError};
pub use formatter::{render, ResultWriter};
pub use ledger::MonthLedger;
pub use money::Money;
pub use pipeline::{process_lines, RunOptions, RunSummary};
pub use pricing::PriceTable;
pub use shipment::{Provider, Shipment, Size, ValidatedTransaction, YearMonth};
pub use validator::{validate, validate_all};
