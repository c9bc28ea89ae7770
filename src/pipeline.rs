//! Streaming pipeline: lines in, priced lines out.
//!
//! Validation and rendering are per-line, the engine pass is a single ordered
//! reduction over the whole input. Every input line yields exactly one
//! output line.

use crate::engine::{DiscountEngine, ProcessedResult};
use crate::error::Result;
use crate::formatter::ResultWriter;
use crate::money::Money;
use crate::shipment::ValidatedTransaction;
use crate::validator::validate_with_reason;
use log::{info, warn};
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Settings for one processing run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Append ` Ignored` to ignored lines.
    pub mark_ignored: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub priced: usize,
    pub ignored: usize,
    pub total_discount: Money,
}

/// Reads transaction lines from `reader` and writes one result line per
/// input line to `writer`, using fresh month state.
///
/// Only I/O failures abort the run. A line that is not valid UTF-8 is
/// ignored and reproduced with replacement characters.
pub fn process_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    options: &RunOptions,
) -> Result<RunSummary> {
    let mut engine = DiscountEngine::new();
    let mut out = ResultWriter::new(writer).mark_ignored(options.mark_ignored);
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;

        let tx = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(line) => {
                let (tx, reason) = validate_with_reason(line);
                if let Some(reason) = reason {
                    warn!("Line {}: ignored ({}): {:?}", line_num, reason, line.trim());
                }
                tx
            }
            Cow::Owned(lossy) => {
                warn!("Line {}: ignored (not valid UTF-8): {:?}", line_num, lossy.trim());
                ValidatedTransaction::Invalid {
                    original_text: lossy.trim().to_string(),
                }
            }
        };

        let result = engine.process_transaction(tx)?;
        match &result {
            ProcessedResult::Ignored { .. } => summary.ignored += 1,
            ProcessedResult::Priced {
                discount_applied, ..
            } => {
                summary.priced += 1;
                summary.total_discount += *discount_applied;
            }
        }
        out.write_result(&result)?;
    }

    out.flush()?;
    info!(
        "Processed {} shipments, ignored {} lines, granted {} in discounts",
        summary.priced, summary.ignored, summary.total_discount
    );
    Ok(summary)
}
