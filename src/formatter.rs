//! Output rendering for processed shipments.

use crate::engine::ProcessedResult;
use std::io::{self, Write};

/// Marker written in place of a zero discount.
pub const NO_DISCOUNT: &str = "-";

/// Marker appended to ignored lines when [`ResultWriter::mark_ignored`] is set.
pub const IGNORED_MARKER: &str = "Ignored";

/// Renders one result as an output line, without a line terminator.
///
/// Priced shipments become `YYYY-MM-DD SIZE PROVIDER PRICE DISCOUNT`, with
/// [`NO_DISCOUNT`] when nothing was discounted. Ignored lines are reproduced as is.
pub fn render(result: &ProcessedResult) -> String {
    match result {
        ProcessedResult::Ignored { original_text } => original_text.clone(),
        ProcessedResult::Priced {
            date,
            size,
            provider,
            price_charged,
            discount_applied,
        } => {
            let discount = if discount_applied.is_zero() {
                NO_DISCOUNT.to_string()
            } else {
                discount_applied.to_string()
            };
            format!(
                "{} {} {} {} {}",
                date.format("%Y-%m-%d"),
                size,
                provider,
                price_charged,
                discount
            )
        }
    }
}

/// Line sink that writes rendered results to any writer.
pub struct ResultWriter<W: Write> {
    inner: W,
    mark_ignored: bool,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(inner: W) -> Self {
        ResultWriter {
            inner,
            mark_ignored: false,
        }
    }

    /// Appends [`IGNORED_MARKER`] to every ignored line.
    pub fn mark_ignored(mut self, yes: bool) -> Self {
        self.mark_ignored = yes;
        self
    }

    /// Writes one result followed by a newline.
    pub fn write_result(&mut self, result: &ProcessedResult) -> io::Result<()> {
        let line = render(result);
        match result {
            ProcessedResult::Ignored { .. } if self.mark_ignored => {
                writeln!(self.inner, "{} {}", line, IGNORED_MARKER)
            }
            _ => writeln!(self.inner, "{}", line),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
