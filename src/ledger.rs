//! Per-month discount tracking.
//!
//! Maintains the invariant: `discount_used <= MONTHLY_DISCOUNT_CAP` at all times.

use crate::money::Money;
use crate::pricing::MONTHLY_DISCOUNT_CAP;

/// Running counters for one calendar month.
///
/// # Invariants
///
/// - `discount_used` never decreases and never exceeds [`MONTHLY_DISCOUNT_CAP`]
/// - `large_lp_count` counts free-shipment-eligible shipments in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthLedger {
    /// Large/LP shipments seen so far this month.
    pub large_lp_count: u32,

    /// Discount granted so far this month.
    pub discount_used: Money,
}

impl MonthLedger {
    /// Creates an empty ledger with no shipments and an untouched budget.
    pub fn new() -> Self {
        MonthLedger::default()
    }

    /// Counts one more Large/LP shipment and returns the new count.
    pub fn record_large_lp(&mut self) -> u32 {
        self.large_lp_count += 1;
        self.large_lp_count
    }

    /// Budget still available this month.
    pub fn remaining_budget(&self) -> Money {
        MONTHLY_DISCOUNT_CAP - self.discount_used
    }

    /// Grants as much of `candidate` as the monthly budget allows.
    ///
    /// Returns the granted amount, which is `candidate` itself when it fits
    /// and the remaining budget otherwise. Once clamped the budget is spent.
    pub fn grant(&mut self, candidate: Money) -> Money {
        if self.discount_used + candidate > MONTHLY_DISCOUNT_CAP {
            let granted = self.remaining_budget();
            self.discount_used = MONTHLY_DISCOUNT_CAP;
            granted
        } else {
            self.discount_used += candidate;
            candidate
        }
    }

    /// Verifies the invariant: `discount_used <= MONTHLY_DISCOUNT_CAP`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.discount_used >= Money::ZERO && self.discount_used <= MONTHLY_DISCOUNT_CAP
    }
}
