//! Core discount engine.
//!
//! Prices validated shipments in input order and applies the monthly
//! discount rules. Month counters and the discount budget are order-sensitive,
//! so one engine instance must see the whole stream sequentially.

use crate::error::Result;
use crate::ledger::MonthLedger;
use crate::money::Money;
use crate::pricing::{
    PriceTable, FREE_SHIPMENT_PROVIDER, FREE_SHIPMENT_SIZE, LARGE_LP_FREE_NTH,
    PRICE_MATCHED_SIZE,
};
use crate::shipment::{Provider, Shipment, Size, ValidatedTransaction, YearMonth};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Price charged and discount granted for one shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub price: Money,
    pub discount: Money,
}

impl Quote {
    fn full_price(price: Money) -> Self {
        Quote {
            price,
            discount: Money::ZERO,
        }
    }
}

/// Result of processing one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedResult {
    /// A malformed line, passed through untouched.
    Ignored { original_text: String },

    /// A priced shipment.
    Priced {
        date: NaiveDate,
        size: Size,
        provider: Provider,
        price_charged: Money,
        discount_applied: Money,
    },
}

/// The shipment discount engine.
///
/// Holds the price table and the lazily created per-month ledgers for one
/// processing run. There is no persistence across runs.
pub struct DiscountEngine {
    prices: PriceTable,
    months: HashMap<YearMonth, MonthLedger>,
}

impl DiscountEngine {
    /// Creates an engine with the standard price table and no month state.
    pub fn new() -> Self {
        DiscountEngine::with_prices(PriceTable::default())
    }

    /// Creates an engine with a custom price table.
    pub fn with_prices(prices: PriceTable) -> Self {
        DiscountEngine {
            prices,
            months: HashMap::new(),
        }
    }

    /// Processes one transaction, updating month state for valid shipments.
    pub fn process_transaction(&mut self, tx: ValidatedTransaction) -> Result<ProcessedResult> {
        match tx {
            ValidatedTransaction::Invalid { original_text } => {
                Ok(ProcessedResult::Ignored { original_text })
            }
            ValidatedTransaction::Valid(shipment) => {
                let quote = self.price_and_discount(&shipment)?;
                debug!(
                    "{} {} {}: charged {}, discount {}",
                    shipment.date, shipment.size, shipment.provider, quote.price, quote.discount
                );
                Ok(ProcessedResult::Priced {
                    date: shipment.date,
                    size: shipment.size,
                    provider: shipment.provider,
                    price_charged: quote.price,
                    discount_applied: quote.discount,
                })
            }
        }
    }

    /// Processes a sequence of transactions in order.
    pub fn process_all<I>(&mut self, transactions: I) -> Result<Vec<ProcessedResult>>
    where
        I: IntoIterator<Item = ValidatedTransaction>,
    {
        transactions
            .into_iter()
            .map(|tx| self.process_transaction(tx))
            .collect()
    }

    /// Prices a shipment and charges any discount against its month's budget.
    pub fn price_and_discount(&mut self, shipment: &Shipment) -> Result<Quote> {
        let base = self.prices.price(shipment.provider, shipment.size)?;

        if shipment.size == FREE_SHIPMENT_SIZE && shipment.provider == FREE_SHIPMENT_PROVIDER {
            let ledger = self.ledger_mut(shipment.year_month());
            if ledger.record_large_lp() != LARGE_LP_FREE_NTH {
                return Ok(Quote::full_price(base));
            }
            let discount = ledger.grant(base);
            debug!(
                "{}: free shipment #{} discounted {} of {}",
                shipment.year_month(),
                LARGE_LP_FREE_NTH,
                discount,
                base
            );
            return Ok(Quote {
                price: base - discount,
                discount,
            });
        }

        if shipment.size == PRICE_MATCHED_SIZE {
            let candidate = base - self.prices.cheapest(shipment.size)?;
            if candidate.is_zero() {
                return Ok(Quote::full_price(base));
            }
            let ledger = self.ledger_mut(shipment.year_month());
            let discount = ledger.grant(candidate);
            if discount != candidate {
                debug!(
                    "{}: price match clamped from {} to {} by monthly budget",
                    shipment.year_month(),
                    candidate,
                    discount
                );
            }
            return Ok(Quote {
                price: base - discount,
                discount,
            });
        }

        Ok(Quote::full_price(base))
    }

    /// Month state for `month`, created on first use.
    fn ledger_mut(&mut self, month: YearMonth) -> &mut MonthLedger {
        self.months.entry(month).or_insert_with(MonthLedger::new)
    }

    /// Returns the ledger of a month, if any shipment has touched it.
    pub fn ledger(&self, month: YearMonth) -> Option<&MonthLedger> {
        self.months.get(&month)
    }
}

impl Default for DiscountEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Processes a whole run of transactions with fresh month state.
///
/// Running the same input twice always gives the same output.
pub fn process<I>(transactions: I) -> Result<Vec<ProcessedResult>>
where
    I: IntoIterator<Item = ValidatedTransaction>,
{
    DiscountEngine::new().process_all(transactions)
}
