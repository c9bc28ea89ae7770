//! Base prices and the constants of the discount rules.

use crate::error::{Result, ShippingError};
use crate::money::Money;
use crate::shipment::{Provider, Size};
use std::collections::HashMap;

/// Total discount a single calendar month may accumulate.
pub const MONTHLY_DISCOUNT_CAP: Money = Money::from_cents(1000);

/// Which occurrence of the free-shipment size/provider pair in a month is free.
pub const LARGE_LP_FREE_NTH: u32 = 3;

/// Size eligible for the monthly free shipment.
pub const FREE_SHIPMENT_SIZE: Size = Size::L;

/// Provider eligible for the monthly free shipment.
pub const FREE_SHIPMENT_PROVIDER: Provider = Provider::LP;

/// Size whose price is matched to the cheapest provider.
pub const PRICE_MATCHED_SIZE: Size = Size::S;

const STANDARD_PRICES: [(Provider, Size, Money); 6] = [
    (Provider::LP, Size::S, Money::from_cents(150)),
    (Provider::LP, Size::M, Money::from_cents(490)),
    (Provider::LP, Size::L, Money::from_cents(690)),
    (Provider::MR, Size::S, Money::from_cents(200)),
    (Provider::MR, Size::M, Money::from_cents(300)),
    (Provider::MR, Size::L, Money::from_cents(400)),
];

/// Base price for every provider/size pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<(Provider, Size), Money>,
}

impl PriceTable {
    /// Builds a table from explicit entries. Later entries replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Provider, Size, Money)>,
    {
        PriceTable {
            prices: entries
                .into_iter()
                .map(|(provider, size, price)| ((provider, size), price))
                .collect(),
        }
    }

    /// Base price of a shipment.
    ///
    /// A missing entry means the table does not cover a pair the validator
    /// accepts, which is reported as [`ShippingError::MissingPrice`].
    pub fn price(&self, provider: Provider, size: Size) -> Result<Money> {
        self.prices
            .get(&(provider, size))
            .copied()
            .ok_or(ShippingError::MissingPrice { provider, size })
    }

    /// Lowest base price any provider offers for `size`.
    pub fn cheapest(&self, size: Size) -> Result<Money> {
        Provider::ALL
            .iter()
            .try_fold(None, |lowest: Option<Money>, &provider| -> Result<Option<Money>> {
                let price = self.price(provider, size)?;
                Ok(Some(lowest.map_or(price, |l| l.min(price))))
            })?
            .ok_or(ShippingError::MissingPrice {
                provider: Provider::LP,
                size,
            })
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable::from_entries(STANDARD_PRICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_prices() {
        let table = PriceTable::default();
        assert_eq!(table.price(Provider::LP, Size::S).unwrap().to_string(), "1.50");
        assert_eq!(table.price(Provider::LP, Size::M).unwrap().to_string(), "4.90");
        assert_eq!(table.price(Provider::LP, Size::L).unwrap().to_string(), "6.90");
        assert_eq!(table.price(Provider::MR, Size::S).unwrap().to_string(), "2.00");
        assert_eq!(table.price(Provider::MR, Size::M).unwrap().to_string(), "3.00");
        assert_eq!(table.price(Provider::MR, Size::L).unwrap().to_string(), "4.00");
    }

    #[test]
    fn test_every_valid_pair_is_priced() {
        let table = PriceTable::default();
        for provider in Provider::ALL {
            for size in Size::ALL {
                assert!(table.price(provider, size).is_ok());
            }
        }
    }

    #[test]
    fn test_cheapest_small() {
        let table = PriceTable::default();
        assert_eq!(table.cheapest(Size::S).unwrap(), Money::from_cents(150));
        assert_eq!(table.cheapest(Size::L).unwrap(), Money::from_cents(400));
    }

    #[test]
    fn test_missing_entry_is_reported() {
        let table = PriceTable::from_entries([(Provider::LP, Size::S, Money::from_cents(150))]);
        assert!(matches!(
            table.price(Provider::MR, Size::S),
            Err(ShippingError::MissingPrice {
                provider: Provider::MR,
                size: Size::S
            })
        ));
        assert!(matches!(
            table.cheapest(Size::S),
            Err(ShippingError::MissingPrice {
                provider: Provider::MR,
                size: Size::S
            })
        ));
        assert!(PriceTable::from_entries(Vec::new()).cheapest(Size::L).is_err());
    }

    #[test]
    fn test_cap_constant() {
        assert_eq!(MONTHLY_DISCOUNT_CAP.to_string(), "10.00");
    }
}
