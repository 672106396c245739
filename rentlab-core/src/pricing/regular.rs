//! Regular price — flat fee with a per-day overage after two days.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::{PriceCategory, PriceStrategy};

/// Regular pricing: 2 for the first two days, then 1.5 per additional day.
/// Always earns a single renter point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPrice;

impl PriceStrategy for RegularPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Regular
    }

    fn charge(&self, days: i64) -> Decimal {
        let mut amount = dec!(2);
        if days > 2 {
            amount += dec!(1.5) * Decimal::from(days - 2);
        }
        amount
    }

    fn points(&self, _days: i64) -> u64 {
        1
    }

    fn name(&self) -> &'static str {
        "RegularPrice"
    }
}
