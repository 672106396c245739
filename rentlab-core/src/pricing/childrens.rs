//! Children's price — flat fee with a per-day overage after three days.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::{PriceCategory, PriceStrategy};

/// Children's pricing: 1.5 for the first three days, then 1.5 per
/// additional day. Always earns a single renter point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildrensPrice;

impl PriceStrategy for ChildrensPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Children
    }

    fn charge(&self, days: i64) -> Decimal {
        let mut amount = dec!(1.5);
        if days > 3 {
            amount += dec!(1.5) * Decimal::from(days - 3);
        }
        amount
    }

    fn points(&self, _days: i64) -> u64 {
        1
    }

    fn name(&self) -> &'static str {
        "ChildrensPrice"
    }
}
