//! New-release price — flat per-day rate, bonus point past one day.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::{PriceCategory, PriceStrategy};

/// New-release pricing: 3 per day from day one, no flat region.
/// Earns a second renter point when kept for more than one day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewReleasePrice;

impl PriceStrategy for NewReleasePrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::NewRelease
    }

    fn charge(&self, days: i64) -> Decimal {
        dec!(3) * Decimal::from(days)
    }

    fn points(&self, days: i64) -> u64 {
        if days > 1 {
            2
        } else {
            1
        }
    }

    fn name(&self) -> &'static str {
        "NewReleasePrice"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charges_three_per_day() {
        assert_eq!(NewReleasePrice.charge(1), dec!(3));
        assert_eq!(NewReleasePrice.charge(3), dec!(9));
        assert_eq!(NewReleasePrice.charge(6), dec!(18));
    }

    #[test]
    fn charge_display_stays_integral() {
        assert_eq!(NewReleasePrice.charge(3).to_string(), "9");
    }

    #[test]
    fn bonus_point_past_one_day() {
        assert_eq!(NewReleasePrice.points(1), 1);
        assert_eq!(NewReleasePrice.points(2), 2);
        assert_eq!(NewReleasePrice.points(10), 2);
    }

    #[test]
    fn negative_days_charge_negative() {
        // Durations are unchecked; the formula is applied as-is.
        assert_eq!(NewReleasePrice.charge(-2), dec!(-6));
        assert_eq!(NewReleasePrice.points(-2), 1);
    }
}
