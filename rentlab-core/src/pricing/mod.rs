//! Price strategies — per-category charge and renter-point rules.
//!
//! Each rental category prices independently. Rather than switching on a
//! type code at charge time, every category binds one object implementing
//! [`PriceStrategy`]; a movie holds the binding for its current category and
//! delegates all charge/point queries to it.
//!
//! # Design Philosophy
//! The mapping category → strategy is total: every [`PriceCategory`] resolves
//! to exactly one strategy via [`strategy_for`]. Unknown *external* category
//! representations (names in session files, numeric price codes from the old
//! catalog format) are rejected when the category is resolved, never at
//! charge time.
//!
//! Strategies are stateless. [`strategy_for`] hands out `'static` singletons
//! shared by every movie of the category.

pub mod childrens;
pub mod new_release;
pub mod regular;

pub use childrens::ChildrensPrice;
pub use new_release::NewReleasePrice;
pub use regular::RegularPrice;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur while resolving a category representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown price category: {0}")]
    InvalidCategory(String),
    #[error("Unknown price code: {0}")]
    InvalidPriceCode(u8),
}

// ─── Category ────────────────────────────────────────────────────────

/// Closed set of rental categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceCategory {
    Regular,
    NewRelease,
    #[serde(rename = "childrens")]
    Children,
}

impl PriceCategory {
    /// All categories, in price-code order.
    pub const ALL: [PriceCategory; 3] = [
        PriceCategory::Regular,
        PriceCategory::NewRelease,
        PriceCategory::Children,
    ];

    /// Resolve a numeric price code from the old catalog format (0/1/2).
    pub fn from_code(code: u8) -> Result<Self, PricingError> {
        match code {
            0 => Ok(Self::Regular),
            1 => Ok(Self::NewRelease),
            2 => Ok(Self::Children),
            other => Err(PricingError::InvalidPriceCode(other)),
        }
    }

    /// Numeric price code for this category.
    pub fn code(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::NewRelease => 1,
            Self::Children => 2,
        }
    }

    /// Stable lowercase name. Round-trips through [`FromStr`] and matches
    /// the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::NewRelease => "new_release",
            Self::Children => "childrens",
        }
    }
}

impl FromStr for PriceCategory {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "new_release" => Ok(Self::NewRelease),
            "childrens" => Ok(Self::Children),
            other => Err(PricingError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Strategy trait ──────────────────────────────────────────────────

/// Pricing rule for one rental category.
///
/// # Responsibilities
/// - Compute the charge for a rental duration
/// - Compute the frequent renter points for a rental duration
///
/// # Non-Responsibilities
/// - Strategies do NOT validate durations (negative days price exactly as
///   the formula dictates; rejecting them is a caller decision)
/// - Strategies do NOT aggregate across rentals (that's the customer's job)
pub trait PriceStrategy: Send + Sync {
    /// Category this strategy prices.
    fn category(&self) -> PriceCategory;

    /// Charge for keeping a movie `days` days.
    ///
    /// Charges are exact decimals. The scale of the result carries through
    /// to statement rendering: whole-dollar branches stay integral (`2`),
    /// anything touched by the 1.5 overage rate keeps one decimal place
    /// (`3.5`, and `3.0` even when the fraction is zero).
    fn charge(&self, days: i64) -> Decimal;

    /// Frequent renter points earned for a `days`-day rental.
    fn points(&self, days: i64) -> u64;

    /// Strategy name for listings and error context.
    fn name(&self) -> &'static str;
}

/// Total mapping category → strategy singleton.
pub fn strategy_for(category: PriceCategory) -> &'static dyn PriceStrategy {
    match category {
        PriceCategory::Regular => &RegularPrice,
        PriceCategory::NewRelease => &NewReleasePrice,
        PriceCategory::Children => &ChildrensPrice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct PromoPrice;

    impl PriceStrategy for PromoPrice {
        fn category(&self) -> PriceCategory {
            PriceCategory::Regular
        }

        fn charge(&self, _days: i64) -> Decimal {
            dec!(0)
        }

        fn points(&self, _days: i64) -> u64 {
            0
        }

        fn name(&self) -> &'static str {
            "promo"
        }
    }

    #[test]
    fn test_price_strategy_trait_compiles() {
        let strategy: &dyn PriceStrategy = &PromoPrice;
        assert_eq!(strategy.charge(10), dec!(0));
        assert_eq!(strategy.points(10), 0);
    }

    #[test]
    fn every_category_resolves_to_its_own_strategy() {
        for category in PriceCategory::ALL {
            assert_eq!(strategy_for(category).category(), category);
        }
    }

    #[test]
    fn category_names_round_trip() {
        for category in PriceCategory::ALL {
            assert_eq!(category.as_str().parse::<PriceCategory>(), Ok(category));
        }
    }

    #[test]
    fn known_price_codes_resolve() {
        assert_eq!(PriceCategory::from_code(0), Ok(PriceCategory::Regular));
        assert_eq!(PriceCategory::from_code(1), Ok(PriceCategory::NewRelease));
        assert_eq!(PriceCategory::from_code(2), Ok(PriceCategory::Children));
        for category in PriceCategory::ALL {
            assert_eq!(PriceCategory::from_code(category.code()), Ok(category));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "straight_to_dvd".parse::<PriceCategory>().unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidCategory("straight_to_dvd".into())
        );
    }

    #[test]
    fn unknown_price_code_is_rejected() {
        assert_eq!(
            PriceCategory::from_code(3),
            Err(PricingError::InvalidPriceCode(3))
        );
    }
}
