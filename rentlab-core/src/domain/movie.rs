//! Movie — a titled item bound to the price strategy of its category.

use std::fmt;
use std::sync::RwLock;

use rust_decimal::Decimal;

use crate::pricing::{strategy_for, PriceCategory, PriceStrategy, PricingError};

/// A movie in the rental catalog.
///
/// The title is fixed at construction. The category is retaggable: stores
/// reclassify titles (a new release ages into regular rotation), and the new
/// strategy must govern every later charge, including charges computed
/// through rentals recorded before the change.
///
/// The strategy binding itself is private and never returned by an accessor;
/// callers observe it only through `charge`, `points` and `category`.
pub struct Movie {
    title: String,
    price: RwLock<&'static dyn PriceStrategy>,
}

impl Movie {
    pub fn new(title: impl Into<String>, category: PriceCategory) -> Self {
        Self {
            title: title.into(),
            price: RwLock::new(strategy_for(category)),
        }
    }

    /// Construct from a numeric price code (the old catalog format).
    /// Unknown codes fail here, not when the first charge is computed.
    pub fn from_code(title: impl Into<String>, code: u8) -> Result<Self, PricingError> {
        Ok(Self::new(title, PriceCategory::from_code(code)?))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current category, read from the live strategy binding.
    pub fn category(&self) -> PriceCategory {
        self.price.read().unwrap().category()
    }

    /// Rebind the price strategy to `category`'s in one step.
    ///
    /// Takes `&self`: movies are shared (`Arc`) between the catalog and any
    /// recorded rentals, and a retag must reach all of them.
    pub fn set_category(&self, category: PriceCategory) {
        *self.price.write().unwrap() = strategy_for(category);
    }

    /// Retag from a numeric price code (the old catalog format).
    /// An unknown code fails and leaves the current binding untouched.
    pub fn set_category_code(&self, code: u8) -> Result<(), PricingError> {
        self.set_category(PriceCategory::from_code(code)?);
        Ok(())
    }

    /// Charge for keeping this movie `days` days, under the current category.
    pub fn charge(&self, days: i64) -> Decimal {
        self.price.read().unwrap().charge(days)
    }

    /// Renter points for a `days`-day rental, under the current category.
    pub fn points(&self, days: i64) -> u64 {
        self.price.read().unwrap().points(days)
    }
}

impl fmt::Debug for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Movie")
            .field("title", &self.title)
            .field("category", &self.category())
            .finish()
    }
}
