//! Session file — TOML description of a customer's rentals.
//!
//! The file names the customer, declares a movie catalog keyed by id, and
//! lists rentals referencing those ids:
//!
//! ```toml
//! customer = "Smith"
//!
//! [[movies]]
//! id = "regent"
//! title = "Regent"
//! category = "regular"
//!
//! [[rentals]]
//! movie = "regent"
//! days = 2
//! ```
//!
//! Categories stay strings at this layer so a bad one fails through
//! `PriceCategory::from_str` with the offending movie id in context, before
//! any pricing runs.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use rentlab_core::domain::{Customer, Movie, Rental};
use rentlab_core::pricing::PriceCategory;

/// One rental session: a customer plus the catalog their rentals draw from.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub customer: String,
    #[serde(default)]
    pub movies: Vec<MovieEntry>,
    #[serde(default)]
    pub rentals: Vec<RentalEntry>,
}

/// Catalog entry: an id for rentals to reference, a display title, and a
/// category name.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieEntry {
    pub id: String,
    pub title: String,
    pub category: String,
}

/// Rental entry referencing a catalog id.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalEntry {
    pub movie: String,
    pub days: i64,
}

impl Session {
    /// Parse a TOML session file.
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).context("failed to parse session file")
    }

    /// Build the customer and their rental record from this session.
    pub fn build(&self) -> Result<Customer> {
        let mut catalog: HashMap<&str, Arc<Movie>> = HashMap::new();
        for entry in &self.movies {
            let category: PriceCategory = entry
                .category
                .parse()
                .with_context(|| format!("movie '{}'", entry.id))?;
            let movie = Arc::new(Movie::new(entry.title.as_str(), category));
            if catalog.insert(entry.id.as_str(), movie).is_some() {
                bail!("duplicate movie id '{}'", entry.id);
            }
        }

        let mut customer = Customer::new(self.customer.as_str());
        for entry in &self.rentals {
            let movie = catalog
                .get(entry.movie.as_str())
                .with_context(|| format!("rental references unknown movie id '{}'", entry.movie))?;
            customer.add_rental(Rental::new(Arc::clone(movie), entry.days));
        }
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMITH: &str = r#"
customer = "Smith"

[[movies]]
id = "regent"
title = "Regent"
category = "regular"

[[movies]]
id = "newton"
title = "Newton"
category = "new_release"

[[movies]]
id = "chills"
title = "Chills"
category = "childrens"

[[rentals]]
movie = "regent"
days = 1

[[rentals]]
movie = "newton"
days = 1

[[rentals]]
movie = "chills"
days = 1
"#;

    #[test]
    fn builds_the_rental_record() {
        let customer = Session::from_toml(SMITH).unwrap().build().unwrap();
        assert_eq!(customer.name(), "Smith");
        assert_eq!(customer.rentals().len(), 3);
        assert_eq!(customer.total_charge().to_string(), "6.5");
        assert_eq!(customer.total_points(), 3);
    }

    #[test]
    fn unknown_category_fails_fast() {
        let input = SMITH.replace("\"regular\"", "\"straight_to_dvd\"");
        let session = Session::from_toml(&input).unwrap();
        let err = format!("{:#}", session.build().unwrap_err());
        assert!(err.contains("Unknown price category: straight_to_dvd"));
        assert!(err.contains("movie 'regent'"));
    }

    #[test]
    fn unknown_movie_id_fails() {
        let input = SMITH.replace("movie = \"chills\"", "movie = \"missing\"");
        let session = Session::from_toml(&input).unwrap();
        let err = format!("{:#}", session.build().unwrap_err());
        assert!(err.contains("unknown movie id 'missing'"));
    }

    #[test]
    fn duplicate_movie_id_fails() {
        let input = SMITH.replace("id = \"newton\"", "id = \"regent\"");
        let session = Session::from_toml(&input).unwrap();
        assert!(session.build().is_err());
    }

    #[test]
    fn empty_session_is_a_valid_record() {
        let customer = Session::from_toml("customer = \"Smith\"")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            customer.statement(),
            "Rental Record for Smith\nAmount owed is 0\nYou earned 0 frequent renter points"
        );
    }
}
