//! Rental — a movie held for a number of days.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::movie::Movie;

/// One rental line: which movie, and for how long.
///
/// Holds the movie by `Arc`, not by value: a rental recorded before a
/// category retag prices under the movie's category *at query time*.
/// `days_rented` is signed and unchecked; out-of-range input prices as the
/// category formula dictates.
#[derive(Debug, Clone)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: i64,
}

impl Rental {
    pub fn new(movie: Arc<Movie>, days_rented: i64) -> Self {
        Self { movie, days_rented }
    }

    pub fn movie(&self) -> &Arc<Movie> {
        &self.movie
    }

    pub fn days_rented(&self) -> i64 {
        self.days_rented
    }

    /// Charge for this rental under the movie's current category.
    /// Computed fresh on every call, never cached.
    pub fn charge(&self) -> Decimal {
        self.movie.charge(self.days_rented)
    }

    /// Renter points for this rental under the movie's current category.
    pub fn points(&self) -> u64 {
        self.movie.points(self.days_rented)
    }
}
