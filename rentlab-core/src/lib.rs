//! Rentlab Core — rental domain, per-category price strategies, statements.
//!
//! This crate contains the whole pricing engine:
//! - Domain types (movies, rentals, customers)
//! - One price strategy per rental category behind the [`pricing::PriceStrategy`] trait
//! - Plain-text and HTML statement rendering
//!
//! Everything is pure in-memory computation. No I/O lives here: a front end
//! constructs the entities, then prints the returned statement strings.

pub mod domain;
pub mod pricing;
