//! Domain types for the rental record.

pub mod customer;
pub mod movie;
pub mod rental;

pub use customer::Customer;
pub use movie::Movie;
pub use rental::Rental;
