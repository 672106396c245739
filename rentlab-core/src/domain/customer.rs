//! Customer — ordered rental record plus statement rendering.

use rust_decimal::Decimal;

use super::rental::Rental;

/// A customer's rental record.
///
/// Rentals are append-only and keep insertion order; totals and statements
/// walk the sequence front to back. Statements are pure functions of the
/// record at call time: charges are re-derived from each rental's movie, so
/// a category retag between two calls shows up in the second.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    /// Append a rental. No deduplication, no limit.
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Sum of all rental charges, front to back. Zero for an empty record.
    pub fn total_charge(&self) -> Decimal {
        self.rentals
            .iter()
            .fold(Decimal::ZERO, |total, rental| total + rental.charge())
    }

    /// Sum of all renter points. Zero for an empty record.
    pub fn total_points(&self) -> u64 {
        self.rentals.iter().map(Rental::points).sum()
    }

    /// Plain-text statement: header, one tab-indented line per rental,
    /// amount and points footer. No trailing newline.
    pub fn statement(&self) -> String {
        let mut total = Decimal::ZERO;
        let mut points = 0u64;
        let mut out = format!("Rental Record for {}\n", self.name);
        for rental in &self.rentals {
            let charge = rental.charge();
            out.push_str(&format!("\t{}\t{}\n", rental.movie().title(), charge));
            total += charge;
            points += rental.points();
        }
        out.push_str(&format!("Amount owed is {}\n", total));
        out.push_str(&format!("You earned {} frequent renter points", points));
        out
    }

    /// HTML statement: the same line items as [`statement`](Self::statement),
    /// wrapped in `<h1>`/`<ul>`/`<p>` markup. No trailing newline.
    pub fn html_statement(&self) -> String {
        let mut total = Decimal::ZERO;
        let mut points = 0u64;
        let mut out = format!("<h1>Rental Record for <em>{}</em></h1>\n<p><ul>\n", self.name);
        for rental in &self.rentals {
            let charge = rental.charge();
            out.push_str(&format!("<li>{}: {}</li>\n", rental.movie().title(), charge));
            total += charge;
            points += rental.points();
        }
        out.push_str("</ul></p>\n");
        out.push_str(&format!("<p>Amount owed is <em>{}</em></p>\n", total));
        out.push_str(&format!(
            "<p>You earned <em>{}</em> frequent renter points</p>",
            points
        ));
        out
    }
}
