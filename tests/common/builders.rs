//! Test builders — ergonomic constructors for raw rows.
//!
//! These panic on invalid input rather than returning `Result`.

use patronage_core::RawRow;

/// Fluent builder for [`RawRow`] fixtures. Starts from the canonical sample
/// row; individual columns can be replaced or removed.
///
/// ```rust
/// let row = RawRowBuilder::sample().set("Price", "12,34").without("Name").build();
/// ```
pub struct RawRowBuilder {
    fields: Vec<(String, String)>,
}

impl RawRowBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn sample() -> Self {
        Self::new()
            .set("Account_Created", "1/2/15 3:04")
            .set("Last_Login", "1/2/15 3:04")
            .set("Transaction_date", "1/2/15 3:04")
            .set("Longitude", "10.5")
            .set("Latitude", "20.25")
            .set("Price", "1,000")
            .set("Name", "Alice")
    }

    /// Replace the value of `column`, or append it if absent.
    pub fn set(mut self, column: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column.to_string(), value)),
        }
        self
    }

    pub fn without(mut self, column: &str) -> Self {
        self.fields.retain(|(name, _)| name != column);
        self
    }

    pub fn build(self) -> RawRow {
        self.fields.into_iter().collect()
    }
}

impl Default for RawRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
