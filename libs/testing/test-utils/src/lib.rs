//! Helpers for the products and users integration tests.
//!
//! With the `postgres` feature, [`TestDatabase`] runs a migrated PostgreSQL
//! container. [`TestDataBuilder`] gives each test its own product names and
//! emails, so unique columns never collide across tests sharing a database.

use std::hash::{DefaultHasher, Hash, Hasher};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Names and emails tagged with a per-test token.
pub struct TestDataBuilder {
    token: u64,
}

impl TestDataBuilder {
    /// Derive the token from the test's name; the same name gives the same data.
    pub fn from_test_name(test_name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        test_name.hash(&mut hasher);
        Self {
            token: hasher.finish(),
        }
    }

    /// `test-<kind>-<token>-<label>`, e.g. a product name.
    pub fn name(&self, kind: &str, label: &str) -> String {
        format!("test-{kind}-{}-{label}", self.token)
    }

    /// `<local>-<token>@example.com`
    pub fn email(&self, local: &str) -> String {
        format!("{local}-{}@example.com", self.token)
    }
}

pub mod assertions {
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(actual, expected, "{context}: ids differ");
    }

    /// `names` must equal `expected` element by element.
    pub fn assert_names<S: AsRef<str>>(names: &[S], expected: &[&str], context: &str) {
        let actual: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        assert_eq!(actual, expected, "{context}: unexpected names or order");
    }
}
