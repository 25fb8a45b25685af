//! Reference data capabilities.
//!
//! Country and date validation depend on external reference data. The
//! validators only see these traits, so the data source can be swapped
//! (or stubbed in tests) without touching validation logic.

use chrono::NaiveDate;

/// A resolved ISO 3166-1 country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Two-letter code, e.g. `ES`
    pub alpha2: String,
    /// Three-letter code, e.g. `ESP`
    pub alpha3: String,
    /// English short name, e.g. `Spain`
    pub name: String,
}

/// Resolves a raw country value to a known country.
///
/// # Example
///
/// ```rust
/// use rowaudit_core::{Country, CountryResolver};
///
/// let only_spain = |raw: &str| {
///     (raw == "ES").then(|| Country {
///         alpha2: "ES".into(),
///         alpha3: "ESP".into(),
///         name: "Spain".into(),
///     })
/// };
///
/// assert!(only_spain.resolve("ES").is_some());
/// assert!(only_spain.resolve("FR").is_none());
/// ```
pub trait CountryResolver: Send + Sync {
    /// Returns the country the value names, if any.
    fn resolve(&self, raw: &str) -> Option<Country>;
}

impl<F> CountryResolver for F
where
    F: Fn(&str) -> Option<Country> + Send + Sync,
{
    fn resolve(&self, raw: &str) -> Option<Country> {
        self(raw)
    }
}

/// Parses a raw date value.
pub trait DateParser: Send + Sync {
    /// Returns the calendar date the value denotes, if it parses.
    fn parse(&self, raw: &str) -> Option<NaiveDate>;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> Option<NaiveDate> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        self(raw)
    }
}
