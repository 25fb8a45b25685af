//! Default reference data: an in-memory ISO 3166-1 table and an ordered
//! list of accepted date formats.

use crate::countries::{ALIASES, ISO_3166_1};
use chrono::{Datelike, NaiveDate};
use rowaudit_core::{Country, CountryResolver, DateParser};
use std::collections::HashMap;

/// Date formats accepted by default, tried in order.
///
/// ISO `YYYY-MM-DD` is canonical; the other two are the day-first and
/// two-digit-year layouts seen in exported spreadsheets.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%y/%m/%d"];

const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Resolves countries against the built-in ISO 3166-1 table.
///
/// Lookups are case-insensitive and accept the alpha-2 code, the alpha-3
/// code, the English short name, or one of a few common aliases such as
/// `UK`.
#[derive(Debug, Clone)]
pub struct IsoCountryTable {
    index: HashMap<String, usize>,
}

impl IsoCountryTable {
    /// Builds the lookup index.
    pub fn new() -> Self {
        let mut index = HashMap::with_capacity(ISO_3166_1.len() * 3 + ALIASES.len());

        for (pos, (alpha2, alpha3, name)) in ISO_3166_1.iter().enumerate() {
            index.insert(alpha2.to_string(), pos);
            index.insert(alpha3.to_string(), pos);
            index.insert(name.to_uppercase(), pos);
        }

        for (alias, alpha2) in ALIASES {
            if let Some(pos) = index.get(*alpha2).copied() {
                index.insert(alias.to_string(), pos);
            }
        }

        Self { index }
    }
}

impl Default for IsoCountryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryResolver for IsoCountryTable {
    fn resolve(&self, raw: &str) -> Option<Country> {
        let key = raw.trim().to_uppercase();
        let pos = *self.index.get(&key)?;
        let (alpha2, alpha3, name) = ISO_3166_1[pos];

        Some(Country {
            alpha2: alpha2.to_string(),
            alpha3: alpha3.to_string(),
            name: name.to_string(),
        })
    }
}

/// Parses dates by trying a list of `chrono` format strings in order.
#[derive(Debug, Clone)]
pub struct FormatListDateParser {
    formats: Vec<String>,
}

impl FormatListDateParser {
    /// Creates a parser for the given formats.
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Accepted formats in the order they are tried.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl Default for FormatListDateParser {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS.iter().copied())
    }
}

impl DateParser for FormatListDateParser {
    /// Day and month may be unpadded. A `%Y` match only counts for a
    /// four-digit year, otherwise the day-first layout would read `21/03/15`
    /// as the year 15 instead of leaving it to `%y`.
    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        self.formats.iter().find_map(|format| {
            NaiveDate::parse_from_str(raw, format)
                .ok()
                .filter(|date| {
                    !format.contains("%Y") || FOUR_DIGIT_YEARS.contains(&date.year())
                })
        })
    }
}
