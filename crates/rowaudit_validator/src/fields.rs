//! Field validators.
//!
//! One check per [`FieldType`]. Each check maps a raw value to at most one
//! [`Finding`]; malformed input is what is being detected, so none of them
//! can fail.
//!
//! Empty values are only reported by the `Required` check. A column declared
//! both `Required` and `Email` reports a single "missing value" when empty.

use crate::{FormatListDateParser, IsoCountryTable};
use chrono::NaiveDate;
use regex::Regex;
use rowaudit_core::{CountryResolver, DateParser, FieldType, Finding};
use std::sync::LazyLock;

/// Message for an empty `Required` value.
pub const MISSING_VALUE: &str = "missing value";
/// Message for a structurally invalid email.
pub const INVALID_EMAIL: &str = "invalid email format";
/// Message for an unparsable date.
pub const INVALID_DATE: &str = "invalid or malformed date";
/// Message for a date after the reference date.
pub const FUTURE_DATE: &str = "future date";
/// Message for an unresolvable country.
pub const UNKNOWN_COUNTRY: &str = "unknown country code";
/// Message for a non-numeric age.
pub const AGE_NOT_NUMERIC: &str = "age is not a whole number";
/// Message for an implausible age.
pub const AGE_OUT_OF_RANGE: &str = "age out of range";

/// Plausible ages, inclusive.
pub const AGE_RANGE: std::ops::RangeInclusive<u64> = 1..=120;

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain and
/// no dot at either end of it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.][^@\s]*\.[^@\s]*[^@\s.]$").expect("email pattern is valid")
});

/// Applies the per-type checks, backed by injectable reference data.
pub struct FieldValidator {
    countries: Box<dyn CountryResolver>,
    dates: Box<dyn DateParser>,
    reference_date: NaiveDate,
}

impl FieldValidator {
    /// Creates a validator with the built-in country table and date formats.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self::with_reference_data(
            Box::new(IsoCountryTable::new()),
            Box::new(FormatListDateParser::default()),
            reference_date,
        )
    }

    /// Creates a validator with custom reference data.
    pub fn with_reference_data(
        countries: Box<dyn CountryResolver>,
        dates: Box<dyn DateParser>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            countries,
            dates,
            reference_date,
        }
    }

    /// Day after which dates are reported as future dates.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Checks one raw value against one field type.
    pub fn validate(&self, field_type: FieldType, raw: &str) -> Option<Finding> {
        let value = raw.trim();

        match field_type {
            FieldType::Required => check_required(value),
            FieldType::FreeText => None,
            _ if value.is_empty() => None,
            FieldType::Email => check_email(value),
            FieldType::Date => self.check_date(value),
            FieldType::CountryCode => self.check_country(value),
            FieldType::Age => check_age(value),
        }
    }

    fn check_date(&self, value: &str) -> Option<Finding> {
        match self.dates.parse(value) {
            None => Some(Finding::error(INVALID_DATE)),
            Some(date) if date > self.reference_date => Some(Finding::info(FUTURE_DATE)),
            Some(_) => None,
        }
    }

    fn check_country(&self, value: &str) -> Option<Finding> {
        match self.countries.resolve(value) {
            Some(_) => None,
            None => Some(Finding::warning(UNKNOWN_COUNTRY)),
        }
    }
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("reference_date", &self.reference_date)
            .finish_non_exhaustive()
    }
}

fn check_required(value: &str) -> Option<Finding> {
    value.is_empty().then(|| Finding::error(MISSING_VALUE))
}

fn check_email(value: &str) -> Option<Finding> {
    (!EMAIL_PATTERN.is_match(value)).then(|| Finding::warning(INVALID_EMAIL))
}

fn check_age(value: &str) -> Option<Finding> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(Finding::warning(AGE_NOT_NUMERIC));
    }

    // All digits but too large for u64 is still out of range.
    match value.parse::<u64>() {
        Ok(age) if AGE_RANGE.contains(&age) => None,
        _ => Some(Finding::warning(AGE_OUT_OF_RANGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowaudit_core::{Country, Severity};

    fn validator() -> FieldValidator {
        FieldValidator::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    fn severity(field_type: FieldType, raw: &str) -> Option<Severity> {
        validator().validate(field_type, raw).map(|f| f.severity)
    }

    #[test]
    fn test_required() {
        assert_eq!(severity(FieldType::Required, ""), Some(Severity::Error));
        assert_eq!(severity(FieldType::Required, "   \t"), Some(Severity::Error));
        assert_eq!(severity(FieldType::Required, "Ana"), None);
        assert_eq!(
            validator().validate(FieldType::Required, "").unwrap().message,
            MISSING_VALUE
        );
    }

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.com", "first.last@example.co.uk", " x+tag@sub.domain.org "] {
            assert_eq!(severity(FieldType::Email, email), None, "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "not-an-email",
            "a@@b.com",
            "a@b@c.com",
            "@b.com",
            "a@",
            "a@bcom",
            "a@.com",
            "a@b.com.",
            "a b@c.com",
        ] {
            assert_eq!(
                severity(FieldType::Email, email),
                Some(Severity::Warning),
                "{email}"
            );
        }
    }

    #[test]
    fn test_empty_values_only_flagged_by_required() {
        for field_type in [
            FieldType::Email,
            FieldType::Date,
            FieldType::CountryCode,
            FieldType::Age,
            FieldType::FreeText,
        ] {
            assert_eq!(severity(field_type, ""), None, "{field_type}");
            assert_eq!(severity(field_type, "  "), None, "{field_type}");
        }
    }

    #[test]
    fn test_dates() {
        assert_eq!(severity(FieldType::Date, "2020-01-01"), None);
        assert_eq!(severity(FieldType::Date, "2025-06-01"), None);
        assert_eq!(severity(FieldType::Date, "2025-06-02"), Some(Severity::Info));
        assert_eq!(severity(FieldType::Date, "2099-01-01"), Some(Severity::Info));
        assert_eq!(severity(FieldType::Date, "2021-02-30"), Some(Severity::Error));
        assert_eq!(severity(FieldType::Date, "soon"), Some(Severity::Error));
    }

    #[test]
    fn test_date_messages() {
        let v = validator();
        assert_eq!(v.validate(FieldType::Date, "2099-01-01").unwrap().message, FUTURE_DATE);
        assert_eq!(v.validate(FieldType::Date, "01-01-2020").unwrap().message, INVALID_DATE);
    }

    #[test]
    fn test_countries() {
        assert_eq!(severity(FieldType::CountryCode, "ES"), None);
        assert_eq!(severity(FieldType::CountryCode, "fra"), None);
        assert_eq!(severity(FieldType::CountryCode, "United Kingdom"), None);
        assert_eq!(
            severity(FieldType::CountryCode, "ZZ"),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_ages() {
        assert_eq!(severity(FieldType::Age, "1"), None);
        assert_eq!(severity(FieldType::Age, "120"), None);
        assert_eq!(severity(FieldType::Age, "0"), Some(Severity::Warning));
        assert_eq!(severity(FieldType::Age, "121"), Some(Severity::Warning));
        assert_eq!(
            severity(FieldType::Age, "99999999999999999999999"),
            Some(Severity::Warning)
        );

        let v = validator();
        assert_eq!(v.validate(FieldType::Age, "-5").unwrap().message, AGE_NOT_NUMERIC);
        assert_eq!(v.validate(FieldType::Age, "+5").unwrap().message, AGE_NOT_NUMERIC);
        assert_eq!(v.validate(FieldType::Age, "4.5").unwrap().message, AGE_NOT_NUMERIC);
        assert_eq!(v.validate(FieldType::Age, "200").unwrap().message, AGE_OUT_OF_RANGE);
    }

    #[test]
    fn test_free_text_never_flagged() {
        assert_eq!(severity(FieldType::FreeText, "anything @ all"), None);
    }

    #[test]
    fn test_injected_reference_data() {
        let only_atlantis = |raw: &str| {
            (raw == "Atlantis").then(|| Country {
                alpha2: "AT".into(),
                alpha3: "ATL".into(),
                name: "Atlantis".into(),
            })
        };
        let epoch_only = |raw: &str| {
            (raw == "epoch").then(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        };
        let v = FieldValidator::with_reference_data(
            Box::new(only_atlantis),
            Box::new(epoch_only),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        );

        assert!(v.validate(FieldType::CountryCode, "Atlantis").is_none());
        assert!(v.validate(FieldType::CountryCode, "ES").is_some());
        assert!(v.validate(FieldType::Date, "epoch").is_none());
        assert!(v.validate(FieldType::Date, "2020-01-01").is_some());
    }
}
