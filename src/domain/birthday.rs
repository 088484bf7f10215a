//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted for birthdays and used when rendering them back.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Constructed only from a string matching `DD.MM.YYYY`; stores the
/// parsed calendar date, not the raw string. Formatting the stored date
/// reproduces the zero-padded input.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("03.01.1990").unwrap();
/// assert_eq!(birthday.to_string(), "03.01.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string cannot be
    /// parsed as a valid calendar date in that format.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Project the birthday's month/day onto the given year.
    ///
    /// Feb 29 birthdays resolve to Mar 1 in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        use chrono::Datelike;
        self.0.with_year(year).unwrap_or_else(|| {
            // with_year only fails for Feb 29 in a non-leap year
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(self.0)
        })
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders back to DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("03.01.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_birthday_round_trips() {
        for raw in ["03.01.1990", "29.02.2000", "31.12.1999", "01.01.2024"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-01-03").is_err());
        assert!(Birthday::new("03/01/1990").is_err());
        assert!(Birthday::new("3.1.1990 extra").is_err());
        assert!(Birthday::new("not a date").is_err());
    }

    #[test]
    fn test_birthday_rejects_invalid_calendar_values() {
        assert!(Birthday::new("32.01.1990").is_err());
        assert!(Birthday::new("00.01.1990").is_err());
        assert!(Birthday::new("15.13.1990").is_err());
        assert!(Birthday::new("29.02.1999").is_err()); // not a leap year
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::new("03.01.1990").unwrap();
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_birthday_in_year_leap_day() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        // Non-leap year resolves to Mar 1
        assert_eq!(
            birthday.in_year(2023),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
        // Leap year keeps Feb 29
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("03.01.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"03.01.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"03.01.1990\"").unwrap();
        assert_eq!(birthday.to_string(), "03.01.1990");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-01-03\"");
        assert!(result.is_err());
    }
}
