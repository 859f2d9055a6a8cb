use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Duration, Month, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl DateKey {
    pub fn from_date(date: Date) -> Result<Self, DateKeyError> {
        if !(0..=9999).contains(&date.year()) {
            return Err(DateKeyError::OutOfRange);
        }
        Ok(Self(date))
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn previous(self) -> Option<Self> {
        self.add_days(-1).ok()
    }

    pub fn add_days(self, delta: i64) -> Result<Self, DateKeyError> {
        let shifted = self
            .0
            .checked_add(Duration::days(delta))
            .ok_or(DateKeyError::OutOfRange)?;
        Self::from_date(shifted)
    }

    pub fn display_long(self) -> String {
        format!(
            "{}, {} {}, {}",
            self.0.weekday(),
            self.0.month(),
            self.0.day(),
            self.0.year()
        )
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let invalid = || DateKeyError::Invalid(trimmed.to_string());
        let mut parts = trimmed.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| invalid())?;
        Self::from_date(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    Invalid(String),
    OutOfRange,
}

impl fmt::Display for DateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKeyError::Invalid(raw) => {
                write!(f, "invalid date '{}'; expected YYYY-MM-DD", raw)
            }
            DateKeyError::OutOfRange => write!(f, "date is outside years 0000-9999"),
        }
    }
}

impl Error for DateKeyError {}

#[cfg(test)]
mod tests {
    use super::{DateKey, DateKeyError};

    fn key(raw: &str) -> DateKey {
        raw.parse().expect("date key should parse")
    }

    #[test]
    fn parses_and_formats_canonical_keys() {
        assert_eq!(key("2026-03-07").to_string(), "2026-03-07");
        assert_eq!(key(" 0001-01-01 ").to_string(), "0001-01-01");
    }

    #[test]
    fn rejects_non_canonical_or_impossible_dates() {
        for raw in ["2026-3-07", "2026-02-30", "20260307", "tomorrow", "2026-13-01", ""] {
            assert!(
                matches!(raw.parse::<DateKey>(), Err(DateKeyError::Invalid(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn steps_across_month_and_year_boundaries() {
        assert_eq!(key("2026-03-01").add_days(-1).unwrap(), key("2026-02-28"));
        assert_eq!(key("2024-03-01").previous().unwrap(), key("2024-02-29"));
        assert_eq!(key("2025-12-31").add_days(1).unwrap(), key("2026-01-01"));
        assert_eq!(key("2026-01-10").add_days(-40).unwrap(), key("2025-12-01"));
    }

    #[test]
    fn stepping_past_the_calendar_edge_fails() {
        assert_eq!(
            key("9999-12-31").add_days(1),
            Err(DateKeyError::OutOfRange)
        );
        assert!(key("0000-01-01").previous().is_none());
    }

    #[test]
    fn long_display_names_weekday_and_month() {
        assert_eq!(key("2026-10-18").display_long(), "Sunday, October 18, 2026");
        assert_eq!(key("2026-01-05").display_long(), "Monday, January 5, 2026");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&key("2026-10-18")).unwrap();
        assert_eq!(json, "\"2026-10-18\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2026-10-18"));
        assert!(serde_json::from_str::<DateKey>("\"18/10/2026\"").is_err());
    }
}
