use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::Date;
use vodca::{AsRefln, Fromln};

/// A calendar date as entered in a date input (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln)]
pub struct StayDate(Date);

impl StayDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Empty or malformed input yields `None`, the same as a cleared date input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Date::parse(raw, format_description!("[year]-[month]-[day]")).ok().map(Self)
    }
}

impl Display for StayDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for StayDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StayDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid stay date: {raw}")))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::StayDate;

    #[test]
    fn parses_date_input_format() {
        assert_eq!(
            StayDate::parse("2024-01-10"),
            Some(StayDate::new(date!(2024 - 01 - 10)))
        );
        assert_eq!(StayDate::parse(" 2024-02-29 "), Some(StayDate::new(date!(2024 - 02 - 29))));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(StayDate::parse(""), None);
        assert_eq!(StayDate::parse("2023-02-29"), None);
        assert_eq!(StayDate::parse("10/01/2024"), None);
    }

    #[test]
    fn serializes_as_date_input_string() {
        let json = serde_json::to_string(&StayDate::new(date!(2024 - 01 - 03))).unwrap();
        assert_eq!(json, "\"2024-01-03\"");
        let back: StayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StayDate::new(date!(2024 - 01 - 03)));
    }
}
