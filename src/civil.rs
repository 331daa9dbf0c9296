use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::{date, format_description, time};
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

use crate::error::CountdownError;

/// Midnight, January 1st 2026: the target the countdown ships with.
pub const DEFAULT_TARGET: CivilDateTime = CivilDateTime(PrimitiveDateTime::new(
    date!(2026 - 01 - 01),
    time!(00:00:00),
));

/// A calendar date and wall-clock time with no zone attached.
///
/// The countdown target is one of these; which absolute instant it denotes
/// depends on the zone it is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime(PrimitiveDateTime);

impl CivilDateTime {
    pub fn new(inner: PrimitiveDateTime) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> PrimitiveDateTime {
        self.0
    }

    /// Naive difference `self - earlier` in whole milliseconds.
    ///
    /// Both values are treated as readings of the same wall clock, so DST
    /// shifts between them are not accounted for.
    pub fn millis_since(&self, earlier: &CivilDateTime) -> i128 {
        (self.0 - earlier.0).whole_milliseconds()
    }

    /// The same reading with the sub-second part dropped.
    pub fn truncate_to_second(self) -> Self {
        Self(self.0 - Duration::nanoseconds(i64::from(self.0.nanosecond())))
    }
}

impl From<PrimitiveDateTime> for CivilDateTime {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.0.year(),
            self.0.month() as u8,
            self.0.day(),
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_civil(s).ok_or_else(|| CountdownError::InvalidCivilTime(s.trim().to_string()))
    }
}

impl Serialize for CivilDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_civil(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid civil time: {s}")))
    }
}

/// Parse a civil date/time.
/// Supports `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` (midnight).
pub fn parse_civil(s: &str) -> Option<CivilDateTime> {
    let s = s.trim();

    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(s, &spaced) {
        return Some(CivilDateTime(dt));
    }

    let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(s, &iso) {
        return Some(CivilDateTime(dt));
    }

    let date_only = format_description!("[year]-[month]-[day]");
    Date::parse(s, &date_only)
        .ok()
        .map(|d| CivilDateTime(d.midnight()))
}

/// Parse an absolute instant in RFC 3339 form, e.g. `2025-12-31T23:59:00Z`.
pub fn parse_instant(s: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(s.trim(), &Rfc3339).ok()
}
