use serde::Serialize;
use std::fmt;

/// One entry of the timezone catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRecord {
    /// IANA-style `Area/City` identifier
    pub id: String,
    pub country_name: Option<String>,
    /// ISO 3166 alpha-2 code
    pub country_code: Option<String>,
}

impl ZoneRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country_name: None,
            country_code: None,
        }
    }

    pub fn with_country(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self.country_name = Some(name.into());
        self
    }

    /// Name the catalog is ordered by: the country, else the zone id.
    pub fn sort_name(&self) -> &str {
        self.country_name.as_deref().unwrap_or(&self.id)
    }
}

/// Remaining time until the target, split into display units.
///
/// The all-zero value (also `Default`) means the target has been reached
/// or could not be computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_exhausted(&self) -> bool {
        *self == Self::ZERO
    }

    /// Milliseconds represented by the whole units.
    pub fn as_millis(&self) -> u128 {
        self.days as u128 * 86_400_000
            + self.hours as u128 * 3_600_000
            + self.minutes as u128 * 60_000
            + self.seconds as u128 * 1000
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days : {:02} hrs : {:02} mins : {:02} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// One rendered countdown frame, as printed by the `countdown` command.
#[derive(Debug, Clone, Serialize)]
pub struct CountdownReport {
    pub zone: String,
    pub display_name: String,
    pub target: String,
    pub remaining: TimeRemaining,
    pub exhausted: bool,
}

/// Result of a `zones` query.
#[derive(Debug, Serialize)]
pub struct ZoneSearchResult {
    pub query: String,
    pub zones: Vec<ZoneRecord>,
    pub match_count: usize,
}
