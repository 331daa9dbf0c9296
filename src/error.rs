use thiserror::Error;

/// Failures the time service can report while resolving civil time.
///
/// None of these are fatal: the countdown degrades to the all-zero value
/// and the next tick tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// Zone identifier not present in the timezone database
    #[error("unknown timezone: {0}")]
    UnknownZone(String),

    /// Converting an instant into wall-clock time failed
    #[error("failed to convert current time into {zone}: {reason}")]
    Conversion { zone: String, reason: String },

    /// Civil date/time string could not be parsed
    #[error("invalid civil time: {0}")]
    InvalidCivilTime(String),
}
