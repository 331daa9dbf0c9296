use std::collections::HashSet;

use time::OffsetDateTime;

use crate::civil::CivilDateTime;
use crate::error::CountdownError;
use crate::model::TimeRemaining;
use crate::provider::TimeService;

const MS_PER_SECOND: i128 = 1000;
const MS_PER_MINUTE: i128 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i128 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i128 = 24 * MS_PER_HOUR;

/// Split a millisecond difference into days/hours/minutes/seconds.
///
/// Non-positive differences yield [`TimeRemaining::ZERO`]. Leftover
/// milliseconds below one second are dropped.
pub fn decompose(millis: i128) -> TimeRemaining {
    if millis <= 0 {
        return TimeRemaining::ZERO;
    }

    TimeRemaining {
        days: u64::try_from(millis / MS_PER_DAY).unwrap_or(u64::MAX),
        hours: ((millis / MS_PER_HOUR) % 24) as u8,
        minutes: ((millis / MS_PER_MINUTE) % 60) as u8,
        seconds: ((millis / MS_PER_SECOND) % 60) as u8,
    }
}

/// Remaining time, or the reason the zone could not be read.
pub fn try_remaining(
    service: &dyn TimeService,
    target: &CivilDateTime,
    zone_id: &str,
    now_utc: OffsetDateTime,
) -> Result<TimeRemaining, CountdownError> {
    // Wall-clock readings are whole seconds
    let civil_now = service.civil_now(zone_id, now_utc)?.truncate_to_second();
    Ok(decompose(target.millis_since(&civil_now)))
}

/// Remaining time, degrading to all-zero when the zone cannot be read.
pub fn compute_remaining(
    service: &dyn TimeService,
    target: &CivilDateTime,
    zone_id: &str,
    now_utc: OffsetDateTime,
) -> TimeRemaining {
    try_remaining(service, target, zone_id, now_utc).unwrap_or_default()
}

/// Per-tick driver around [`try_remaining`] that logs each failing zone once.
pub struct CountdownEngine<'a> {
    service: &'a dyn TimeService,
    target: CivilDateTime,
    reported: HashSet<String>,
}

impl<'a> CountdownEngine<'a> {
    pub fn new(service: &'a dyn TimeService, target: CivilDateTime) -> Self {
        Self {
            service,
            target,
            reported: HashSet::new(),
        }
    }

    pub fn target(&self) -> CivilDateTime {
        self.target
    }

    /// Compute one tick for `zone_id` at `now_utc`.
    pub fn tick(&mut self, zone_id: &str, now_utc: OffsetDateTime) -> TimeRemaining {
        match try_remaining(self.service, &self.target, zone_id, now_utc) {
            Ok(remaining) => {
                if self.reported.remove(zone_id) {
                    tracing::info!(zone = zone_id, "timezone conversion recovered");
                }
                remaining
            }
            Err(e) => {
                if self.reported.insert(zone_id.to_string()) {
                    tracing::warn!(zone = zone_id, error = %e, "showing zero countdown");
                }
                TimeRemaining::ZERO
            }
        }
    }

    /// Whether a failure for `zone_id` has been logged and not yet recovered.
    pub fn has_reported(&self, zone_id: &str) -> bool {
        self.reported.contains(zone_id)
    }
}
