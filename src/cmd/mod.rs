mod countdown;
mod pick;
mod zones;

pub use self::countdown::{cmd_countdown, CountdownOptions};
pub use self::pick::cmd_pick;
pub use self::zones::cmd_zones;

use crate::civil::CivilDateTime;
use crate::config::Config;
use crate::model::{CountdownReport, TimeRemaining, ZoneRecord};
use crate::provider::{default_zone, TimeService};
use crate::search::display_name;

/// Zone to count down in: flag, then config, then the system zone.
pub(crate) fn resolve_zone(
    service: &dyn TimeService,
    config: &Config,
    zone_flag: Option<&str>,
) -> String {
    zone_flag
        .map(str::to_string)
        .or_else(|| config.zone.clone())
        .unwrap_or_else(|| default_zone(service))
}

/// Catalog-style record for a single zone, without building the catalog.
pub(crate) fn zone_record(service: &dyn TimeService, zone_id: &str) -> ZoneRecord {
    match service.country_for(zone_id) {
        Some((code, name)) => ZoneRecord::new(zone_id).with_country(code, name),
        None => ZoneRecord::new(zone_id),
    }
}

pub(crate) fn build_report(
    record: &ZoneRecord,
    target: &CivilDateTime,
    remaining: TimeRemaining,
) -> CountdownReport {
    CountdownReport {
        zone: record.id.clone(),
        display_name: display_name(record),
        target: target.to_string(),
        exhausted: remaining.is_exhausted(),
        remaining,
    }
}
