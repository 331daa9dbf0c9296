use time::OffsetDateTime;
use time_tz::{timezones, Offset, TimeZone};

use crate::civil::CivilDateTime;
use crate::countries;
use crate::error::CountdownError;

/// Zone used when the system zone cannot be determined.
pub const FALLBACK_ZONE: &str = "UTC";

/// Source of zone identifiers, country metadata and civil-time conversion.
///
/// The countdown and the catalog only ever talk to the clock and the
/// timezone database through this trait, so tests can plug in a fixed one.
pub trait TimeService {
    /// All zone identifiers the service can convert into.
    fn zone_ids(&self) -> Vec<String>;

    /// `(country code, country name)` for a zone, if it belongs to one country.
    fn country_for(&self, zone_id: &str) -> Option<(String, String)>;

    /// Wall-clock reading of `now_utc` in `zone_id`.
    fn civil_now(
        &self,
        zone_id: &str,
        now_utc: OffsetDateTime,
    ) -> Result<CivilDateTime, CountdownError>;

    /// The viewer's system zone, if it can be determined.
    fn ambient_zone(&self) -> Option<String>;
}

/// [`TimeService`] backed by the bundled IANA database.
#[derive(Debug, Default, Clone, Copy)]
pub struct TzdbService;

impl TimeService for TzdbService {
    fn zone_ids(&self) -> Vec<String> {
        timezones::iter().map(|tz| tz.name().to_string()).collect()
    }

    fn country_for(&self, zone_id: &str) -> Option<(String, String)> {
        countries::country_for(zone_id).map(|(code, name)| (code.to_string(), name.to_string()))
    }

    fn civil_now(
        &self,
        zone_id: &str,
        now_utc: OffsetDateTime,
    ) -> Result<CivilDateTime, CountdownError> {
        let tz = timezones::get_by_name(zone_id)
            .ok_or_else(|| CountdownError::UnknownZone(zone_id.to_string()))?;
        let offset = tz.get_offset_utc(&now_utc).to_utc();
        let local = now_utc
            .checked_to_offset(offset)
            .ok_or_else(|| CountdownError::Conversion {
                zone: zone_id.to_string(),
                reason: format!("offset {offset} puts the instant out of range"),
            })?;
        Ok(CivilDateTime::new(time::PrimitiveDateTime::new(
            local.date(),
            local.time(),
        )))
    }

    fn ambient_zone(&self) -> Option<String> {
        match iana_time_zone::get_timezone() {
            Ok(zone) => Some(zone),
            Err(e) => {
                tracing::debug!(error = %e, "could not determine system timezone");
                None
            }
        }
    }
}

/// Resolve the initial zone: the ambient zone, else [`FALLBACK_ZONE`].
pub fn default_zone(service: &dyn TimeService) -> String {
    service
        .ambient_zone()
        .unwrap_or_else(|| FALLBACK_ZONE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::parse_civil;
    use crate::test_helpers::helpers::FixedTimeService;
    use time::macros::datetime;

    #[test]
    fn test_tzdb_knows_common_zones() {
        let ids = TzdbService.zone_ids();
        assert!(ids.iter().any(|z| z == "Europe/Paris"));
        assert!(ids.iter().any(|z| z == "America/New_York"));
    }

    #[test]
    fn test_tzdb_civil_now_applies_offset() {
        // Tokyo has no DST: always UTC+9
        let now = datetime!(2025-12-31 14:59:00 UTC);
        let civil = TzdbService.civil_now("Asia/Tokyo", now).unwrap();
        assert_eq!(civil, parse_civil("2025-12-31 23:59:00").unwrap());
    }

    #[test]
    fn test_tzdb_civil_now_winter_offset() {
        // Paris in winter is UTC+1
        let now = datetime!(2025-12-31 22:30:00 UTC);
        let civil = TzdbService.civil_now("Europe/Paris", now).unwrap();
        assert_eq!(civil, parse_civil("2025-12-31 23:30:00").unwrap());
    }

    #[test]
    fn test_tzdb_unknown_zone() {
        let now = datetime!(2025-12-31 00:00:00 UTC);
        let err = TzdbService.civil_now("Mars/Olympus_Mons", now).unwrap_err();
        assert_eq!(err, CountdownError::UnknownZone("Mars/Olympus_Mons".into()));
    }

    #[test]
    fn test_tzdb_country_lookup() {
        assert_eq!(
            TzdbService.country_for("Europe/Berlin"),
            Some(("DE".to_string(), "Germany".to_string()))
        );
        assert_eq!(TzdbService.country_for("UTC"), None);
    }

    #[test]
    fn test_default_zone_uses_ambient() {
        let svc = FixedTimeService::new().with_ambient("Europe/Paris");
        assert_eq!(default_zone(&svc), "Europe/Paris");
    }

    #[test]
    fn test_default_zone_falls_back_to_utc() {
        let svc = FixedTimeService::new();
        assert_eq!(default_zone(&svc), FALLBACK_ZONE);
    }
}
