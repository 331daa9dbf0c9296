#[cfg(test)]
pub mod helpers {
    use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

    use crate::catalog::Catalog;
    use crate::civil::CivilDateTime;
    use crate::error::CountdownError;
    use crate::model::ZoneRecord;
    use crate::provider::TimeService;

    struct FixedZone {
        id: String,
        offset: UtcOffset,
        country: Option<(String, String)>,
    }

    /// Time service with hand-picked zones at fixed offsets.
    #[derive(Default)]
    pub struct FixedTimeService {
        zones: Vec<FixedZone>,
        ambient: Option<String>,
        broken: Vec<String>,
    }

    impl FixedTimeService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_zone(mut self, id: &str, offset_hours: i8) -> Self {
            self.zones.push(FixedZone {
                id: id.to_string(),
                offset: UtcOffset::from_hms(offset_hours, 0, 0).unwrap(),
                country: None,
            });
            self
        }

        pub fn with_country_zone(mut self, id: &str, offset_hours: i8, code: &str, name: &str) -> Self {
            self.zones.push(FixedZone {
                id: id.to_string(),
                offset: UtcOffset::from_hms(offset_hours, 0, 0).unwrap(),
                country: Some((code.to_string(), name.to_string())),
            });
            self
        }

        pub fn with_ambient(mut self, id: &str) -> Self {
            self.ambient = Some(id.to_string());
            self
        }

        /// Zone that is listed but whose conversion always fails.
        pub fn with_broken_zone(mut self, id: &str) -> Self {
            self.broken.push(id.to_string());
            self.with_zone(id, 0)
        }
    }

    impl TimeService for FixedTimeService {
        fn zone_ids(&self) -> Vec<String> {
            self.zones.iter().map(|z| z.id.clone()).collect()
        }

        fn country_for(&self, zone_id: &str) -> Option<(String, String)> {
            self.zones
                .iter()
                .find(|z| z.id == zone_id)
                .and_then(|z| z.country.clone())
        }

        fn civil_now(
            &self,
            zone_id: &str,
            now_utc: OffsetDateTime,
        ) -> Result<CivilDateTime, CountdownError> {
            if self.broken.iter().any(|b| b == zone_id) {
                return Err(CountdownError::Conversion {
                    zone: zone_id.to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            let zone = self
                .zones
                .iter()
                .find(|z| z.id == zone_id)
                .ok_or_else(|| CountdownError::UnknownZone(zone_id.to_string()))?;
            let local = now_utc.to_offset(zone.offset);
            Ok(CivilDateTime::new(PrimitiveDateTime::new(
                local.date(),
                local.time(),
            )))
        }

        fn ambient_zone(&self) -> Option<String> {
            self.ambient.clone()
        }
    }

    pub fn make_zone(id: &str, country: Option<(&str, &str)>) -> ZoneRecord {
        let record = ZoneRecord::new(id);
        match country {
            Some((code, name)) => record.with_country(code, name),
            None => record,
        }
    }

    /// Small catalog spanning several countries plus an unmapped zone.
    pub fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            make_zone("Europe/Paris", Some(("FR", "France"))),
            make_zone("Europe/Berlin", Some(("DE", "Germany"))),
            make_zone("Europe/Busingen", Some(("DE", "Germany"))),
            make_zone("Indian/Reunion", Some(("RE", "Réunion"))),
            make_zone("America/Argentina/Buenos_Aires", Some(("AR", "Argentina"))),
            make_zone("America/New_York", Some(("US", "United States of America"))),
            make_zone("Etc/UTC", None),
        ])
    }
}
