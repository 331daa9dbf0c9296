use crate::catalog::Catalog;
use crate::model::{ZoneRecord, ZoneSearchResult};

const FLAG_SERVICE: &str = "https://flagsapi.com";

fn matches_query(record: &ZoneRecord, lower_query: &str) -> bool {
    record.id.to_lowercase().contains(lower_query)
        || record
            .country_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(lower_query))
}

/// Narrow the catalog to records whose zone id or country name contains
/// `query`, ignoring case. Catalog order is kept.
///
/// An empty query hands back the catalog itself without scanning it.
pub fn filter(catalog: &Catalog, query: &str) -> Catalog {
    if query.is_empty() {
        return catalog.clone();
    }

    let lower_query = query.to_lowercase();
    let records: Vec<ZoneRecord> = catalog
        .iter()
        .filter(|record| matches_query(record, &lower_query))
        .cloned()
        .collect();

    Catalog::from_ordered(records)
}

pub fn search_zones(catalog: &Catalog, query: &str) -> ZoneSearchResult {
    let zones = filter(catalog, query).records().to_vec();
    let match_count = zones.len();

    ZoneSearchResult {
        query: query.to_string(),
        zones,
        match_count,
    }
}

/// Last `/` segment of the zone id with underscores turned into spaces.
pub fn humanized_city(zone_id: &str) -> String {
    match zone_id.rsplit('/').next() {
        Some(city) if !city.is_empty() => city.replace('_', " "),
        _ => zone_id.to_string(),
    }
}

/// `"Country (City)"`, or just the city when no country is known.
pub fn display_name(record: &ZoneRecord) -> String {
    let city = humanized_city(&record.id);
    match record.country_name {
        Some(ref country) => format!("{country} ({city})"),
        None => city,
    }
}

/// Flag image for the record's country, if it has one.
pub fn flag_url(record: &ZoneRecord) -> Option<String> {
    record
        .country_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .map(|code| format!("{FLAG_SERVICE}/{}/flat/64.png", code.to_uppercase()))
}
