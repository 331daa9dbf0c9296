use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use crate::model::ZoneRecord;
use crate::provider::TimeService;

/// Immutable, ordered list of every known zone.
///
/// Records are sorted by country name (zone id when the country is
/// unknown) and then by id, so the order is total. Clones share storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ZoneRecord]>,
}

impl Catalog {
    /// Build the catalog from a time service.
    ///
    /// Zones without a country are kept only when `include_unmapped` is set.
    pub fn build(service: &dyn TimeService, include_unmapped: bool) -> Self {
        let records: Vec<ZoneRecord> = service
            .zone_ids()
            .into_iter()
            .filter_map(|id| match service.country_for(&id) {
                Some((code, name)) => Some(ZoneRecord::new(id).with_country(code, name)),
                None if include_unmapped => Some(ZoneRecord::new(id)),
                None => None,
            })
            .collect();

        if records.is_empty() {
            tracing::warn!("time service returned no zones; catalog is empty");
        } else {
            tracing::debug!(zones = records.len(), "built zone catalog");
        }

        Self::from_records(records)
    }

    /// Sort and dedupe arbitrary records into a catalog.
    pub fn from_records(records: Vec<ZoneRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut records: Vec<ZoneRecord> = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        records.sort_by(compare_records);
        Self {
            records: records.into(),
        }
    }

    /// Wrap records that are already a subsequence of a sorted catalog.
    pub(crate) fn from_ordered(records: Vec<ZoneRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::from_ordered(Vec::new())
    }

    pub fn records(&self) -> &[ZoneRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ZoneRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// True when both catalogs are the same allocation.
    pub fn shares_storage(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Catalog {}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ZoneRecord;
    type IntoIter = std::slice::Iter<'a, ZoneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn compare_records(a: &ZoneRecord, b: &ZoneRecord) -> Ordering {
    collate(a.sort_name(), b.sort_name()).then_with(|| a.id.cmp(&b.id))
}

/// Locale-style comparison: case and common Latin accents are ignored first,
/// then the raw strings decide.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
