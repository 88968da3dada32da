//! Stable grouping of decoded records by zone.

use std::collections::HashMap;

use crate::types::CanonicalRecord;

/// Records destined for one zone, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGroup {
    pub zone: String,
    pub records: Vec<CanonicalRecord>,
}

/// Zone → records mapping.
///
/// Records keep their relative input order within a zone. Zones are
/// iterated in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct ZoneGroups {
    groups: Vec<ZoneGroup>,
    index: HashMap<String, usize>,
}

impl ZoneGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to its zone's group.
    pub fn push(&mut self, record: CanonicalRecord) {
        if let Some(&i) = self.index.get(&record.zone) {
            self.groups[i].records.push(record);
            return;
        }
        self.index.insert(record.zone.clone(), self.groups.len());
        self.groups.push(ZoneGroup {
            zone: record.zone.clone(),
            records: vec![record],
        });
    }

    /// Records of `zone`, if any were grouped there.
    pub fn get(&self, zone: &str) -> Option<&[CanonicalRecord]> {
        self.index
            .get(zone)
            .map(|&i| self.groups[i].records.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneGroup> {
        self.groups.iter()
    }

    /// Number of zones.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all zones.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

impl FromIterator<CanonicalRecord> for ZoneGroups {
    fn from_iter<I: IntoIterator<Item = CanonicalRecord>>(iter: I) -> Self {
        let mut groups = Self::new();
        for record in iter {
            groups.push(record);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a ZoneGroups {
    type Item = &'a ZoneGroup;
    type IntoIter = std::slice::Iter<'a, ZoneGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group records by their `zone`.
pub fn group_by_zone<I>(records: I) -> ZoneGroups
where
    I: IntoIterator<Item = CanonicalRecord>,
{
    records.into_iter().collect()
}
