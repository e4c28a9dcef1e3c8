//! Catalog
//!
//! The engine never reaches for storage itself. Callers resolve the parts a build references and
//! hand them over through [`PartLookup`].

use rustc_hash::FxHashMap;

use crate::parts::{Part, PartCategory, PartUuid};

/// Resolves part identifiers to catalog records. Absent identifiers resolve to `None`.
pub trait PartLookup {
    /// Look up a single part.
    fn part(&self, uuid: PartUuid) -> Option<&Part>;
}

/// In-memory catalog keyed by part identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: FxHashMap<PartUuid, Part>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a part, returning the previous record.
    pub fn insert(&mut self, part: Part) -> Option<Part> {
        self.parts.insert(part.uuid, part)
    }

    /// Look up a part.
    pub fn get(&self, uuid: PartUuid) -> Option<&Part> {
        self.parts.get(&uuid)
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the catalog holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate over every part, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Parts of one category, cheapest first.
    pub fn in_category(&self, category: PartCategory) -> Vec<&Part> {
        let mut parts: Vec<_> = self
            .parts
            .values()
            .filter(|part| part.category() == category)
            .collect();

        parts.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));

        parts
    }

    /// Distinct categories present, in display order.
    pub fn categories(&self) -> Vec<PartCategory> {
        PartCategory::ALL
            .into_iter()
            .filter(|category| self.parts.values().any(|part| part.category() == *category))
            .collect()
    }
}

impl PartLookup for Catalog {
    fn part(&self, uuid: PartUuid) -> Option<&Part> {
        self.get(uuid)
    }
}

impl FromIterator<Part> for Catalog {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().map(|part| (part.uuid, part)).collect(),
        }
    }
}

impl Extend<Part> for Catalog {
    fn extend<I: IntoIterator<Item = Part>>(&mut self, iter: I) {
        self.parts
            .extend(iter.into_iter().map(|part| (part.uuid, part)));
    }
}
