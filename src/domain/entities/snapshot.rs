//! Whole-registry snapshot, the unit of durable persistence.

use serde::Serialize;
use std::collections::BTreeMap;

use super::link::{LinkEntry, LinkTargets};

/// Every registered link keyed by slug.
///
/// Serializes as a single JSON object `{ "<slug>": { "ios", "android", "default" } }`.
/// A `BTreeMap` keeps the file output stable between writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkSnapshot {
    links: BTreeMap<String, LinkTargets>,
}

impl LinkSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: String, targets: LinkTargets) {
        self.links.insert(slug, targets);
    }

    pub fn get(&self, slug: &str) -> Option<&LinkTargets> {
        self.links.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.links.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates entries in slug order.
    pub fn entries(&self) -> impl Iterator<Item = LinkEntry> + '_ {
        self.links
            .iter()
            .map(|(slug, targets)| LinkEntry::new(slug.clone(), targets.clone()))
    }

    pub fn into_entries(self) -> impl Iterator<Item = LinkEntry> {
        self.links
            .into_iter()
            .map(|(slug, targets)| LinkEntry::new(slug, targets))
    }
}

impl FromIterator<LinkEntry> for LinkSnapshot {
    fn from_iter<I: IntoIterator<Item = LinkEntry>>(iter: I) -> Self {
        Self {
            links: iter
                .into_iter()
                .map(|entry| (entry.slug, entry.targets))
                .collect(),
        }
    }
}
