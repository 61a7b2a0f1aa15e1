//! Link entity: a slug with one target URL per platform.

use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// The three resolved redirect targets of a link.
///
/// This is also the on-disk shape of a single snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTargets {
    pub ios: String,
    pub android: String,
    pub default: String,
}

impl LinkTargets {
    /// Returns the target a visitor on `platform` is sent to.
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.android,
            Platform::IosFamily => &self.ios,
            Platform::Other => &self.default,
        }
    }
}

/// A registered link.
///
/// Every field is non-empty once the entry exists; entries are only built from
/// a [`LinkInput`] that survived reconciliation or from a validated snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub slug: String,
    pub targets: LinkTargets,
}

impl LinkEntry {
    /// Creates a new LinkEntry instance.
    pub fn new(slug: String, targets: LinkTargets) -> Self {
        Self { slug, targets }
    }

    /// Returns the redirect target for the given platform.
    pub fn target_for(&self, platform: Platform) -> &str {
        self.targets.for_platform(platform)
    }
}

/// Registration input: any subset of the three targets.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInput {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub default: Option<String>,
}

impl LinkInput {
    /// Creates an input, dropping empty strings.
    pub fn new(ios: Option<String>, android: Option<String>, default: Option<String>) -> Self {
        let present = |value: Option<String>| value.filter(|s| !s.is_empty());
        Self {
            ios: present(ios),
            android: present(android),
            default: present(default),
        }
    }

    /// Returns true when no target was supplied.
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_none())
    }

    /// Iterates over the supplied targets as `(field name, value)` pairs.
    pub fn present_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("ios", self.ios.as_deref()),
            ("android", self.android.as_deref()),
            ("default", self.default.as_deref()),
        ]
        .into_iter()
        .map(|(name, value)| (name, value.filter(|s| !s.is_empty())))
    }

    /// Fills every platform target from the supplied ones.
    ///
    /// Each target takes the first available value in its own fallback order:
    ///
    /// - `android`: android, default, ios
    /// - `ios`: ios, default, android
    /// - `default`: default, android, ios
    ///
    /// All three orders read the original input, never each other's output.
    /// Returns `None` only when the input is empty.
    pub fn reconcile(&self) -> Option<LinkTargets> {
        let first = |order: [&Option<String>; 3]| {
            order
                .into_iter()
                .flatten()
                .find(|s| !s.is_empty())
                .cloned()
        };

        Some(LinkTargets {
            android: first([&self.android, &self.default, &self.ios])?,
            ios: first([&self.ios, &self.default, &self.android])?,
            default: first([&self.default, &self.android, &self.ios])?,
        })
    }
}
