//! Law registry mapping law names and aliases to e-Gov law ids.
//!
//! The registry is built once from a `lawlist.json` style source and is
//! read-only afterwards, so a single instance can be shared by any number of
//! concurrent requests.
//!
//! # Lookup policy
//!
//! 1. An exact match against a registered name or alias wins.
//! 2. Otherwise the longest registered name that is a prefix of the candidate
//!    wins. This keeps `民法` from shadowing `民法施行法`.
//! 3. Among prefixes of equal length, the one registered first wins.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// One law as loaded from the registry source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub canonical_name: String,
    pub id: String,
    pub aliases: Vec<String>,
}

/// Wire form of a registry source record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LawRecord {
    law_name: String,
    law_id: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Immutable name-to-law lookup table.
#[derive(Debug, Clone, Default)]
pub struct LawRegistry {
    entries: Vec<RegistryEntry>,
    /// Every name and alias in registration order, with its entry index.
    keys: Vec<(String, usize)>,
    exact: HashMap<String, usize>,
}

impl LawRegistry {
    /// Create an empty registry. Every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from in-memory entries.
    ///
    /// Entries with an empty name or id are skipped. A key that is already
    /// registered keeps its first owner.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry);
        }
        registry
    }

    /// Build a registry from JSON text.
    ///
    /// Malformed records are skipped; a document that is not a JSON array
    /// produces an empty registry.
    #[must_use]
    pub fn from_json_str(json: &str) -> Self {
        let records: Vec<Value> = match serde_json::from_str(json) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "Law registry source is not a JSON array, registry is empty");
                return Self::new();
            }
        };

        let entries = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<LawRecord>(record) {
                Ok(record) => Some(RegistryEntry {
                    canonical_name: record.law_name.trim().to_string(),
                    id: record.law_id.trim().to_string(),
                    aliases: record.aliases,
                }),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed law registry record");
                    None
                }
            });

        let registry = Self::from_entries(entries);
        tracing::info!(
            laws = registry.len(),
            keys = registry.keys.len(),
            "Law registry loaded"
        );
        registry
    }

    /// Load a registry from a JSON file.
    ///
    /// An unreadable file produces an empty registry.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_str(&json),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read law registry source, registry is empty"
                );
                Self::new()
            }
        }
    }

    fn insert(&mut self, entry: RegistryEntry) {
        if entry.canonical_name.is_empty() || entry.id.is_empty() {
            tracing::warn!(id = %entry.id, name = %entry.canonical_name, "Skipping law without name or id");
            return;
        }

        let index = self.entries.len();
        let names = std::iter::once(entry.canonical_name.clone())
            .chain(entry.aliases.iter().map(|a| a.trim().to_string()))
            .filter(|name| !name.is_empty());

        for name in names {
            if let Some(&owner) = self.exact.get(&name) {
                if owner != index {
                    tracing::warn!(
                        name = %name,
                        kept = %self.entries[owner].id,
                        ignored = %entry.id,
                        "Duplicate law registry key, keeping first"
                    );
                }
                continue;
            }
            self.exact.insert(name.clone(), index);
            self.keys.push((name, index));
        }

        self.entries.push(entry);
    }

    /// Resolve a law name candidate to its registry entry.
    #[must_use]
    pub fn resolve(&self, candidate: &str) -> Option<&RegistryEntry> {
        let candidate = candidate.trim();
        if let Some(&index) = self.exact.get(candidate) {
            return self.entries.get(index);
        }

        let mut best: Option<(usize, usize)> = None;
        for (name, index) in &self.keys {
            if !candidate.starts_with(name.as_str()) {
                continue;
            }
            // Strictly longer only, so earlier registrations win ties.
            if best.is_none_or(|(len, _)| name.len() > len) {
                best = Some((name.len(), *index));
            }
        }

        best.and_then(|(_, index)| self.entries.get(index))
    }

    /// Resolve a law name candidate to its id.
    #[must_use]
    pub fn resolve_id(&self, candidate: &str) -> Option<&str> {
        self.resolve(candidate).map(|entry| entry.id.as_str())
    }

    /// Number of registered laws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no laws are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
