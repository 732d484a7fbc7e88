//! Rudiment dictionary and sticking helpers.
//!
//! The dictionary is plain data handed to the renderer, so new rudiments can
//! be added from JSON without touching code. Lookups never fail: a missing
//! key resolves to the fallback entry, which is always present.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::NotationError;
use crate::model::{Hand, RudimentDefinition};

/// Key of the built-in rudiment and the default fallback.
pub const DEFAULT_RUDIMENT_KEY: &str = "paradiddle";

/// Sticking used when a pattern is empty or malformed after trimming.
pub const FALLBACK_STICKING: &str = "R";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RudimentDictionary {
    entries: BTreeMap<String, RudimentDefinition>,
    fallback_key: String,
}

impl Default for RudimentDictionary {
    fn default() -> Self {
        Self::from_entries(BTreeMap::new())
    }
}

impl RudimentDictionary {
    /// Build a dictionary whose fallback is the paradiddle entry.
    pub fn from_entries(entries: BTreeMap<String, RudimentDefinition>) -> Self {
        Self::with_fallback(entries, DEFAULT_RUDIMENT_KEY)
    }

    /// Build a dictionary with a custom fallback key. If `entries` has no
    /// entry under that key, the built-in paradiddle is stored there.
    pub fn with_fallback(
        mut entries: BTreeMap<String, RudimentDefinition>,
        fallback_key: &str,
    ) -> Self {
        entries
            .entry(fallback_key.to_string())
            .or_insert_with(RudimentDefinition::paradiddle);
        Self {
            entries,
            fallback_key: fallback_key.to_string(),
        }
    }

    /// Load a JSON object mapping keys to definitions, e.g.
    /// `{"paradiddle": {"name": "...", "sticking": "LRLL", "accentEvery": 8}}`.
    pub fn from_json(json: &str) -> Result<Self, NotationError> {
        let entries: BTreeMap<String, RudimentDefinition> = serde_json::from_str(json)
            .map_err(|e| NotationError::InvalidConfig(format!("rudiment dictionary: {e}")))?;
        Ok(Self::from_entries(entries))
    }

    /// Resolve a key, falling back to the default rudiment.
    pub fn lookup(&self, key: &str) -> &RudimentDefinition {
        if let Some(def) = self.entries.get(key) {
            return def;
        }
        log::warn!(
            "Unknown rudiment '{}', using '{}'",
            key,
            self.fallback_key
        );
        &self.entries[&self.fallback_key]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback_key
    }
}

/// Trim and uppercase a sticking. A pattern that is empty, or that holds
/// anything besides `L` and `R`, becomes a single right-hand stroke.
pub fn normalize_sticking(sticking: &str) -> String {
    let hands = sticking.trim().to_uppercase();
    if hands.is_empty() {
        log::warn!("Empty sticking, using '{}'", FALLBACK_STICKING);
        return FALLBACK_STICKING.to_string();
    }
    if let Some(bad) = hands.chars().find(|c| !matches!(c, 'L' | 'R')) {
        log::warn!(
            "Sticking '{}' contains {:?}, using '{}'",
            hands,
            bad,
            FALLBACK_STICKING
        );
        return FALLBACK_STICKING.to_string();
    }
    hands
}

/// Parse a sticking into hands. See `normalize_sticking` for the fallback.
pub fn parse_sticking(sticking: &str) -> Vec<Hand> {
    normalize_sticking(sticking)
        .chars()
        .map(Hand::from_char)
        .collect()
}

/// Re-align a sticking so it begins on `desired_start`.
///
/// If the pattern already starts on that hand it is returned unchanged;
/// otherwise it is rotated left by exactly one stroke. This does not search
/// for a matching hand further into the pattern.
///
/// The default hit generator does not call this; it is for flows that honor
/// the requested start hand.
pub fn rotate_sticking(sticking: &str, desired_start: Hand) -> String {
    let hands = normalize_sticking(sticking);
    let mut chars = hands.chars();
    match chars.next() {
        Some(first) if first == desired_start.as_char() => hands,
        Some(first) => {
            let mut rotated: String = chars.collect();
            rotated.push(first);
            rotated
        }
        None => hands,
    }
}
