// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the wizard and the search engines.
//!
//! Everything here is plain data: step identifiers, the multi-valued form
//! record a wizard step captures, the search filters a results page carries,
//! and the page groups a pagination control renders.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// STEP IDENTITY
// ============================================================================

static NEXT_STEP_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique step identifier.
///
/// Ids come from a global counter, so an id is never handed out twice even
/// after the step that owned it has been deleted. UI layers use it as a
/// stable element key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u64);

impl StepId {
    /// Allocate the next id.
    pub fn next() -> Self {
        StepId(NEXT_STEP_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// FORM RECORD
// ============================================================================

/// Ordered multimap of form entries, the shape a browser `FormData` has.
///
/// A key may appear any number of times. Entry order is insertion order,
/// which is what [`crate::wizard::combine_step_data`] preserves when it
/// concatenates records from several steps.
///
/// Serializes as a JSON object of `key -> [values...]`, keys in first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    entries: Vec<(String, String)>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(key, value)` pairs, keeping their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add an entry without touching existing values for the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for (k, _) in &self.entries {
            if !seen.contains(&k.as_str()) {
                seen.push(k);
            }
        }
        seen
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Append every entry of `other` after the existing ones.
    pub fn extend(&mut self, other: &FormRecord) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keys = self.keys();
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            let values: Vec<&str> = self.get_all(key).collect();
            map.serialize_entry(key, &values)?;
        }
        map.end()
    }
}

/// Accepts either `{"key": "value"}` or `{"key": ["v1", "v2"]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for FormRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json's Map keeps insertion order only with preserve_order, so
        // read the object as a sequence of pairs instead.
        struct RecordVisitor;

        impl<'de> serde::de::Visitor<'de> for RecordVisitor {
            type Value = FormRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to a string or list of strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<FormRecord, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut record = FormRecord::new();
                while let Some((key, value)) = access.next_entry::<String, OneOrMany>()? {
                    match value {
                        OneOrMany::One(v) => record.append(key, v),
                        OneOrMany::Many(vs) => {
                            for v in vs {
                                record.append(key.clone(), v);
                            }
                        }
                    }
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

// ============================================================================
// SEARCH FILTERS
// ============================================================================

/// Document kinds held by the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocType {
    /// Summary of Product Characteristics
    Spc,
    /// Patient Information Leaflet
    Pil,
    /// Public Assessment Report
    Par,
}

impl DocType {
    /// Value stored in the index's `doc_type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Spc => "Spc",
            DocType::Pil => "Pil",
            DocType::Par => "Par",
        }
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spc" => Ok(DocType::Spc),
            "pil" => Ok(DocType::Pil),
            "par" => Ok(DocType::Par),
            other => Err(format!("unknown document type '{}'", other)),
        }
    }
}

/// Licence territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TerritoryType {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "NI")]
    Ni,
}

impl TerritoryType {
    pub fn as_str(self) -> &'static str {
        match self {
            TerritoryType::Uk => "UK",
            TerritoryType::Gb => "GB",
            TerritoryType::Ni => "NI",
        }
    }
}

impl std::str::FromStr for TerritoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UK" => Ok(TerritoryType::Uk),
            "GB" => Ok(TerritoryType::Gb),
            "NI" => Ok(TerritoryType::Ni),
            other => Err(format!("unknown territory '{}'", other)),
        }
    }
}

/// Result ordering requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Relevance,
    #[serde(rename = "a-z")]
    AToZ,
    #[serde(rename = "z-a")]
    ZToA,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "a-z" => Ok(SortOrder::AToZ),
            "z-a" => Ok(SortOrder::ZToA),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Filters applied server-side to a search. Every present clause is AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub doc_types: BTreeSet<DocType>,
    pub territory_types: BTreeSet<TerritoryType>,
    pub substance_name: Option<String>,
    pub product_name: Option<String>,
    pub sort_order: SortOrder,
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Page numbers a pagination control shows, split into the groups an
/// ellipsis goes between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationGroups {
    pub first_group: Vec<usize>,
    pub middle_group: Vec<usize>,
    pub last_group: Vec<usize>,
}

impl PaginationGroups {
    /// Non-empty groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &[usize]> {
        [
            self.first_group.as_slice(),
            self.middle_group.as_slice(),
            self.last_group.as_slice(),
        ]
        .into_iter()
        .filter(|g| !g.is_empty())
    }
}
