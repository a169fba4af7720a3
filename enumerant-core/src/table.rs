//! Resolved variant tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Case-fold a variant name into its table key.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Where a variant was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantSource {
    /// Explicit member of the definition or one of its ancestors
    Member,
    /// `@method static self Name()` declaration in the definition's docs
    Documented,
}

/// One resolved variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Name as spelled in the declaration
    pub declared: String,
    /// Canonical value held by instances of this variant
    pub value: String,
    pub source: VariantSource,
}

/// Mapping from lowercase variant name to canonical value, in declaration order.
///
/// Tables are built once by the resolver and never mutated after they are
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantTable {
    entries: IndexMap<String, Variant>,
}

impl VariantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a variant under its folded name, keeping the original position
    /// if the key already exists. Returns the replaced variant, if any.
    pub fn insert(&mut self, variant: Variant) -> Option<Variant> {
        self.entries.insert(fold_name(&variant.declared), variant)
    }

    /// Case-insensitive lookup by variant name.
    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.entries.get(fold_name(name).as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Canonical value for a variant name, matched case-insensitively.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.value.as_str())
    }

    /// Exact membership test against the canonical values.
    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.values().any(|v| v.value == value)
    }

    /// Canonical value for `raw`: the mapped value when `raw` names a
    /// variant, `raw` itself when it already is a canonical value.
    pub fn canonical(&self, raw: &str) -> Option<&str> {
        match self.value_of(raw) {
            Some(value) => Some(value),
            None => self
                .entries
                .values()
                .find(|v| v.value == raw)
                .map(|v| v.value.as_str()),
        }
    }

    /// Iterate `(key, variant)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|v| v.value.as_str())
    }

    /// Plain `{key: value}` map in declaration order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }
}
