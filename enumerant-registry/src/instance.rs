//! Enum values: construction, comparison and serialization.

use crate::registry::Registry;
use enumerant_core::{DefinitionId, EnumDefinition, EnumError, EnumResult};
use indexmap::IndexMap;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ENUM VALUE
// ============================================================================

/// One value of an enum definition.
///
/// Only the registry constructs values, and only from canonical values of the
/// definition's variant table. Equality requires both the same definition and
/// the same canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    definition: DefinitionId,
    value: String,
}

impl EnumValue {
    pub fn definition(&self) -> &DefinitionId {
        &self.definition
    }

    /// The canonical value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Compare against another value or a raw string.
    ///
    /// Raw strings are first constructed against this value's definition, so
    /// an unknown raw value is an error rather than `false`.
    pub fn equals<'a>(
        &self,
        registry: &Registry,
        other: impl Into<Operand<'a>>,
    ) -> EnumResult<bool> {
        match other.into() {
            Operand::Value(other) => Ok(self == other),
            Operand::Raw(raw) => {
                let other = registry.from(&self.definition, raw)?;
                Ok(*self == other)
            }
        }
    }

    /// True if any candidate equals this value. Stops at the first match.
    pub fn is_one_of<'a, I>(&self, registry: &Registry, candidates: I) -> EnumResult<bool>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        for candidate in candidates {
            if self.equals(registry, candidate)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for EnumValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Right-hand side of a comparison: a raw string or an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Raw(&'a str),
    Value(&'a EnumValue),
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(raw: &'a str) -> Self {
        Operand::Raw(raw)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(raw: &'a String) -> Self {
        Operand::Raw(raw)
    }
}

impl<'a> From<&'a EnumValue> for Operand<'a> {
    fn from(value: &'a EnumValue) -> Self {
        Operand::Value(value)
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Registry {
    /// Construct a value of `id` from an optional raw value.
    ///
    /// The raw value may name a variant (case-insensitively) or be one of the
    /// definition's canonical values.
    pub fn construct(&self, id: &DefinitionId, raw: Option<&str>) -> EnumResult<EnumValue> {
        let table = self.table(id)?;
        let raw = raw.ok_or_else(|| EnumError::MissingValue {
            definition: id.clone(),
        })?;
        let value = table
            .canonical(raw)
            .ok_or_else(|| EnumError::UnknownVariant {
                definition: id.clone(),
                value: raw.to_string(),
            })?;

        Ok(EnumValue {
            definition: id.clone(),
            value: value.to_string(),
        })
    }

    /// Construct a value of `id` from an explicit raw value.
    pub fn from(&self, id: &DefinitionId, raw: &str) -> EnumResult<EnumValue> {
        self.construct(id, Some(raw))
    }

    /// Construct a value of a typed definition, registering it on first use.
    pub fn from_type<T: EnumDefinition>(&self, raw: &str) -> EnumResult<EnumValue> {
        let id = self.register_type::<T>()?;
        self.from(&id, raw)
    }

    /// Full `{name: value}` table of `id`, in declaration order.
    pub fn to_array(&self, id: &DefinitionId) -> EnumResult<IndexMap<String, String>> {
        Ok(self.table(id)?.to_map())
    }

    pub fn keys(&self, id: &DefinitionId) -> EnumResult<Vec<String>> {
        Ok(self.table(id)?.keys().map(str::to_string).collect())
    }

    pub fn values(&self, id: &DefinitionId) -> EnumResult<Vec<String>> {
        Ok(self.table(id)?.values().map(str::to_string).collect())
    }

    /// Decode a JSON scalar and construct a value of `id` from it.
    pub fn decode_json(&self, id: &DefinitionId, json: &str) -> EnumResult<EnumValue> {
        let raw: Scalar = serde_json::from_str(json).map_err(|e| EnumError::Decode {
            definition: id.clone(),
            reason: e.to_string(),
        })?;
        self.from_serialized(id, &raw.into_raw())
    }

    /// Construct from an external representation. Serialized scalars are
    /// canonical values, so an exact value match takes precedence over a
    /// case-insensitive name match.
    fn from_serialized(&self, id: &DefinitionId, raw: &str) -> EnumResult<EnumValue> {
        let table = self.table(id)?;
        if table.contains_value(raw) {
            return Ok(EnumValue {
                definition: id.clone(),
                value: raw.to_string(),
            });
        }
        self.from(id, raw)
    }

    /// Deserialization seed bound to one definition of this registry.
    pub fn seed<'a>(&'a self, id: &'a DefinitionId) -> EnumSeed<'a> {
        EnumSeed {
            registry: self,
            definition: id,
        }
    }
}

// ============================================================================
// DESERIALIZATION
// ============================================================================

/// Accepted external representations of a raw value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
}

impl Scalar {
    fn into_raw(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
        }
    }
}

/// [`DeserializeSeed`] that validates the decoded scalar against a definition.
#[derive(Debug, Clone, Copy)]
pub struct EnumSeed<'a> {
    registry: &'a Registry,
    definition: &'a DefinitionId,
}

impl<'de, 'a> DeserializeSeed<'de> for EnumSeed<'a> {
    type Value = EnumValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<EnumValue, D::Error> {
        let raw = Scalar::deserialize(deserializer)?;
        self.registry
            .from_serialized(self.definition, &raw.into_raw())
            .map_err(de::Error::custom)
    }
}
