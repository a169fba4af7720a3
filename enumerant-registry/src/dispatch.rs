//! Name-based dispatch: `Definition.variant()` and `value.isVariant()`.
//!
//! A call name is classified against the definition's cached variant table
//! into a [`Method`], which is then executed through the ordinary
//! construction and comparison operations.

use crate::instance::EnumValue;
use crate::registry::Registry;
use enumerant_core::{fold_name, DefinitionId, EnumError, EnumResult, VariantTable};

const PREDICATE_PREFIX: &str = "is";

/// Operation selected by a call name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// `isName`: compare against the variant named by `suffix`
    Predicate { suffix: String },
    /// `name`: construct the variant stored under `key`
    Construct { key: String },
}

impl Method {
    /// Classify a call name. Predicate names take precedence over variant
    /// names, so a variant literally called `isX` is reachable only through
    /// explicit construction.
    pub fn classify(name: &str, table: &VariantTable) -> Option<Method> {
        if let Some(suffix) = predicate_suffix(name) {
            return Some(Method::Predicate {
                suffix: suffix.to_string(),
            });
        }
        if table.contains_key(name) {
            return Some(Method::Construct {
                key: fold_name(name),
            });
        }
        None
    }
}

fn predicate_suffix(name: &str) -> Option<&str> {
    name.strip_prefix(PREDICATE_PREFIX)
        .filter(|suffix| !suffix.is_empty())
}

/// Result of a dispatched call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Value(EnumValue),
    Predicate(bool),
}

impl Dispatched {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dispatched::Predicate(b) => Some(*b),
            Dispatched::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<EnumValue> {
        match self {
            Dispatched::Value(v) => Some(v),
            Dispatched::Predicate(_) => None,
        }
    }
}

impl Registry {
    /// Dispatch a call made on the definition itself.
    ///
    /// - `isName(raw)`: constructs `raw` and tests it against `Name`; exactly
    ///   one argument is required.
    /// - `name()`: constructs the variant called `name`, case-insensitively.
    ///
    /// Any other name fails with `UnknownVariant`.
    pub fn call_static(
        &self,
        id: &DefinitionId,
        name: &str,
        args: &[&str],
    ) -> EnumResult<Dispatched> {
        let table = self.table(id)?;
        match Method::classify(name, &table) {
            Some(Method::Predicate { suffix }) => {
                let [raw] = args else {
                    return Err(EnumError::ArityError {
                        definition: id.clone(),
                        method: name.to_string(),
                        given: args.len(),
                    });
                };
                let value = self.from(id, raw)?;
                value.equals(self, suffix.as_str()).map(Dispatched::Predicate)
            }
            Some(Method::Construct { .. }) => self.from(id, name).map(Dispatched::Value),
            None => Err(EnumError::UnknownVariant {
                definition: id.clone(),
                value: name.to_string(),
            }),
        }
    }
}

impl EnumValue {
    /// Dispatch a call made on this value.
    ///
    /// - `isName()`: whether this value is the variant `Name`.
    /// - `name()`: a fresh value of the variant `name`; this value is untouched.
    ///
    /// Any other name fails with `NoSuchMethod`.
    pub fn call(&self, registry: &Registry, name: &str, args: &[&str]) -> EnumResult<Dispatched> {
        let table = registry.table(self.definition())?;
        match Method::classify(name, &table) {
            Some(Method::Predicate { suffix }) => self
                .equals(registry, suffix.as_str())
                .map(Dispatched::Predicate),
            Some(Method::Construct { .. }) => registry.call_static(self.definition(), name, args),
            None => Err(EnumError::NoSuchMethod {
                definition: self.definition().clone(),
                method: name.to_string(),
            }),
        }
    }

    /// Shorthand for the `is<Name>()` predicate.
    pub fn is(&self, registry: &Registry, variant: &str) -> EnumResult<bool> {
        self.equals(registry, variant)
    }
}
