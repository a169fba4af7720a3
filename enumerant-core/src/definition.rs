//! Definition records for enum types

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// ============================================================================
// IDENTITY
// ============================================================================

/// Identity of an enum definition.
///
/// Two definitions are the same definition iff their ids are equal. A derived
/// definition always has its own id, so values of a derived definition never
/// compare equal to values of its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(String);

impl DefinitionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DefinitionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DefinitionId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for DefinitionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// DEFINITION RECORD
// ============================================================================

/// Introspection record of one enum definition.
///
/// `members` is the explicit, ordered declaration list. `doc` may carry
/// additional `@method static self Name()` declarations which the resolver
/// scans when enabled. `remap` overrides the canonical value of a declared
/// name; lookups are by exact declared spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: DefinitionId,
    pub parent: Option<DefinitionId>,
    pub members: Vec<String>,
    pub doc: Option<String>,
    pub remap: Vec<(String, String)>,
}

impl Definition {
    /// Create an empty definition with no parent.
    pub fn new(id: impl Into<DefinitionId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            members: Vec::new(),
            doc: None,
            remap: Vec::new(),
        }
    }

    /// Declare an enum ancestor. Its members and remaps are inherited.
    pub fn extends(mut self, parent: impl Into<DefinitionId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declare one variant name.
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    /// Declare several variant names, in order.
    pub fn with_members<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(names.into_iter().map(Into::into));
        self
    }

    /// Attach documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Give a declared name a canonical value other than its own spelling.
    pub fn with_remap(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.remap.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.remap.push((name, value)),
        }
        self
    }

    /// Remapped value declared directly on this definition.
    pub fn remapped(&self, name: &str) -> Option<&str> {
        self.remap
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A Rust type that describes an enum definition.
///
/// Gives call sites a typed handle on a definition while the registry stays
/// keyed by [`DefinitionId`].
pub trait EnumDefinition: 'static {
    /// Definition name, used as its id.
    const NAME: &'static str;

    /// Build the introspection record for this definition.
    fn describe() -> Definition;

    fn id() -> DefinitionId {
        DefinitionId::new(Self::NAME)
    }
}
