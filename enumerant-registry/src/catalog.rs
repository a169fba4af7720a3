//! Definition catalog: the introspection side of the registry.
//!
//! The resolver never discovers definitions on its own. It asks an
//! [`Introspect`] implementation for the record of a definition and its
//! ancestors, and works purely from those records.

use enumerant_core::{Definition, DefinitionId, EnumError, EnumResult};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Source of definition records.
pub trait Introspect {
    /// Record for `id`, if known.
    fn lookup(&self, id: &DefinitionId) -> Option<&Definition>;

    /// The definition followed by its ancestors, nearest ancestor first.
    ///
    /// Fails with `UnknownDefinition` if any link of the chain is missing and
    /// with `CyclicInheritance` if the chain loops.
    fn lineage(&self, id: &DefinitionId) -> EnumResult<Vec<&Definition>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(id);

        while let Some(next) = current {
            if !seen.insert(next) {
                return Err(EnumError::CyclicInheritance {
                    definition: next.clone(),
                });
            }
            let def = self.lookup(next).ok_or_else(|| EnumError::UnknownDefinition {
                definition: next.clone(),
            })?;
            chain.push(def);
            current = def.parent.as_ref();
        }

        Ok(chain)
    }
}

/// In-memory, insertion-ordered store of definition records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: IndexMap<DefinitionId, Definition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition. Ids are unique; a second record under the same id is
    /// rejected rather than merged.
    pub fn insert(&mut self, definition: Definition) -> EnumResult<()> {
        if self.definitions.contains_key(&definition.id) {
            return Err(EnumError::DuplicateDefinition {
                definition: definition.id,
            });
        }
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn get(&self, id: &DefinitionId) -> Option<&Definition> {
        self.definitions.get(id)
    }

    pub fn contains(&self, id: &DefinitionId) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &DefinitionId> {
        self.definitions.keys()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Introspect for Catalog {
    fn lookup(&self, id: &DefinitionId) -> Option<&Definition> {
        self.get(id)
    }
}

impl FromIterator<Definition> for Catalog {
    /// Later duplicates are dropped with a warning; use [`Catalog::insert`]
    /// to detect them.
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for definition in iter {
            if let Err(err) = catalog.insert(definition) {
                tracing::warn!(error = %err, "dropping duplicate enum definition");
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        catalog.insert(Definition::new("A")).unwrap();
        let err = catalog.insert(Definition::new("A").with_member("x")).unwrap_err();
        assert_eq!(
            err,
            EnumError::DuplicateDefinition {
                definition: DefinitionId::new("A")
            }
        );
        assert!(catalog.get(&DefinitionId::new("A")).unwrap().members.is_empty());
    }

    #[test]
    fn test_collect_keeps_first_duplicate() {
        let catalog: Catalog = vec![
            Definition::new("A").with_member("first"),
            Definition::new("B"),
            Definition::new("A").with_member("second"),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(&DefinitionId::new("A")).unwrap().members,
            vec!["first".to_string()]
        );
    }

    #[test]
    fn test_lineage_nearest_first() {
        let catalog: Catalog = vec![
            Definition::new("Base"),
            Definition::new("Middle").extends("Base"),
            Definition::new("Leaf").extends("Middle"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = catalog
            .lineage(&DefinitionId::new("Leaf"))
            .unwrap()
            .iter()
            .map(|d| d.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["Leaf", "Middle", "Base"]);
    }

    #[test]
    fn test_lineage_detects_cycle() {
        let catalog: Catalog = vec![
            Definition::new("A").extends("B"),
            Definition::new("B").extends("A"),
        ]
        .into_iter()
        .collect();

        let err = catalog.lineage(&DefinitionId::new("A")).unwrap_err();
        assert!(matches!(err, EnumError::CyclicInheritance { .. }));
    }

    #[test]
    fn test_lineage_reports_missing_parent() {
        let catalog: Catalog = vec![Definition::new("Orphan").extends("Ghost")]
            .into_iter()
            .collect();

        let err = catalog.lineage(&DefinitionId::new("Orphan")).unwrap_err();
        assert_eq!(
            err,
            EnumError::UnknownDefinition {
                definition: DefinitionId::new("Ghost")
            }
        );
    }
}
