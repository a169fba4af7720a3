//! Definition resolver: turns definition records into variant tables.
//!
//! Resolution order for a definition `D`:
//! 1. declared members of `D`, then of each ancestor (nearest first)
//! 2. `@method static self Name()` declarations in `D`'s own docs
//!
//! Each name maps to its remapped value if one is declared on `D` or an
//! ancestor (nearest wins), otherwise to the name itself.

use crate::catalog::Introspect;
use enumerant_core::{
    fold_name, Definition, DefinitionId, EnumError, EnumResult, RegistryConfig, ShadowPolicy,
    Variant, VariantSource, VariantTable,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static DOCUMENTED_VARIANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@method\s+static\s+self\s+(\w+)\(\)").expect("documented variant pattern")
});

/// Names declared through `@method static self Name()` tags, in order.
pub fn documented_variants(doc: &str) -> Vec<&str> {
    DOCUMENTED_VARIANT
        .captures_iter(doc)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Builds variant tables from definition records.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: RegistryConfig,
}

impl Resolver {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve the variant table of `id`.
    ///
    /// Pure with respect to `source`: resolving the same definition twice
    /// yields identical tables.
    pub fn resolve<I>(&self, source: &I, id: &DefinitionId) -> EnumResult<VariantTable>
    where
        I: Introspect + ?Sized,
    {
        let lineage = source.lineage(id)?;
        let remap = inherited_remap(&lineage);
        let mut table = VariantTable::new();

        for def in &lineage {
            self.insert_members(&mut table, id, def, &remap)?;
        }

        if self.config.scan_docs {
            if let Some(doc) = lineage.first().and_then(|d| d.doc.as_deref()) {
                self.insert_documented(&mut table, id, doc, &remap)?;
            }
        }

        tracing::debug!(
            definition = %id,
            variants = table.len(),
            ancestors = lineage.len() - 1,
            "resolved enum definition"
        );

        Ok(table)
    }

    fn insert_members(
        &self,
        table: &mut VariantTable,
        id: &DefinitionId,
        def: &Definition,
        remap: &HashMap<&str, &str>,
    ) -> EnumResult<()> {
        let mut local: HashMap<String, &str> = HashMap::new();

        for name in &def.members {
            let key = fold_name(name);
            if let Some(first) = local.get(&key) {
                if *first == name.as_str() {
                    continue;
                }
                return Err(EnumError::AmbiguousVariant {
                    definition: id.clone(),
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            local.insert(key, name);

            // Overridden by a nearer definition in the lineage.
            if table.contains_key(name) {
                continue;
            }
            table.insert(variant(name, remap, VariantSource::Member));
        }

        Ok(())
    }

    fn insert_documented(
        &self,
        table: &mut VariantTable,
        id: &DefinitionId,
        doc: &str,
        remap: &HashMap<&str, &str>,
    ) -> EnumResult<()> {
        let mut local: HashMap<String, &str> = HashMap::new();

        for name in documented_variants(doc) {
            let key = fold_name(name);
            if let Some(first) = local.get(&key) {
                if *first == name {
                    continue;
                }
                return Err(EnumError::AmbiguousVariant {
                    definition: id.clone(),
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
            local.insert(key, name);

            match table.get(name) {
                Some(existing) if existing.source == VariantSource::Member => {
                    match self.config.shadow_policy {
                        ShadowPolicy::Shadow => {
                            tracing::trace!(
                                definition = %id,
                                variant = name,
                                "documented variant shadowed by member"
                            );
                        }
                        ShadowPolicy::Reject => {
                            return Err(EnumError::ShadowedVariant {
                                definition: id.clone(),
                                name: name.to_string(),
                            });
                        }
                    }
                }
                Some(_) => {}
                None => {
                    table.insert(variant(name, remap, VariantSource::Documented));
                }
            }
        }

        Ok(())
    }
}

/// Remap entries visible to the first definition of `lineage`.
fn inherited_remap<'a>(lineage: &[&'a Definition]) -> HashMap<&'a str, &'a str> {
    let mut remap = HashMap::new();
    for def in lineage.iter().rev() {
        for (name, value) in &def.remap {
            remap.insert(name.as_str(), value.as_str());
        }
    }
    remap
}

fn variant(name: &str, remap: &HashMap<&str, &str>, source: VariantSource) -> Variant {
    Variant {
        declared: name.to_string(),
        value: remap.get(name).copied().unwrap_or(name).to_string(),
        source,
    }
}
