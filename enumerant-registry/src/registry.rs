//! Value registry: memoised variant tables keyed by definition identity.
//!
//! A table is resolved on the first request for its definition and reused for
//! the lifetime of the registry. There is no eviction and no invalidation.

use crate::catalog::Catalog;
use crate::resolver::Resolver;
use enumerant_core::{
    Definition, DefinitionId, EnumDefinition, EnumResult, RegistryConfig, VariantTable,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Statistics about table cache usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from an already resolved table.
    pub hits: u64,
    /// Requests that triggered a resolution.
    pub misses: u64,
    /// Number of cached tables.
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Registry of enum definitions and their resolved variant tables.
///
/// Reads are lock-shared. A cache miss resolves outside any lock and inserts
/// with first-writer-wins semantics, so concurrent misses on the same
/// definition at worst duplicate work.
#[derive(Debug, Default)]
pub struct Registry {
    catalog: RwLock<Catalog>,
    resolver: Resolver,
    tables: RwLock<HashMap<DefinitionId, Arc<VariantTable>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_catalog(config, Catalog::new())
    }

    /// Create a registry over an already populated catalog.
    pub fn with_catalog(config: RegistryConfig, catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            resolver: Resolver::new(config),
            tables: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        self.resolver.config()
    }

    /// Add a definition record. Ids are unique for the registry's lifetime.
    pub fn register(&self, definition: Definition) -> EnumResult<()> {
        let id = definition.id.clone();
        write_lock(&self.catalog).insert(definition)?;
        tracing::debug!(definition = %id, "registered enum definition");
        Ok(())
    }

    /// Register a typed definition. Registering a type whose name is already
    /// in the catalog is a no-op and keeps the first description.
    pub fn register_type<T: EnumDefinition>(&self) -> EnumResult<DefinitionId> {
        let id = T::id();
        if self.is_registered(&id) {
            return Ok(id);
        }

        let mut catalog = write_lock(&self.catalog);
        // Another thread may have registered between the two locks.
        if !catalog.contains(&id) {
            catalog.insert(T::describe())?;
            tracing::debug!(definition = %id, "registered enum definition");
        }
        Ok(id)
    }

    pub fn is_registered(&self, id: &DefinitionId) -> bool {
        read_lock(&self.catalog).contains(id)
    }

    /// Variant table of `id`, resolving and caching it on first use.
    pub fn table(&self, id: &DefinitionId) -> EnumResult<Arc<VariantTable>> {
        if let Some(table) = read_lock(&self.tables).get(id) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(definition = %id, "variant table cache hit");
            return Ok(Arc::clone(table));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let resolved = {
            let catalog = read_lock(&self.catalog);
            self.resolver.resolve(&*catalog, id)?
        };

        let mut tables = write_lock(&self.tables);
        let table = tables
            .entry(id.clone())
            .or_insert_with(|| Arc::new(resolved));
        Ok(Arc::clone(table))
    }

    /// Whether `id` already has a cached table.
    pub fn is_cached(&self, id: &DefinitionId) -> bool {
        read_lock(&self.tables).contains_key(id)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entry_count: read_lock(&self.tables).len() as u64,
        }
    }
}

// ============================================================================
// SAFE LOCK ACCESS HELPERS
// ============================================================================

/// Acquire a read lock, recovering from poisoning. Guarded data is only ever
/// appended to, so a panicking writer cannot leave it half-updated.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("registry lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("registry lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumerant_core::EnumError;
    use enumerant_test_utils::{catalog_definitions, DocOnlyEnum, MyEnum};

    fn registry() -> Registry {
        Registry::with_catalog(
            RegistryConfig::default(),
            catalog_definitions().into_iter().collect(),
        )
    }

    #[test]
    fn test_table_is_memoised() {
        let registry = registry();
        let id = MyEnum::id();
        assert!(!registry.is_cached(&id));

        let first = registry.table(&id).unwrap();
        let second = registry.table(&id).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.is_cached(&id));

        let stats = registry.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entry_count, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_other_definition_does_not_disturb_cached_table() {
        let registry = registry();
        let before = registry.table(&MyEnum::id()).unwrap();
        let _ = registry.table(&DocOnlyEnum::id()).unwrap();
        let after = registry.table(&MyEnum::id()).unwrap();
        assert_eq!(*before, *after);
        assert_eq!(registry.stats().entry_count, 2);
    }

    #[test]
    fn test_failed_resolution_is_not_cached() {
        let registry = registry();
        let id = DefinitionId::new("Missing");
        assert!(registry.table(&id).is_err());
        assert!(!registry.is_cached(&id));
        assert_eq!(registry.stats().entry_count, 0);
    }

    #[test]
    fn test_register_type_is_idempotent() {
        let registry = Registry::default();
        assert_eq!(registry.register_type::<MyEnum>().unwrap(), MyEnum::id());
        assert_eq!(registry.register_type::<MyEnum>().unwrap(), MyEnum::id());
        assert!(registry.is_registered(&MyEnum::id()));
    }

    #[test]
    fn test_register_type_keeps_first_description() {
        let registry = Registry::default();
        registry
            .register(Definition::new(MyEnum::NAME).with_member("only"))
            .unwrap();
        assert_eq!(registry.register_type::<MyEnum>().unwrap(), MyEnum::id());
        assert_eq!(
            registry.keys(&MyEnum::id()).unwrap(),
            vec!["only".to_string()]
        );
    }

    #[test]
    fn test_concurrent_cold_misses_share_one_table() {
        let registry = registry();
        let id = MyEnum::id();
        let tables: Vec<Arc<VariantTable>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.table(&id).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert!(tables.iter().all(|table| Arc::ptr_eq(table, &tables[0])));
        let stats = registry.stats();
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.hits + stats.misses, 8);
        assert!(Arc::ptr_eq(&registry.table(&id).unwrap(), &tables[0]));
    }

    #[test]
    fn test_register_rejects_redefinition() {
        let registry = registry();
        let _ = registry.table(&MyEnum::id()).unwrap();
        let err = registry
            .register(Definition::new(MyEnum::NAME).with_member("late"))
            .unwrap_err();
        assert!(matches!(err, EnumError::DuplicateDefinition { .. }));
        assert!(!registry.table(&MyEnum::id()).unwrap().contains_key("late"));
    }

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
