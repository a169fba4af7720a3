//! ENUMERANT Registry - Variant Resolution and Enum Values
//!
//! Resolves enum definitions into variant tables, caches the tables for the
//! lifetime of the registry, and builds validated enum values on top of them.
//!
//! ```
//! use enumerant_core::{Definition, DefinitionId, RegistryConfig};
//! use enumerant_registry::Registry;
//!
//! let registry = Registry::new(RegistryConfig::default());
//! registry
//!     .register(
//!         Definition::new("Status")
//!             .with_members(["draft", "published"])
//!             .with_remap("draft", "0"),
//!     )
//!     .unwrap();
//!
//! let id = DefinitionId::new("Status");
//! let draft = registry.from(&id, "DRAFT").unwrap();
//! assert_eq!(draft.value(), "0");
//! assert!(draft.equals(&registry, "draft").unwrap());
//! assert_eq!(registry.keys(&id).unwrap(), vec!["draft", "published"]);
//! ```

pub mod catalog;
pub mod dispatch;
pub mod instance;
pub mod registry;
pub mod resolver;

pub use catalog::{Catalog, Introspect};
pub use dispatch::{Dispatched, Method};
pub use instance::{EnumSeed, EnumValue, Operand};
pub use registry::{CacheStats, Registry};
pub use resolver::{documented_variants, Resolver};

use enumerant_core::RegistryConfig;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Registry> = Lazy::new(|| Registry::new(RegistryConfig::from_env()));

/// Process-wide registry, configured from the environment on first use.
///
/// Prefer an explicit [`Registry`] where one can be passed around; this
/// instance exists for callers that need a single shared table per process.
pub fn global() -> &'static Registry {
    &GLOBAL
}
