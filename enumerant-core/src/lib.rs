//! ENUMERANT Core - Definition Types
//!
//! Pure data structures shared by the registry and its callers: the
//! introspection record of an enum definition, the resolved variant table,
//! the error type and the registry configuration.
//! This crate contains no resolution or caching logic.

pub mod config;
pub mod definition;
pub mod error;
pub mod table;

pub use config::{RegistryConfig, ShadowPolicy};
pub use definition::{Definition, DefinitionId, EnumDefinition};
pub use error::{EnumError, EnumResult};
pub use table::{fold_name, Variant, VariantSource, VariantTable};
