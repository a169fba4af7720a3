//! Error types for ENUMERANT operations

use crate::DefinitionId;
use thiserror::Error;

/// Errors raised while resolving definitions or constructing enum values.
///
/// Every variant is a local validation failure. None of them is transient,
/// and no operation leaves a partially constructed value behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumError {
    #[error("Value {value} not available in enum {definition}")]
    UnknownVariant {
        definition: DefinitionId,
        value: String,
    },

    #[error("Value of enum {definition} can't be missing")]
    MissingValue { definition: DefinitionId },

    #[error("Calling {definition}::{method}() in static context requires one argument, {given} given")]
    ArityError {
        definition: DefinitionId,
        method: String,
        given: usize,
    },

    #[error("Call to undefined method {definition}->{method}()")]
    NoSuchMethod {
        definition: DefinitionId,
        method: String,
    },

    #[error("Enum definition not registered: {definition}")]
    UnknownDefinition { definition: DefinitionId },

    #[error("Enum definition already registered: {definition}")]
    DuplicateDefinition { definition: DefinitionId },

    #[error("Variants {first} and {second} of enum {definition} differ only by case")]
    AmbiguousVariant {
        definition: DefinitionId,
        first: String,
        second: String,
    },

    #[error("Documented variant {name} of enum {definition} shadows a declared member")]
    ShadowedVariant {
        definition: DefinitionId,
        name: String,
    },

    #[error("Inheritance cycle detected at enum {definition}")]
    CyclicInheritance { definition: DefinitionId },

    #[error("Failed to decode value of enum {definition}: {reason}")]
    Decode {
        definition: DefinitionId,
        reason: String,
    },
}

/// Result type alias for ENUMERANT operations.
pub type EnumResult<T> = Result<T, EnumError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_display() {
        let err = EnumError::UnknownVariant {
            definition: DefinitionId::new("MyEnum"),
            value: "wrong".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("wrong"));
        assert!(msg.contains("MyEnum"));
    }

    #[test]
    fn test_arity_error_display() {
        let err = EnumError::ArityError {
            definition: DefinitionId::new("MyEnum"),
            method: "isFoo".to_string(),
            given: 0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("MyEnum::isFoo()"));
        assert!(msg.contains("requires one argument"));
    }

    #[test]
    fn test_no_such_method_display() {
        let err = EnumError::NoSuchMethod {
            definition: DefinitionId::new("MyEnum"),
            method: "explode".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Call to undefined method MyEnum->explode()"
        );
    }

    #[test]
    fn test_ambiguous_variant_display() {
        let err = EnumError::AmbiguousVariant {
            definition: DefinitionId::new("Casey"),
            first: "foo".to_string(),
            second: "FOO".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("differ only by case"));
        assert!(msg.contains("foo"));
        assert!(msg.contains("FOO"));
    }
}
