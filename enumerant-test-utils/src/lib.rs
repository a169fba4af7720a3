//! ENUMERANT Test Utilities
//!
//! Shared test infrastructure for the ENUMERANT workspace:
//! - Fixture definitions covering members, docs, inheritance and remaps
//! - Proptest generators for variant names and casings

pub use enumerant_core::{Definition, DefinitionId, EnumDefinition, RegistryConfig};

pub use fixtures::*;
pub use generators::*;

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    use super::*;

    /// Keys of [`MyEnum`] in declaration order.
    pub const MY_ENUM_KEYS: &[&str] = &["foo", "bar", "hello", "world"];

    /// Values of [`MyEnum`] in declaration order.
    pub const MY_ENUM_VALUES: &[&str] = &["foovalue", "bar", "Hello", "worldvalue"];

    /// Mixed definition: two members, two documented variants, two remaps.
    pub struct MyEnum;

    impl EnumDefinition for MyEnum {
        const NAME: &'static str = "MyEnum";

        fn describe() -> Definition {
            Definition::new(Self::NAME)
                .with_members(["foo", "bar"])
                .with_doc(
                    "/**\n\
                     * @method static self Hello()\n\
                     * @method static self world()\n\
                     */",
                )
                .with_remap("foo", "foovalue")
                .with_remap("world", "worldvalue")
        }
    }

    /// Child of [`MyEnum`]: adds `baz` and remaps `foo` again.
    pub struct DerivedEnum;

    impl EnumDefinition for DerivedEnum {
        const NAME: &'static str = "DerivedEnum";

        fn describe() -> Definition {
            Definition::new(Self::NAME)
                .extends(MyEnum::NAME)
                .with_member("baz")
                .with_remap("foo", "derivedfoo")
        }
    }

    /// Definition declared purely through documentation.
    pub struct DocOnlyEnum;

    impl EnumDefinition for DocOnlyEnum {
        const NAME: &'static str = "DocOnlyEnum";

        fn describe() -> Definition {
            Definition::new(Self::NAME).with_doc(
                "@method static self draft()\n\
                 @method static self review()\n\
                 @method static self published()",
            )
        }
    }

    /// Definition whose canonical values are numeric strings.
    pub struct NumericValuesEnum;

    impl EnumDefinition for NumericValuesEnum {
        const NAME: &'static str = "NumericValuesEnum";

        fn describe() -> Definition {
            Definition::new(Self::NAME)
                .with_members(["draft", "published"])
                .with_remap("draft", "1")
                .with_remap("published", "2")
        }
    }

    /// Every fixture definition, parents before children.
    pub fn catalog_definitions() -> Vec<Definition> {
        vec![
            MyEnum::describe(),
            DerivedEnum::describe(),
            DocOnlyEnum::describe(),
            NumericValuesEnum::describe(),
        ]
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    use proptest::prelude::*;

    /// Generate a random upper/lower casing of `name`.
    pub fn arb_casing(name: &str) -> impl Strategy<Value = String> {
        let chars: Vec<char> = name.chars().collect();
        prop::collection::vec(any::<bool>(), chars.len()).prop_map(move |upper| {
            chars
                .iter()
                .zip(upper)
                .flat_map(|(c, up)| {
                    if up {
                        c.to_uppercase().collect::<Vec<_>>()
                    } else {
                        c.to_lowercase().collect::<Vec<_>>()
                    }
                })
                .collect()
        })
    }

    /// Generate a lowercase identifier usable as a variant name.
    pub fn arb_variant_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,11}".prop_map(|s| s)
    }

    /// Generate a list of distinct variant names in arbitrary order.
    pub fn arb_variant_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set(arb_variant_name(), 1..=max.max(1))
            .prop_map(|names| names.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }
}
