//! Fuzz test for documentation-driven variant resolution
//!
//! Feeds arbitrary text to the doc scanner and the resolver to find:
//! - Panics or crashes
//! - Tables that disagree with the scanned declarations
//!
//! Run with: cargo +nightly fuzz run doc_scan_fuzz -- -max_total_time=60

#![no_main]

use enumerant_core::{fold_name, Definition, DefinitionId, EnumError, RegistryConfig};
use enumerant_registry::{documented_variants, Catalog, Resolver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = std::str::from_utf8(data) {
        let names = documented_variants(doc);

        let mut catalog = Catalog::new();
        if catalog.insert(Definition::new("Fuzzed").with_doc(doc)).is_err() {
            return;
        }

        let resolver = Resolver::new(RegistryConfig::default());
        match resolver.resolve(&catalog, &DefinitionId::new("Fuzzed")) {
            Ok(table) => {
                // Every key comes from a scanned declaration and maps to its spelling.
                for (key, variant) in table.iter() {
                    assert!(names.iter().any(|n| fold_name(n) == key));
                    assert_eq!(variant.value, variant.declared);
                }
                assert!(table.len() <= names.len());
            }
            Err(EnumError::AmbiguousVariant { .. }) => {}
            Err(other) => panic!("unexpected resolution error: {other}"),
        }
    }
});
