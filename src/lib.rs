// ============================================================================
// Virtual Menu Items Library
// ============================================================================

pub mod core;
pub mod config;
pub mod descriptor;
pub mod item;
pub mod host;
pub mod hooks;
pub mod merge;
pub mod registry;
pub mod seed;

// Re-export main types for convenience
pub use crate::core::{ItemKind, MenuError, ObjectType, Result};
pub use config::RegistryConfig;
pub use descriptor::{ItemOptions, VirtualItemDescriptor};
pub use item::{MaterializedItem, NavMenuItem};
pub use host::{MenuObject, ObjectResolver, ResolvedObject, StaticResolver};
pub use hooks::{ExtensionPoint, HookBinding, HookHost, MenuFilters};
pub use merge::{ItemMerger, fix_menu_orders};
pub use registry::{Registry, add_item, add_object, register_hooks};
pub use seed::RegistrySeed;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_item_scenario() {
        let mut registry = Registry::new();
        registry.add_literal_item("main", "Custom Link", "https://example.com", ItemOptions::new());

        let existing = vec![MaterializedItem::new(10, "Home", "https://example.com/", 0)];
        let merged = registry.intercept_item_list(existing, &MenuObject::new("main"));

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "Home");
        assert_eq!(merged[1].title, "Custom Link");
        assert_eq!(merged[0].order, 0);
        assert_eq!(merged[1].order, 1);
    }

    #[test]
    fn test_global_registry_add_item() {
        add_item("lib-test-global", "Shop", "/shop", ItemOptions::new().order(4)).unwrap();

        let registry = Registry::global().read().unwrap();
        assert!(registry.has_menu("lib-test-global"));
        assert_eq!(registry.count_for("lib-test-global"), 1);
    }

    #[test]
    fn test_global_registry_add_object() {
        let resolver = StaticResolver::new()
            .with_term(31, ResolvedObject::new("Guides", "/category/guides", "category"));

        add_object(&resolver, "lib-test-object", 31, ObjectType::Term, ItemOptions::new()).unwrap();
        add_object(&resolver, "lib-test-object", 32, ObjectType::Term, ItemOptions::new()).unwrap();
        add_object(&resolver, "lib-test-dropped", 404, ObjectType::Post, ItemOptions::new()).unwrap();

        let registry = Registry::global().read().unwrap();
        assert_eq!(registry.count_for("lib-test-object"), 1);
        let stored = registry.items_for("lib-test-object").next().unwrap();
        assert_eq!(stored.title, "Guides");
        assert_eq!(stored.source_object_id, Some(31));
        assert!(registry.has_menu("lib-test-dropped"));
        assert_eq!(registry.count_for("lib-test-dropped"), 0);
    }

    #[derive(Default)]
    struct CountingHost {
        bindings: Vec<HookBinding>,
    }

    impl HookHost for CountingHost {
        fn is_admin(&self) -> bool {
            false
        }

        fn add_filter(&mut self, binding: HookBinding) {
            self.bindings.push(binding);
        }
    }

    #[test]
    fn test_global_register_hooks_binds_once() {
        let mut host = CountingHost::default();
        assert!(register_hooks(&mut host).unwrap());
        assert!(!register_hooks(&mut host).unwrap());

        assert_eq!(host.bindings.len(), 2);
        assert!(Registry::global().read().unwrap().is_registered());
    }
}
