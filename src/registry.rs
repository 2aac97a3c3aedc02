use crate::config::RegistryConfig;
use crate::core::{ObjectType, Result};
use crate::descriptor::{ItemOptions, VirtualItemDescriptor};
use crate::hooks::{ExtensionPoint, HookBinding, HookHost, MenuFilters};
use crate::host::{MenuObject, ObjectResolver};
use crate::item::{MaterializedItem, NavMenuItem};
use crate::merge::ItemMerger;
use lazy_static::lazy_static;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

// Global singleton instance of Registry
lazy_static! {
    static ref GLOBAL_REGISTRY: Arc<RwLock<Registry>> = Arc::new(RwLock::new(Registry::new()));
}

/// In-memory store of pending virtual menu items
///
/// Descriptors are append-only for the lifetime of the registry. Register
/// everything first, then intercept: mutation needs `&mut self`, so a shared
/// instance has to go through a write lock (see [`Registry::global`]).
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,
    merger: ItemMerger,
    /// Slugs that need interception
    menus: HashSet<String>,
    /// All descriptors across all menus, in insertion order
    pending: Vec<VirtualItemDescriptor>,
    has_registered: bool,
}

impl Registry {
    /// Get the global Registry instance
    ///
    /// Created lazily on first access and shared by every call site for the
    /// rest of the process.
    pub fn global() -> &'static Arc<RwLock<Registry>> {
        &GLOBAL_REGISTRY
    }

    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            merger: ItemMerger::new(config.id_base),
            config,
            menus: HashSet::new(),
            pending: Vec::new(),
            has_registered: false,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a literal title/URL item
    pub fn add_literal_item(
        &mut self,
        menu_slug: &str,
        title: impl Into<String>,
        url: impl Into<String>,
        options: ItemOptions,
    ) {
        self.mark_menu(menu_slug);

        let descriptor = VirtualItemDescriptor::literal(menu_slug, title, url, options);
        debug!(
            "Virtual item '{}' queued for menu '{}'",
            descriptor.title, menu_slug
        );
        self.pending.push(descriptor);
    }

    /// Register an item pointing at a host post or term
    ///
    /// Unresolvable objects are dropped without an error. The slug is marked
    /// for interception either way.
    pub fn add_referenced_item(
        &mut self,
        resolver: &dyn ObjectResolver,
        menu_slug: &str,
        object_id: i64,
        object_type: ObjectType,
        options: ItemOptions,
    ) {
        self.mark_menu(menu_slug);

        let Some(object) = resolver.resolve_object(object_id, object_type) else {
            if self.config.log_dropped_references {
                warn!(
                    "Dropping virtual item for menu '{}': {} {} not found",
                    menu_slug, object_type, object_id
                );
            }
            return;
        };

        let descriptor =
            VirtualItemDescriptor::referenced(menu_slug, object_id, object_type, object, options);
        debug!(
            "Virtual {} item '{}' ({}) queued for menu '{}'",
            object_type, descriptor.title, object_id, menu_slug
        );
        self.pending.push(descriptor);
    }

    /// Mark a slug for interception without queuing a descriptor
    pub(crate) fn mark_menu(&mut self, menu_slug: &str) {
        self.menus.insert(menu_slug.to_string());
    }

    /// Whether `menu_slug` has been marked for interception
    pub fn has_menu(&self, menu_slug: &str) -> bool {
        self.menus.contains(menu_slug)
    }

    pub fn menus(&self) -> impl Iterator<Item = &str> {
        self.menus.iter().map(String::as_str)
    }

    pub fn pending_items(&self) -> &[VirtualItemDescriptor] {
        &self.pending
    }

    /// Pending descriptors for one menu, in insertion order
    pub fn items_for<'a>(
        &'a self,
        menu_slug: &'a str,
    ) -> impl Iterator<Item = &'a VirtualItemDescriptor> + 'a {
        self.pending.iter().filter(move |d| d.menu_slug == menu_slug)
    }

    pub fn count_for(&self, menu_slug: &str) -> usize {
        if !self.has_menu(menu_slug) {
            return 0;
        }
        self.items_for(menu_slug).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Adjust a menu's reported item count to include its virtual items
    pub fn intercept_item_count(&self, menu: MenuObject) -> MenuObject {
        if !self.has_menu(&menu.slug) {
            return menu;
        }

        let added = self.count_for(&menu.slug);
        MenuObject {
            count: menu.count + added,
            ..menu
        }
    }

    /// Merge a menu's virtual items into the host's item list
    ///
    /// Unknown slugs pass through untouched; otherwise the combined list is
    /// renumbered even when the menu ended up with no descriptors.
    pub fn intercept_item_list<T>(&self, items: Vec<T>, menu: &MenuObject) -> Vec<T>
    where
        T: NavMenuItem + From<MaterializedItem>,
    {
        if !self.has_menu(&menu.slug) {
            return items;
        }

        let existing = items.len();
        let merged = self.merger.merge(items, self.items_for(&menu.slug));
        debug!(
            "Menu '{}': merged {} virtual items into {} host items",
            menu.slug,
            merged.len() - existing,
            existing
        );
        merged
    }

    /// Bind both extension points on the host, once
    ///
    /// Skipped in the administrative context unless the configuration allows it.
    pub fn register_hooks(&mut self, host: &mut dyn HookHost) -> bool {
        if self.has_registered {
            return false;
        }
        if host.is_admin() && !self.config.register_in_admin {
            return false;
        }

        self.has_registered = true;
        for point in ExtensionPoint::ALL {
            host.add_filter(HookBinding::new(point, self.config.hook_priority));
        }
        true
    }

    pub fn is_registered(&self) -> bool {
        self.has_registered
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuFilters for Registry {
    fn filter_menu_object(&self, menu: MenuObject) -> MenuObject {
        self.intercept_item_count(menu)
    }

    fn filter_menu_items<T>(&self, items: Vec<T>, menu: &MenuObject) -> Vec<T>
    where
        T: NavMenuItem + From<MaterializedItem>,
    {
        self.intercept_item_list(items, menu)
    }
}

/// Register a literal item on the global registry
///
/// Does not bind the extension points; call [`register_hooks`] once the host
/// dispatcher is available.
pub fn add_item(
    menu_slug: &str,
    title: impl Into<String>,
    url: impl Into<String>,
    options: ItemOptions,
) -> Result<()> {
    let mut registry = Registry::global().write()?;
    registry.add_literal_item(menu_slug, title, url, options);
    Ok(())
}

/// Register a post or term item on the global registry
///
/// Does not bind the extension points; see [`register_hooks`].
pub fn add_object(
    resolver: &dyn ObjectResolver,
    menu_slug: &str,
    object_id: i64,
    object_type: ObjectType,
    options: ItemOptions,
) -> Result<()> {
    let mut registry = Registry::global().write()?;
    registry.add_referenced_item(resolver, menu_slug, object_id, object_type, options);
    Ok(())
}

/// Bind the global registry's extension points on `host`
///
/// Safe to call from every registration site: binding happens at most once.
pub fn register_hooks(host: &mut dyn HookHost) -> Result<bool> {
    let mut registry = Registry::global().write()?;
    Ok(registry.register_hooks(host))
}
