//! Extension-point bindings
//!
//! The host dispatches two filters while building a menu: one over the menu
//! metadata object and one over the item list. The registry implements
//! [`MenuFilters`] and asks a [`HookHost`] to bind both points.

use crate::host::MenuObject;
use crate::item::{MaterializedItem, NavMenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionPoint {
    /// Item list retrieval for a menu
    MenuItems,
    /// Menu metadata resolution
    MenuObject,
}

impl ExtensionPoint {
    pub const ALL: [ExtensionPoint; 2] = [ExtensionPoint::MenuItems, ExtensionPoint::MenuObject];

    /// Filter name the host dispatches under
    pub fn hook_name(&self) -> &'static str {
        match self {
            ExtensionPoint::MenuItems => "wp_get_nav_menu_items",
            ExtensionPoint::MenuObject => "wp_get_nav_menu_object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookBinding {
    pub point: ExtensionPoint,
    pub priority: i32,
    /// Both filters receive the filtered value plus the menu
    pub accepted_args: usize,
}

impl HookBinding {
    pub fn new(point: ExtensionPoint, priority: i32) -> Self {
        Self {
            point,
            priority,
            accepted_args: 2,
        }
    }
}

/// Host filter dispatcher
pub trait HookHost {
    /// Whether the current request runs in the administrative context
    fn is_admin(&self) -> bool;

    fn add_filter(&mut self, binding: HookBinding);
}

/// The two interception callbacks
pub trait MenuFilters {
    fn filter_menu_object(&self, menu: MenuObject) -> MenuObject;

    fn filter_menu_items<T>(&self, items: Vec<T>, menu: &MenuObject) -> Vec<T>
    where
        T: NavMenuItem + From<MaterializedItem>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_are_distinct() {
        let names: Vec<&str> = ExtensionPoint::ALL.iter().map(|p| p.hook_name()).collect();
        assert_eq!(names, vec!["wp_get_nav_menu_items", "wp_get_nav_menu_object"]);
        assert_eq!(ExtensionPoint::MenuItems.hook_name(), "wp_get_nav_menu_items");
        assert_eq!(ExtensionPoint::MenuObject.hook_name(), "wp_get_nav_menu_object");
    }

    #[test]
    fn test_binding_defaults() {
        let binding = HookBinding::new(ExtensionPoint::MenuObject, 20);
        assert_eq!(binding.accepted_args, 2);
        assert_eq!(binding.priority, 20);
    }
}
