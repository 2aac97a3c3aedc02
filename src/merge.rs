// ============================================================================
// src/merge.rs - Merging virtual items into a host item collection
// ============================================================================
//
// Virtual items default to order 0, which collides with host items. After the
// merge every item is renumbered so the host renderer sees unique, dense
// order values 0..n-1.
//
// ============================================================================

use crate::descriptor::VirtualItemDescriptor;
use crate::item::{MaterializedItem, NavMenuItem};

/// Stable-sort by order, then overwrite each order with its position.
///
/// Ties keep their input position, so host items registered ahead of virtual
/// items with the same order stay ahead.
pub fn fix_menu_orders<T: NavMenuItem>(mut items: Vec<T>) -> Vec<T> {
    // slice::sort_by_key is stable
    items.sort_by_key(|item| item.menu_order());

    for (position, item) in items.iter_mut().enumerate() {
        item.set_menu_order(position as i64);
    }

    items
}

/// Pure merge of existing items and pending descriptors
#[derive(Debug, Clone, Copy)]
pub struct ItemMerger {
    id_base: i64,
}

impl ItemMerger {
    pub fn new(id_base: i64) -> Self {
        Self { id_base }
    }

    pub fn id_base(&self) -> i64 {
        self.id_base
    }

    pub fn materialize(&self, descriptor: &VirtualItemDescriptor) -> MaterializedItem {
        descriptor.materialize(self.id_base)
    }

    /// Append materialized descriptors to `existing` and renumber the result.
    pub fn merge<'a, T, I>(&self, mut existing: Vec<T>, descriptors: I) -> Vec<T>
    where
        T: NavMenuItem + From<MaterializedItem>,
        I: IntoIterator<Item = &'a VirtualItemDescriptor>,
    {
        existing.extend(descriptors.into_iter().map(|d| T::from(self.materialize(d))));
        fix_menu_orders(existing)
    }
}
