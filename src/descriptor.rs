// ============================================================================
// src/descriptor.rs - Pending virtual items and their materialization
// ============================================================================

use crate::core::{ItemKind, ObjectType};
use crate::host::ResolvedObject;
use crate::item::MaterializedItem;
use serde::{Deserialize, Serialize};

/// Optional placement arguments shared by both registration paths
///
/// Defaults: `order = 0`, `parent = 0`, no explicit ID, no CSS classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemOptions {
    pub order: i64,
    pub parent_id: i64,
    pub explicit_id: Option<i64>,
    pub css_classes: Vec<String>,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.explicit_id = Some(id);
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css_classes = classes.into_iter().map(Into::into).collect();
        self
    }
}

/// A pending, not yet materialized menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualItemDescriptor {
    pub menu_slug: String,
    pub title: String,
    pub url: String,
    pub order: i64,
    /// Identity of another item in the same menu
    pub parent_id: i64,
    pub explicit_id: Option<i64>,
    pub post_parent_id: Option<i64>,
    pub item_kind: ItemKind,
    /// Post type or taxonomy name of the referenced object
    pub object_subtype: Option<String>,
    pub source_object_id: Option<i64>,
    pub css_classes: Vec<String>,
}

impl VirtualItemDescriptor {
    pub fn literal(
        menu_slug: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        options: ItemOptions,
    ) -> Self {
        Self {
            menu_slug: menu_slug.into(),
            title: title.into(),
            url: url.into(),
            order: options.order,
            parent_id: options.parent_id,
            explicit_id: options.explicit_id,
            post_parent_id: None,
            item_kind: ItemKind::Literal,
            object_subtype: None,
            source_object_id: None,
            css_classes: options.css_classes,
        }
    }

    /// Descriptor for an object the host has already resolved
    pub fn referenced(
        menu_slug: impl Into<String>,
        object_id: i64,
        object_type: ObjectType,
        object: ResolvedObject,
        options: ItemOptions,
    ) -> Self {
        Self {
            menu_slug: menu_slug.into(),
            title: object.title,
            url: object.url,
            order: options.order,
            parent_id: options.parent_id,
            explicit_id: options.explicit_id,
            post_parent_id: Some(object.parent_id),
            item_kind: ItemKind::from(object_type),
            object_subtype: Some(object.subtype),
            source_object_id: Some(object_id),
            css_classes: options.css_classes,
        }
    }

    pub fn source_object_type(&self) -> Option<ObjectType> {
        self.item_kind.source_object_type()
    }

    /// Identity used when no explicit ID was supplied
    ///
    /// Not collision free: descriptors sharing `order + parent` get the same ID.
    /// Wraps on overflow.
    pub fn derived_id(&self, id_base: i64) -> i64 {
        id_base.wrapping_add(self.order).wrapping_add(self.parent_id)
    }

    pub fn resolve_id(&self, id_base: i64) -> i64 {
        match self.explicit_id {
            Some(id) if id != 0 => id,
            _ => self.derived_id(id_base),
        }
    }

    pub fn materialize(&self, id_base: i64) -> MaterializedItem {
        let id = self.resolve_id(id_base);

        let (item_type, object_kind, object_id) = match self.source_object_type() {
            Some(object_type) => (
                object_type.item_type().to_string(),
                self.object_subtype.clone().unwrap_or_default(),
                non_zero_string(self.source_object_id),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        MaterializedItem {
            id,
            title: self.title.clone(),
            url: self.url.clone(),
            order: self.order,
            parent_id: self.parent_id,
            post_parent_id: non_zero_string(self.post_parent_id),
            database_id: id,
            item_type,
            object_kind,
            object_id,
            css_classes: self.css_classes.clone(),
            target: String::new(),
            attr_title: String::new(),
            description: String::new(),
            taxonomy_flags: String::new(),
            status: String::new(),
        }
    }
}

// Host convention: empty string, not zero, signals "none".
fn non_zero_string(value: Option<i64>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: i64 = 1_000_000;

    #[test]
    fn test_derived_id() {
        let desc = VirtualItemDescriptor::literal(
            "main",
            "Docs",
            "https://example.com/docs",
            ItemOptions::new().order(3).parent(5),
        );

        let item = desc.materialize(BASE);
        assert_eq!(item.id, 1_000_008);
        assert_eq!(item.database_id, 1_000_008);
    }

    #[test]
    fn test_derived_id_extreme_order() {
        let desc = VirtualItemDescriptor::literal("main", "Far", "/far", ItemOptions::new().order(i64::MAX));
        let item = desc.materialize(BASE);
        assert_eq!(item.id, i64::MAX.wrapping_add(BASE));
        assert_eq!(item.order, i64::MAX);

        let desc = VirtualItemDescriptor::literal(
            "main",
            "Near",
            "/near",
            ItemOptions::new().order(i64::MIN).parent(-1),
        );
        assert_eq!(desc.derived_id(BASE), BASE.wrapping_add(i64::MIN).wrapping_sub(1));
    }

    #[test]
    fn test_explicit_id_wins_unless_zero() {
        let desc = VirtualItemDescriptor::literal("main", "A", "/a", ItemOptions::new().id(77));
        assert_eq!(desc.materialize(BASE).id, 77);

        let zero = VirtualItemDescriptor::literal("main", "A", "/a", ItemOptions::new().id(0).order(2));
        assert_eq!(zero.materialize(BASE).id, 1_000_002);
    }

    #[test]
    fn test_literal_materialization_leaves_object_fields_empty() {
        let desc = VirtualItemDescriptor::literal(
            "main",
            "Custom Link",
            "https://example.com",
            ItemOptions::new().classes(["highlight", "external"]),
        );

        let item = desc.materialize(BASE);
        assert_eq!(item.title, "Custom Link");
        assert_eq!(item.url, "https://example.com");
        assert_eq!(item.item_type, "");
        assert_eq!(item.object_kind, "");
        assert_eq!(item.object_id, "");
        assert_eq!(item.post_parent_id, "");
        assert_eq!(item.css_classes, vec!["highlight", "external"]);
        assert!(item.target.is_empty());
        assert!(item.attr_title.is_empty());
        assert!(item.description.is_empty());
        assert!(item.taxonomy_flags.is_empty());
        assert!(item.status.is_empty());
    }

    #[test]
    fn test_post_reference_materialization() {
        let object = ResolvedObject::new("About", "https://example.com/about", "page").with_parent(12);
        let desc = VirtualItemDescriptor::referenced("main", 40, ObjectType::Post, object, ItemOptions::new());

        let item = desc.materialize(BASE);
        assert_eq!(item.item_type, "post_type");
        assert_eq!(item.object_kind, "page");
        assert_eq!(item.object_id, "40");
        assert_eq!(item.post_parent_id, "12");
        assert_eq!(item.id, BASE);
    }

    #[test]
    fn test_term_reference_without_parent() {
        let object = ResolvedObject::new("News", "https://example.com/category/news", "category");
        let desc = VirtualItemDescriptor::referenced("footer", 9, ObjectType::Term, object, ItemOptions::new());

        assert_eq!(desc.item_kind, ItemKind::TermReference);

        let item = desc.materialize(BASE);
        assert_eq!(item.item_type, "taxonomy");
        assert_eq!(item.object_kind, "category");
        assert_eq!(item.post_parent_id, "");
    }
}
