use serde::{Deserialize, Serialize};

/// Capability shared by host-native menu items and materialized virtual items
///
/// The reorder pass only needs to read and overwrite the order value.
pub trait NavMenuItem {
    fn menu_order(&self) -> i64;

    fn set_menu_order(&mut self, order: i64);
}

/// A virtual item shaped like the host's native menu item object
///
/// Serialized field names follow the host's item object so the result can be
/// handed to the renderer unchanged. `target`, `attr_title`, `description`,
/// `xfn` and `status` are placeholders and stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterializedItem {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(rename = "menu_order")]
    pub order: i64,
    #[serde(rename = "menu_item_parent")]
    pub parent_id: i64,
    /// Empty string means "no parent"
    #[serde(rename = "post_parent")]
    pub post_parent_id: String,

    #[serde(rename = "db_id")]
    pub database_id: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "object")]
    pub object_kind: String,
    pub object_id: String,

    #[serde(rename = "classes")]
    pub css_classes: Vec<String>,
    pub target: String,
    pub attr_title: String,
    pub description: String,
    #[serde(rename = "xfn")]
    pub taxonomy_flags: String,
    pub status: String,
}

impl MaterializedItem {
    /// Host-style item with only identity, title, URL and order set
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>, order: i64) -> Self {
        Self {
            id,
            database_id: id,
            title: title.into(),
            url: url.into(),
            order,
            ..Default::default()
        }
    }

    pub fn is_literal(&self) -> bool {
        self.item_type.is_empty()
    }
}

impl NavMenuItem for MaterializedItem {
    fn menu_order(&self) -> i64 {
        self.order
    }

    fn set_menu_order(&mut self, order: i64) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let item = MaterializedItem::new(42, "Home", "/", 3);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["ID"], 42);
        assert_eq!(json["db_id"], 42);
        assert_eq!(json["menu_order"], 3);
        assert_eq!(json["menu_item_parent"], 0);
        assert_eq!(json["post_parent"], "");
        assert_eq!(json["type"], "");
        assert_eq!(json["xfn"], "");
        assert!(json["classes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_set_menu_order() {
        let mut item = MaterializedItem::new(1, "A", "/a", 10);
        item.set_menu_order(0);
        assert_eq!(item.menu_order(), 0);
        assert!(item.is_literal());
    }
}
