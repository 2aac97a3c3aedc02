//! Declarative registrations loaded from JSON
//!
//! A seed file carries an optional registry config, an optional table of host
//! objects (used to build a [`StaticResolver`]) and the items to register:
//!
//! ```json
//! {
//!   "config": { "hook_priority": 20 },
//!   "objects": [
//!     { "type": "post", "id": 12, "title": "About", "url": "/about", "subtype": "page" }
//!   ],
//!   "items": [
//!     { "menu": "main", "title": "Docs", "url": "https://example.com/docs", "order": 3 },
//!     { "menu": "main", "object_id": 12, "object_type": "post" }
//!   ]
//! }
//! ```

use crate::config::RegistryConfig;
use crate::core::{ObjectType, Result};
use crate::descriptor::ItemOptions;
use crate::host::{ObjectResolver, ResolvedObject, StaticResolver};
use crate::registry::Registry;
use log::warn;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrySeed {
    #[serde(default)]
    pub config: Option<RegistryConfig>,
    #[serde(default)]
    pub objects: Vec<SeedObject>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// A host object for the in-memory resolver
#[derive(Debug, Clone, Deserialize)]
pub struct SeedObject {
    #[serde(rename = "type", default)]
    pub object_type: ObjectType,
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub parent: i64,
    pub subtype: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedItem {
    Object {
        menu: String,
        object_id: i64,
        #[serde(default = "default_object_type")]
        object_type: String,
        #[serde(flatten)]
        placement: SeedPlacement,
    },
    /// Title and URL are not validated; missing ones render empty
    Literal {
        menu: String,
        #[serde(default)]
        title: String,
        #[serde(default)]
        url: String,
        #[serde(flatten)]
        placement: SeedPlacement,
    },
}

fn default_object_type() -> String {
    ObjectType::Post.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedPlacement {
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub parent: i64,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl From<SeedPlacement> for ItemOptions {
    fn from(p: SeedPlacement) -> Self {
        ItemOptions {
            order: p.order,
            parent_id: p.parent,
            explicit_id: p.id,
            css_classes: p.classes,
        }
    }
}

impl RegistrySeed {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Resolver over the seed's `objects` table
    pub fn resolver(&self) -> StaticResolver {
        let mut resolver = StaticResolver::new();
        for obj in &self.objects {
            resolver.insert(
                obj.object_type,
                obj.id,
                ResolvedObject::new(obj.title.clone(), obj.url.clone(), obj.subtype.clone())
                    .with_parent(obj.parent),
            );
        }
        resolver
    }

    /// Fresh registry built from the seed's config
    pub fn build_registry(&self) -> Registry {
        Registry::with_config(self.config.clone().unwrap_or_default())
    }

    /// Register every item; returns how many descriptors were stored.
    ///
    /// Unknown object types are skipped like unresolved references, and their
    /// slug is still marked for interception.
    pub fn apply(&self, registry: &mut Registry, resolver: &dyn ObjectResolver) -> usize {
        let before = registry.len();

        for item in &self.items {
            match item {
                SeedItem::Literal {
                    menu,
                    title,
                    url,
                    placement,
                } => {
                    registry.add_literal_item(menu, title.clone(), url.clone(), placement.clone().into());
                }
                SeedItem::Object {
                    menu,
                    object_id,
                    object_type,
                    placement,
                } => match ObjectType::parse(object_type) {
                    Ok(object_type) => registry.add_referenced_item(
                        resolver,
                        menu,
                        *object_id,
                        object_type,
                        placement.clone().into(),
                    ),
                    Err(e) => {
                        registry.mark_menu(menu);
                        warn!("Skipping seed item for menu '{}': {}", menu, e);
                    }
                },
            }
        }

        registry.len() - before
    }
}
