//! Host-side collaborators
//!
//! The host owns menu storage and object lookup. This module only describes the
//! narrow surface the registry consumes: the menu metadata object handed to the
//! count interception, and the object resolver used by referenced items.

use crate::core::ObjectType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Menu metadata as resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuObject {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    /// Number of items the host reports for this menu
    #[serde(default)]
    pub count: usize,
}

impl MenuObject {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: slug.clone(),
            slug,
            count: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// A post or taxonomy term as resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedObject {
    pub title: String,
    pub url: String,
    /// Post parent for posts, taxonomy parent for terms
    #[serde(default)]
    pub parent_id: i64,
    /// Post type for posts, taxonomy name for terms
    pub subtype: String,
}

impl ResolvedObject {
    pub fn new(title: impl Into<String>, url: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            parent_id: 0,
            subtype: subtype.into(),
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = parent_id;
        self
    }
}

/// Host object lookup used by referenced items
///
/// `None` means the object does not exist; the caller treats it as a silent drop.
pub trait ObjectResolver {
    fn resolve_object(&self, object_id: i64, object_type: ObjectType) -> Option<ResolvedObject>;
}

impl<F> ObjectResolver for F
where
    F: Fn(i64, ObjectType) -> Option<ResolvedObject>,
{
    fn resolve_object(&self, object_id: i64, object_type: ObjectType) -> Option<ResolvedObject> {
        self(object_id, object_type)
    }
}

/// Map-backed resolver
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    objects: HashMap<(ObjectType, i64), ResolvedObject>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object_type: ObjectType, object_id: i64, object: ResolvedObject) {
        self.objects.insert((object_type, object_id), object);
    }

    pub fn with_post(mut self, post_id: i64, object: ResolvedObject) -> Self {
        self.insert(ObjectType::Post, post_id, object);
        self
    }

    pub fn with_term(mut self, term_id: i64, object: ResolvedObject) -> Self {
        self.insert(ObjectType::Term, term_id, object);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectResolver for StaticResolver {
    fn resolve_object(&self, object_id: i64, object_type: ObjectType) -> Option<ResolvedObject> {
        self.objects.get(&(object_type, object_id)).cloned()
    }
}
