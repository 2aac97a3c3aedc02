use super::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of host object a referenced item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Post,
    /// Taxonomy term
    Term,
}

impl ObjectType {
    /// Value of the materialized item's `type` field
    pub fn item_type(&self) -> &'static str {
        match self {
            ObjectType::Post => "post_type",
            ObjectType::Term => "taxonomy",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for ObjectType {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(ObjectType::Post),
            "term" => Ok(ObjectType::Term),
            other => Err(MenuError::UnknownObjectType(other.to_string())),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Post => write!(f, "post"),
            ObjectType::Term => write!(f, "term"),
        }
    }
}

/// How a pending descriptor was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Literal,
    PostReference,
    TermReference,
}

impl ItemKind {
    pub fn is_reference(&self) -> bool {
        !matches!(self, ItemKind::Literal)
    }

    pub fn source_object_type(&self) -> Option<ObjectType> {
        match self {
            ItemKind::Literal => None,
            ItemKind::PostReference => Some(ObjectType::Post),
            ItemKind::TermReference => Some(ObjectType::Term),
        }
    }
}

impl From<ObjectType> for ItemKind {
    fn from(object_type: ObjectType) -> Self {
        match object_type {
            ObjectType::Post => ItemKind::PostReference,
            ObjectType::Term => ItemKind::TermReference,
        }
    }
}
