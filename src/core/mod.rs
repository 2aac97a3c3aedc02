pub mod error;
pub mod types;

pub use error::{MenuError, Result};
pub use types::{ItemKind, ObjectType};
