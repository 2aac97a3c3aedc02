use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Unknown object type '{0}' (expected 'post' or 'term')")]
    UnknownObjectType(String),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Lock error: {0}")]
    LockError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;

impl<T> From<std::sync::PoisonError<T>> for MenuError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        Self::SeedError(err.to_string())
    }
}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
