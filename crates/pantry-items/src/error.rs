//! Item error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The name was absent or empty
    #[error("Name is required")]
    NameRequired,

    /// No item with this id exists in the collection
    #[error("Item not found")]
    NotFound(String),
}
