//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Item(#[from] pantry_items::ItemError),

    #[error("Configuration error: {0}")]
    Config(String),
}
