//! Pantry Items
//!
//! An item is a named record owned by exactly one session.
//! A collection keeps a session's items in insertion order and is the only
//! place items are created, renamed or removed.

mod collection;
mod error;
mod item;

pub use collection::Collection;
pub use error::ItemError;
pub use item::Item;

pub type Result<T> = std::result::Result<T, ItemError>;
