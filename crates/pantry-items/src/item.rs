//! Item data structure

use serde::Serialize;
use uuid::Uuid;

use crate::error::ItemError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique identifier within the owning collection
    pub id: String,
    /// Display name, never empty
    pub name: String,
}

impl Item {
    pub fn new(name: Option<String>) -> Result<Self> {
        let name = require_name(name)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
        })
    }

    /// Rename the item, keeping its id
    pub fn rename(&mut self, name: String) {
        tracing::debug!(item_id = %self.id, from = %self.name, to = %name, "Item renamed");
        self.name = name;
    }
}

/// Presence check shared by create and update.
///
/// Only an absent or empty name is rejected; anything else is kept verbatim.
pub(crate) fn require_name(name: Option<String>) -> Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ItemError::NameRequired),
    }
}
