//! Item collection
//!
//! CRUD over one session's items. Every operation is a single mutation of
//! the backing vector; callers serialize access to a collection.

use uuid::Uuid;

use crate::error::ItemError;
use crate::item::{require_name, Item};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Items in insertion order
    items: Vec<Item>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the items in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item
    pub fn create(&mut self, name: Option<String>) -> Result<Item> {
        let mut item = Item::new(name)?;

        // Ids must stay unique within the collection
        while self.get(&item.id).is_some() {
            item.id = Uuid::new_v4().to_string();
        }

        self.items.push(item.clone());

        tracing::debug!(item_id = %item.id, count = self.items.len(), "Created item");

        Ok(item)
    }

    /// Rename an item in place, keeping its id and position
    pub fn update(&mut self, id: &str, name: Option<String>) -> Result<Item> {
        let name = require_name(name)?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ItemError::NotFound(id.to_string()))?;

        item.rename(name);

        Ok(item.clone())
    }

    /// Remove the item with this id
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ItemError::NotFound(id.to_string()))?;

        self.items.remove(index);

        tracing::debug!(item_id = %id, count = self.items.len(), "Deleted item");

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
