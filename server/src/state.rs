//! Application state management
use pantry_core::{Config, Pantry, Result};
use std::sync::Arc;

/// Thread-safe application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pantry: Arc<Pantry>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_pantry(Pantry::new(config)?))
    }

    pub fn from_pantry(pantry: Pantry) -> Self {
        Self {
            pantry: Arc::new(pantry),
        }
    }

    pub fn pantry(&self) -> &Arc<Pantry> {
        &self.pantry
    }
}
