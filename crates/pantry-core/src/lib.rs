//! Pantry Core
//!
//! Central coordination layer for the Pantry item service.
//! The core owns all session state; the HTTP layer only translates requests.

mod config;
mod error;
mod pantry;

pub use config::Config;
pub use error::CoreError;
pub use pantry::Pantry;

// Re-export core components
pub use pantry_items::{Collection, Item, ItemError};
pub use pantry_session::{Resolution, Session, SessionStore};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
