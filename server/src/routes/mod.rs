//! HTTP route handlers
//!
//! Handlers translate requests into core operations on the caller's
//! session. All state lives in the core.

pub mod greeting;
pub mod items;
