//! Pantry Session Management
//!
//! - A Session is an opaque, unguessable token owning one item collection
//! - Sessions are issued lazily to clients that present no valid token
//! - Sessions live for a fixed time from issuance (not sliding)
//! - Sessions are memory-only and vanish on restart

mod session;
mod store;

pub use session::Session;
pub use store::{Resolution, SessionStore};

/// Default session lifetime, matching the cookie max age
pub const DEFAULT_SESSION_TTL_SECS: i64 = 3600;
