//! Session Store
//!
//! Resolves client tokens to sessions, issuing a fresh session whenever the
//! presented token is absent, unknown or expired. Expired sessions are also
//! dropped by `evict_expired`, which the server runs periodically.

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::session::Session;

/// Outcome of resolving a client token
#[derive(Debug, Clone)]
pub struct Resolution {
    pub session: Arc<Session>,
    /// True when a new token was issued and must be sent to the client
    pub issued: bool,
}

pub struct SessionStore {
    /// Live sessions keyed by token
    sessions: Arc<RwLock<HashMap<String, Arc<Session>>>>,
    /// Lifetime of every issued session
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Resolve a client token to its session, issuing a new one if needed
    pub fn resolve(&self, token: Option<&str>) -> Resolution {
        let now = Utc::now();
        let existing = token.and_then(|t| self.sessions.read().get(t).cloned());

        match existing {
            Some(session) if !session.is_expired_at(now) => {
                return Resolution {
                    session,
                    issued: false,
                };
            }
            Some(expired) => {
                let mut sessions = self.sessions.write();
                if sessions
                    .get(&expired.id)
                    .is_some_and(|s| s.is_expired_at(now))
                {
                    sessions.remove(&expired.id);
                    tracing::info!(session_id = %expired.id, "Session expired");
                }
            }
            None => {}
        }

        let session = self.issue();
        Resolution {
            session,
            issued: true,
        }
    }

    fn issue(&self) -> Arc<Session> {
        let mut sessions = self.sessions.write();

        let mut session = Session::new(self.ttl);
        while sessions.contains_key(&session.id) {
            session = Session::new(self.ttl);
        }

        let session = Arc::new(session);
        sessions.insert(session.id.clone(), Arc::clone(&session));

        tracing::info!(
            session_id = %session.id,
            expires_at = %session.expires_at,
            live_sessions = sessions.len(),
            "Issued new session"
        );

        session
    }

    /// Drop every expired session, returning how many were removed
    pub fn evict_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write();

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        let evicted = before - sessions.len();

        if evicted > 0 {
            tracing::info!(evicted, live_sessions = sessions.len(), "Evicted expired sessions");
        }

        evicted
    }

    /// Drop all sessions, returning how many were removed
    pub fn clear(&self) -> usize {
        let mut sessions = self.sessions.write();
        let count = sessions.len();
        sessions.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            ttl: self.ttl,
        }
    }
}
