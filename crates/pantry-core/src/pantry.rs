//! Main application state container
//!
//! `Pantry` is the composition root: it owns the session store for the
//! lifetime of the process and applies item operations to one resolved
//! session at a time.

use pantry_items::Item;
use pantry_session::{Resolution, Session, SessionStore};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

const MIN_SESSION_TTL_SECS: i64 = 1;

pub struct Pantry {
    /// Configuration
    config: Config,
    /// Session store (owns every collection)
    sessions: SessionStore,
}

impl Pantry {
    pub fn new(config: Config) -> Result<Self> {
        let ttl = chrono::Duration::from_std(config.session_ttl)
            .map_err(|e| CoreError::Config(format!("Invalid session ttl: {}", e)))?;
        // Cookie Max-Age is expressed in whole seconds
        if ttl < chrono::Duration::seconds(MIN_SESSION_TTL_SECS) {
            return Err(CoreError::Config(format!(
                "Session ttl must be at least {}s",
                MIN_SESSION_TTL_SECS
            )));
        }

        Ok(Self {
            config,
            sessions: SessionStore::new(ttl),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Resolve a client token, issuing a new session when it is not valid
    pub fn resolve_session(&self, token: Option<&str>) -> Resolution {
        self.sessions.resolve(token)
    }

    pub fn list_items(&self, session: &Session) -> Vec<Item> {
        session.with_items(|items| items.list())
    }

    pub fn create_item(&self, session: &Session, name: Option<String>) -> Result<Item> {
        let item = session.with_items(|items| items.create(name))?;

        tracing::info!(
            session_id = %session.id,
            item_id = %item.id,
            "Created item"
        );

        Ok(item)
    }

    pub fn update_item(&self, session: &Session, id: &str, name: Option<String>) -> Result<Item> {
        let item = session
            .with_items(|items| items.update(id, name))
            .inspect_err(|e| {
                tracing::debug!(session_id = %session.id, item_id = %id, error = %e, "Item update rejected");
            })?;

        tracing::info!(session_id = %session.id, item_id = %item.id, "Updated item");

        Ok(item)
    }

    pub fn delete_item(&self, session: &Session, id: &str) -> Result<()> {
        session
            .with_items(|items| items.delete(id))
            .inspect_err(|e| {
                tracing::debug!(session_id = %session.id, item_id = %id, error = %e, "Item delete rejected");
            })?;

        tracing::info!(session_id = %session.id, item_id = %id, "Deleted item");

        Ok(())
    }

    /// Drop expired sessions from memory
    pub fn evict_expired(&self) -> usize {
        self.sessions.evict_expired()
    }

    /// Tear down the store; all sessions are discarded
    pub fn shutdown(&self) -> usize {
        let dropped = self.sessions.clear();
        tracing::info!(dropped_sessions = dropped, "Session store cleared");
        dropped
    }
}

impl Clone for Pantry {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_items::ItemError;
    use std::time::Duration;

    fn pantry() -> Pantry {
        Pantry::new(Config::default()).unwrap()
    }

    fn with_ttl(ttl: Duration) -> Config {
        Config {
            session_ttl: ttl,
            ..Config::default()
        }
    }

    #[test]
    fn test_rejects_sub_second_ttl() {
        for ttl in [
            Duration::ZERO,
            Duration::from_millis(500),
            Duration::from_millis(999),
        ] {
            assert!(matches!(
                Pantry::new(with_ttl(ttl)),
                Err(CoreError::Config(_))
            ));
        }

        let pantry = Pantry::new(with_ttl(Duration::from_secs(1))).unwrap();
        let session = pantry.resolve_session(None).session;
        assert_eq!(session.remaining_secs(), 1);
    }

    #[test]
    fn test_item_lifecycle() {
        let pantry = pantry();
        let session = pantry.resolve_session(None).session;

        let milk = pantry
            .create_item(&session, Some("milk".to_string()))
            .unwrap();
        assert_eq!(pantry.list_items(&session), vec![milk.clone()]);

        let bread = pantry
            .update_item(&session, &milk.id, Some("bread".to_string()))
            .unwrap();
        assert_eq!(bread.id, milk.id);
        assert_eq!(bread.name, "bread");

        pantry.delete_item(&session, &milk.id).unwrap();
        assert!(pantry.list_items(&session).is_empty());

        assert!(matches!(
            pantry.delete_item(&session, &milk.id),
            Err(CoreError::Item(ItemError::NotFound(_)))
        ));
    }

    #[test]
    fn test_validation_errors() {
        let pantry = pantry();
        let session = pantry.resolve_session(None).session;

        assert!(matches!(
            pantry.create_item(&session, None),
            Err(CoreError::Item(ItemError::NameRequired))
        ));
        assert!(matches!(
            pantry.update_item(&session, "doesnotexist", Some("x".to_string())),
            Err(CoreError::Item(ItemError::NotFound(_)))
        ));
        assert!(pantry.list_items(&session).is_empty());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let pantry = pantry();
        let a = pantry.resolve_session(None).session;
        let b = pantry.resolve_session(None).session;

        let milk = pantry.create_item(&a, Some("milk".to_string())).unwrap();

        assert!(pantry.list_items(&b).is_empty());
        assert!(matches!(
            pantry.delete_item(&b, &milk.id),
            Err(CoreError::Item(ItemError::NotFound(_)))
        ));
        assert_eq!(pantry.list_items(&a), vec![milk]);
    }

    #[test]
    fn test_shutdown_clears_store() {
        let pantry = pantry();
        let token = pantry.resolve_session(None).session.id.clone();
        pantry.resolve_session(None);

        assert_eq!(pantry.shutdown(), 2);
        assert!(pantry.sessions().is_empty());

        // The old token is no longer honoured
        assert!(pantry.resolve_session(Some(&token)).issued);
    }
}
