//! Session data structure

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use pantry_items::Collection;

#[derive(Debug)]
pub struct Session {
    /// Opaque token presented by the client
    pub id: String,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops being honoured
    pub expires_at: DateTime<Utc>,
    /// Items owned by this session, serialized per session
    items: Mutex<Collection>,
}

impl Session {
    pub fn new(ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + ttl,
            items: Mutex::new(Collection::new()),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).max(Duration::zero())
    }

    /// Run `f` with exclusive access to this session's collection
    pub fn with_items<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Collection) -> T,
    {
        let mut items = self.items.lock();
        f(&mut items)
    }

    /// Whole seconds left before expiry, rounded up so a live session
    /// never reports zero
    pub fn remaining_secs(&self) -> i64 {
        let millis = self.remaining().num_milliseconds();
        (millis + 999) / 1000
    }
}
