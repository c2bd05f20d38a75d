use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

struct SessionEntry {
    account_id: i64,
    expires_at: DateTime<Utc>,
}

/// In-process session store: opaque token -> account id, with a TTL.
/// The lock is only held for map operations, never across an await.
pub struct SessionStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        SessionStore {
            ttl: Duration::minutes(ttl_minutes),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn create(&self, account_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let entry = SessionEntry {
            account_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.entries.lock().unwrap().insert(token.clone(), entry);
        token
    }

    pub fn resolve(&self, token: &str) -> Option<i64> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(token) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.account_id),
            Some(_) => {
                entries.remove(token);
                None
            }
            None => None,
        }
    }

    pub fn destroy(&self, token: &str) {
        self.entries.lock().unwrap().remove(token);
    }
}
