use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Minimal string key/value store (browser `localStorage`/`sessionStorage`
/// equivalents, or anything else the host provides).
///
/// Writes are full replaces; there is no read-modify-write.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store for tests/dev and non-browser hosts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(key);
        }
    }
}

/// The two tenant slots: durable (survives restarts) and session-scoped.
///
/// Both slots use the same key name.
#[derive(Clone)]
pub struct TenantStorage {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    key: String,
}

impl TenantStorage {
    pub const DEFAULT_KEY: &'static str = "tenantId";

    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(durable, session, Self::DEFAULT_KEY)
    }

    pub fn with_key(
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            durable,
            session,
            key: key.into(),
        }
    }

    /// Fresh in-memory slots.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(InMemoryStore::new()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn durable(&self) -> Option<String> {
        self.durable.get(&self.key)
    }

    pub fn session(&self) -> Option<String> {
        self.session.get(&self.key)
    }

    pub(crate) fn write(&self, value: &str, durable: bool) {
        self.session.set(&self.key, value);
        if durable {
            self.durable.set(&self.key, value);
        } else {
            self.durable.remove(&self.key);
        }
    }

    pub(crate) fn remove(&self) {
        self.session.remove(&self.key);
        self.durable.remove(&self.key);
    }
}

impl core::fmt::Debug for TenantStorage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TenantStorage")
            .field("key", &self.key)
            .field("durable", &self.durable())
            .field("session", &self.session())
            .finish()
    }
}
