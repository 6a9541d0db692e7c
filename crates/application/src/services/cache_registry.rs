use relaydns_domain::ConfigError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::ports::DnsCache;

/// Name-keyed table of cache backends, built once at startup and handed to
/// whoever needs to select a backend.
#[derive(Default)]
pub struct CacheRegistry {
    backends: HashMap<String, Arc<dyn DnsCache>>,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under its own `name()`, replacing any previous one.
    pub fn register(&mut self, cache: Arc<dyn DnsCache>) {
        let name = cache.name().to_string();
        debug!(backend = %name, "Registering cache backend");
        self.backends.insert(name, cache);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DnsCache>> {
        self.backends.get(name).cloned()
    }

    /// Registered backend names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Like [`get`](Self::get), but an unknown name is a configuration error.
    pub fn select(&self, name: &str) -> Result<Arc<dyn DnsCache>, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownCacheBackend {
                name: name.to_string(),
                supported: self.names(),
            })
    }
}
