use crate::dns::cache::MemoryCache;
use relaydns_application::services::CacheRegistry;
use std::sync::Arc;

/// Registry with every backend this build ships.
pub fn default_registry() -> CacheRegistry {
    let mut registry = CacheRegistry::new();
    registry.register(Arc::new(MemoryCache::new()));
    registry
}
