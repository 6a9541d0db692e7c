use crate::ports::DnsCache;
use relaydns_domain::CacheRecord;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSnapshot {
    pub backend: String,
    pub upstream: String,
    /// Exact records, ordered by domain.
    pub records: Vec<CacheRecord>,
    pub size: usize,
    /// Wildcard patterns, ordered by pattern.
    pub wildcard: Vec<CacheRecord>,
    pub black_domains: Vec<String>,
}

pub struct GetCacheSnapshotUseCase {
    cache: Arc<dyn DnsCache>,
    upstream: String,
}

impl GetCacheSnapshotUseCase {
    pub fn new(cache: Arc<dyn DnsCache>, upstream: impl Into<String>) -> Self {
        Self {
            cache,
            upstream: upstream.into(),
        }
    }

    pub fn execute(&self) -> CacheSnapshot {
        let records = CacheRecord::sorted_from(self.cache.data());
        CacheSnapshot {
            backend: self.cache.name().to_string(),
            upstream: self.upstream.clone(),
            size: records.len(),
            records,
            wildcard: CacheRecord::sorted_from(self.cache.wildcard_cache().data()),
            black_domains: self.cache.list_black_domains(),
        }
    }
}
