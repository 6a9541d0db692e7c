use super::{Blacklist, ExactRecords, WildcardRecords};
use relaydns_application::ports::{DnsCache, RecordStore};
use std::collections::HashMap;

pub const MEMORY_BACKEND: &str = "memory";

/// Process-local backend. Record operations delegate to the exact store.
#[derive(Default)]
pub struct MemoryCache {
    exact: ExactRecords,
    wildcard: WildcardRecords,
    black: Blacklist,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryCache {
    fn lookup_ip(&self, domain: &str) -> Option<String> {
        self.exact.lookup_ip(domain)
    }

    fn init(&self, records: HashMap<String, String>) {
        self.exact.init(records)
    }

    fn put(&self, domain: &str, ip: &str) {
        self.exact.put(domain, ip)
    }

    fn remove(&self, domain: &str) -> bool {
        self.exact.remove(domain)
    }

    fn data(&self) -> HashMap<String, String> {
        self.exact.data()
    }

    fn size(&self) -> usize {
        self.exact.size()
    }

    fn name(&self) -> &str {
        MEMORY_BACKEND
    }
}

impl DnsCache for MemoryCache {
    fn add_black_domain(&self, domain: &str) {
        self.black.add(domain)
    }

    fn remove_black_domain(&self, domain: &str) -> bool {
        self.black.remove(domain)
    }

    fn list_black_domains(&self) -> Vec<String> {
        self.black.list()
    }

    fn is_black_domain(&self, domain: &str) -> bool {
        self.black.contains(domain)
    }

    fn wildcard_cache(&self) -> &dyn RecordStore {
        &self.wildcard
    }
}
