#![allow(dead_code)]

use relaydns_application::ports::{DnsCache, RecordStore};
use std::collections::HashMap;
use std::sync::RwLock;

/// HashMap-backed store. With `suffix_match` set, keys act as domain suffixes
/// instead of exact names, which is enough to stand in for pattern lookup.
pub struct MockRecordStore {
    name: &'static str,
    suffix_match: bool,
    records: RwLock<HashMap<String, String>>,
}

impl MockRecordStore {
    pub fn exact() -> Self {
        Self {
            name: "mock",
            suffix_match: false,
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn suffix() -> Self {
        Self {
            name: "mock_wildcard",
            suffix_match: true,
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl RecordStore for MockRecordStore {
    fn lookup_ip(&self, domain: &str) -> Option<String> {
        let records = self.records.read().unwrap();
        if self.suffix_match {
            records
                .iter()
                .find(|(suffix, _)| domain.ends_with(suffix.as_str()))
                .map(|(_, ip)| ip.clone())
        } else {
            records.get(domain).cloned()
        }
    }

    fn init(&self, records: HashMap<String, String>) {
        *self.records.write().unwrap() = records;
    }

    fn put(&self, domain: &str, ip: &str) {
        let domain = domain.trim();
        if domain.is_empty() {
            return;
        }
        self.records
            .write()
            .unwrap()
            .insert(domain.to_string(), ip.to_string());
    }

    fn remove(&self, domain: &str) -> bool {
        self.records.write().unwrap().remove(domain).is_some()
    }

    fn data(&self) -> HashMap<String, String> {
        self.records.read().unwrap().clone()
    }

    fn size(&self) -> usize {
        self.records.read().unwrap().len()
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub struct MockDnsCache {
    exact: MockRecordStore,
    wildcard: MockRecordStore,
    black: RwLock<Vec<String>>,
}

impl MockDnsCache {
    pub fn new() -> Self {
        Self {
            exact: MockRecordStore::exact(),
            wildcard: MockRecordStore::suffix(),
            black: RwLock::new(Vec::new()),
        }
    }

    pub fn with_record(self, domain: &str, ip: &str) -> Self {
        self.exact.put(domain, ip);
        self
    }

    pub fn with_wildcard(self, suffix: &str, ip: &str) -> Self {
        self.wildcard.put(suffix, ip);
        self
    }

    pub fn with_black(self, domain: &str) -> Self {
        self.add_black_domain(domain);
        self
    }
}

impl Default for MockDnsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MockDnsCache {
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
        "mock"
    }
}

impl DnsCache for MockDnsCache {
    fn add_black_domain(&self, domain: &str) {
        let domain = domain.trim();
        if !domain.is_empty() {
            self.black.write().unwrap().push(domain.to_string());
        }
    }

    fn remove_black_domain(&self, domain: &str) -> bool {
        let mut black = self.black.write().unwrap();
        match black.iter().position(|d| d == domain) {
            Some(idx) => {
                black.remove(idx);
                true
            }
            None => false,
        }
    }

    fn list_black_domains(&self) -> Vec<String> {
        self.black.read().unwrap().clone()
    }

    fn is_black_domain(&self, domain: &str) -> bool {
        self.black.read().unwrap().iter().any(|d| d == domain)
    }

    fn wildcard_cache(&self) -> &dyn RecordStore {
        &self.wildcard
    }
}
