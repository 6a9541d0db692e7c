use relaydns_application::ports::RecordStore;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Literal, case-sensitive `domain -> ip` store.
#[derive(Default)]
pub struct ExactRecords {
    records: RwLock<HashMap<String, String>>,
}

impl ExactRecords {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for ExactRecords {
    fn lookup_ip(&self, domain: &str) -> Option<String> {
        self.read().get(domain).cloned()
    }

    fn init(&self, records: HashMap<String, String>) {
        *self.write() = records;
    }

    fn put(&self, domain: &str, ip: &str) {
        let domain = domain.trim();
        if domain.is_empty() {
            return;
        }
        self.write().insert(domain.to_string(), ip.to_string());
    }

    fn remove(&self, domain: &str) -> bool {
        self.write().remove(domain).is_some()
    }

    fn data(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    fn size(&self) -> usize {
        self.read().len()
    }

    fn name(&self) -> &str {
        "memory_exact"
    }
}
