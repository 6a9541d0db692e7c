use fancy_regex::Regex;
use relaydns_application::ports::RecordStore;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

struct WildcardEntry {
    ip: String,
    // None when the pattern failed to compile; such entries never match
    regex: Option<Regex>,
}

impl WildcardEntry {
    fn compile(pattern: &str, ip: &str) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(r) => Some(r),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Invalid wildcard pattern, entry will never match");
                None
            }
        };
        Self {
            ip: ip.to_string(),
            regex,
        }
    }

    fn matches(&self, domain: &str) -> bool {
        self.regex
            .as_ref()
            .map(|r| r.is_match(domain).unwrap_or(false))
            .unwrap_or(false)
    }
}

/// Pattern-keyed store. Keys are unanchored regular expressions matched
/// against the queried domain; the first matching entry wins and iteration
/// order is unspecified.
#[derive(Default)]
pub struct WildcardRecords {
    entries: RwLock<HashMap<String, WildcardEntry>>,
}

impl WildcardRecords {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, WildcardEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, WildcardEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for WildcardRecords {
    fn lookup_ip(&self, domain: &str) -> Option<String> {
        self.read()
            .values()
            .find(|entry| entry.matches(domain))
            .map(|entry| entry.ip.clone())
    }

    fn init(&self, records: HashMap<String, String>) {
        let compiled = records
            .iter()
            .map(|(pattern, ip)| (pattern.clone(), WildcardEntry::compile(pattern, ip)))
            .collect();
        *self.write() = compiled;
    }

    fn put(&self, domain: &str, ip: &str) {
        let pattern = domain.trim();
        if pattern.is_empty() {
            return;
        }
        let entry = WildcardEntry::compile(pattern, ip);
        self.write().insert(pattern.to_string(), entry);
    }

    fn remove(&self, domain: &str) -> bool {
        self.write().remove(domain).is_some()
    }

    fn data(&self) -> HashMap<String, String> {
        self.read()
            .iter()
            .map(|(pattern, entry)| (pattern.clone(), entry.ip.clone()))
            .collect()
    }

    fn size(&self) -> usize {
        self.read().len()
    }

    fn name(&self) -> &str {
        "memory_wildcard"
    }
}
