use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered list of blocked domains. Duplicates are allowed and removal only
/// drops the first occurrence.
#[derive(Default)]
pub struct Blacklist {
    domains: RwLock<Vec<String>>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.domains.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.domains.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add(&self, domain: &str) {
        let domain = domain.trim();
        if domain.is_empty() {
            return;
        }
        self.write().push(domain.to_string());
    }

    pub fn remove(&self, domain: &str) -> bool {
        let mut domains = self.write();
        match domains.iter().position(|d| d == domain) {
            Some(idx) => {
                domains.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.read().iter().any(|d| d == domain)
    }

    pub fn list(&self) -> Vec<String> {
        self.read().clone()
    }
}
