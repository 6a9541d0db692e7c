use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `domain -> ip` mapping as exposed to admin consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub domain: String,
    pub ip: String,
}

impl CacheRecord {
    pub fn new(domain: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ip: ip.into(),
        }
    }

    /// Flatten a store snapshot into records ordered by domain.
    pub fn sorted_from(data: HashMap<String, String>) -> Vec<Self> {
        let mut records: Vec<Self> = data
            .into_iter()
            .map(|(domain, ip)| Self { domain, ip })
            .collect();
        records.sort_by(|a, b| a.domain.cmp(&b.domain));
        records
    }
}

/// Strip the trailing root label dot that wire-format names carry.
pub fn normalize_domain(domain: &str) -> &str {
    domain.strip_suffix('.').unwrap_or(domain)
}
