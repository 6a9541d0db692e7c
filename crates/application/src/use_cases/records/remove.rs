use crate::ports::DnsCache;
use std::sync::Arc;
use tracing::{debug, info};

pub struct RemoveRecordUseCase {
    cache: Arc<dyn DnsCache>,
}

impl RemoveRecordUseCase {
    pub fn new(cache: Arc<dyn DnsCache>) -> Self {
        Self { cache }
    }

    /// Returns whether a record existed.
    pub fn execute(&self, domain: &str) -> bool {
        let removed = self.cache.remove(domain);
        if removed {
            info!(domain = %domain, "Removed exact record");
        } else {
            debug!(domain = %domain, "No exact record to remove");
        }
        removed
    }
}
