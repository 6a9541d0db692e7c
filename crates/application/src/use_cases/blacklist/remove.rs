use crate::ports::DnsCache;
use std::sync::Arc;
use tracing::{debug, info};

pub struct RemoveBlackDomainUseCase {
    cache: Arc<dyn DnsCache>,
}

impl RemoveBlackDomainUseCase {
    pub fn new(cache: Arc<dyn DnsCache>) -> Self {
        Self { cache }
    }

    /// Removes one occurrence. Returns whether the domain was listed.
    pub fn execute(&self, domain: &str) -> bool {
        let removed = self.cache.remove_black_domain(domain);
        if removed {
            info!(domain = %domain, "Removed domain from blacklist");
        } else {
            debug!(domain = %domain, "Domain was not blacklisted");
        }
        removed
    }
}
