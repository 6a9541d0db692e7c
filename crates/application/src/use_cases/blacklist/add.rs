use crate::ports::DnsCache;
use relaydns_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct AddBlackDomainUseCase {
    cache: Arc<dyn DnsCache>,
}

impl AddBlackDomainUseCase {
    pub fn new(cache: Arc<dyn DnsCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self, domain: &str) -> Result<(), DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain must not be empty".to_string(),
            ));
        }

        self.cache.add_black_domain(domain);
        info!(domain = %domain, "Added domain to blacklist");
        Ok(())
    }
}
