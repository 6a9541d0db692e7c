use crate::ports::DnsCache;
use relaydns_domain::{CacheRecord, DomainError};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;

pub struct AddRecordUseCase {
    cache: Arc<dyn DnsCache>,
}

impl AddRecordUseCase {
    pub fn new(cache: Arc<dyn DnsCache>) -> Self {
        Self { cache }
    }

    /// Add or replace one exact record.
    pub fn execute(&self, domain: &str, ip: &str) -> Result<CacheRecord, DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain must not be empty".to_string(),
            ));
        }

        let ip = ip.trim();
        ip.parse::<Ipv4Addr>()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

        self.cache.put(domain, ip);
        info!(domain = %domain, ip = %ip, "Added exact record");

        Ok(CacheRecord::new(domain, ip))
    }
}
