use crate::ports::{DnsCache, UpstreamAnswer, UpstreamResolver};
use relaydns_domain::{DnsRequest, DomainError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Exact,
    Wildcard,
    /// Fetched from upstream after `hops` exchanges.
    Upstream { hops: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Address string exactly as stored in the cache.
    pub ip: String,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Blacklisted: the caller must not reply at all.
    Blocked,
    Resolved(Resolution),
}

/// Blacklist check, exact lookup, wildcard lookup, then an upstream CNAME
/// chase bounded by `max_cname_hops` exchanges and a visited-name set.
pub struct ResolveQueryUseCase {
    cache: Arc<dyn DnsCache>,
    upstream: Arc<dyn UpstreamResolver>,
    max_cname_hops: usize,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<dyn DnsCache>,
        upstream: Arc<dyn UpstreamResolver>,
        max_cname_hops: usize,
    ) -> Self {
        Self {
            cache,
            upstream,
            max_cname_hops,
        }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<QueryOutcome, DomainError> {
        let domain = &*request.domain;

        if self.cache.is_black_domain(domain) {
            info!(domain = %domain, client = %request.client, "Blacklisted query dropped");
            return Ok(QueryOutcome::Blocked);
        }

        if request.query_type.is_address() {
            if let Some(ip) = self.cache.lookup_ip(domain) {
                debug!(domain = %domain, ip = %ip, "Exact cache hit");
                return Ok(resolved(ip, ResolutionSource::Exact));
            }

            if let Some(ip) = self.cache.wildcard_cache().lookup_ip(domain) {
                debug!(domain = %domain, ip = %ip, "Wildcard cache hit");
                return Ok(resolved(ip, ResolutionSource::Wildcard));
            }
        } else {
            debug!(domain = %domain, query_type = ?request.query_type, "Non-A query, skipping cache");
        }

        let (ip, hops) = self.chase_upstream(domain).await?;
        Ok(resolved(ip, ResolutionSource::Upstream { hops }))
    }

    async fn chase_upstream(&self, domain: &str) -> Result<(String, usize), DomainError> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut current = domain.to_string();

        for hop in 1..=self.max_cname_hops {
            if !visited.insert(current.clone()) {
                return Err(DomainError::CnameLoop(current));
            }

            match self.upstream.query_a(&current).await? {
                UpstreamAnswer::Address(addr) => {
                    let ip = addr.to_string();
                    self.cache.put(domain, &ip);
                    info!(
                        domain = %domain,
                        ip = %ip,
                        hops = hop,
                        cache_size = self.cache.size(),
                        "Cached upstream record"
                    );
                    return Ok((ip, hop));
                }
                UpstreamAnswer::Alias(target) => {
                    debug!(domain = %domain, from = %current, to = %target, "Following CNAME");
                    if let Some(ip) = self.cache.lookup_ip(&target) {
                        self.cache.put(domain, &ip);
                        info!(domain = %domain, target = %target, ip = %ip, "Aliased cached CNAME target");
                        return Ok((ip, hop));
                    }
                    current = target;
                }
            }
        }

        Err(DomainError::CnameHopLimit {
            domain: domain.to_string(),
            hops: self.max_cname_hops,
        })
    }
}

fn resolved(ip: String, source: ResolutionSource) -> QueryOutcome {
    QueryOutcome::Resolved(Resolution { ip, source })
}
