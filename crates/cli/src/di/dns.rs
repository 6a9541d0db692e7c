use relaydns_application::ports::{DnsCache, UpstreamResolver};
use relaydns_application::services::seed_cache;
use relaydns_application::use_cases::ResolveQueryUseCase;
use relaydns_domain::Config;
use relaydns_infrastructure::dns::{default_registry, UpstreamForwarder};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<dyn DnsCache>,
    pub upstream: Arc<dyn UpstreamResolver>,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = default_registry();
        let cache = registry.select(&config.cache)?;
        info!(backend = cache.name(), "Cache backend selected");

        seed_cache(cache.as_ref(), config);

        let endpoint = config.upstream_endpoint()?;
        let upstream: Arc<dyn UpstreamResolver> = Arc::new(
            UpstreamForwarder::from_endpoint(&endpoint, Duration::from_secs(config.query_timeout))
                .await?,
        );
        info!(
            endpoint = %endpoint,
            upstream = %upstream.server(),
            timeout_secs = config.query_timeout,
            max_cname_hops = config.max_cname_hops,
            "Upstream forwarder configured"
        );

        let resolve_query = Arc::new(ResolveQueryUseCase::new(
            cache.clone(),
            upstream.clone(),
            config.max_cname_hops,
        ));

        Ok(Self {
            cache,
            upstream,
            resolve_query,
        })
    }
}
