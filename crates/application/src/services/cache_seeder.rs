use relaydns_domain::Config;
use tracing::{info, warn};

use crate::ports::DnsCache;

/// Load the statically configured records and blacklist into `cache`.
pub fn seed_cache(cache: &dyn DnsCache, config: &Config) {
    cache.init(config.simple.clone());
    cache.wildcard_cache().init(config.wildcard.clone());
    for domain in &config.black {
        cache.add_black_domain(domain);
    }

    if !config.wildcard_black.is_empty() {
        warn!(
            count = config.wildcard_black.len(),
            "wildcard_black entries are parsed but not enforced"
        );
    }

    info!(
        backend = cache.name(),
        exact = cache.size(),
        wildcard = cache.wildcard_cache().size(),
        black = config.black.len(),
        "Cache seeded from configuration"
    );
}
