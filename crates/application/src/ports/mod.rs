mod dns_cache;
mod record_store;
mod upstream_resolver;

pub use dns_cache::DnsCache;
pub use record_store::RecordStore;
pub use upstream_resolver::{UpstreamAnswer, UpstreamResolver};
