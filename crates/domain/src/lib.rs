//! relaydns domain layer
pub mod config;
pub mod dns_request;
pub mod errors;
pub mod record;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_request::{DnsRequest, QueryType};
pub use errors::DomainError;
pub use record::{normalize_domain, CacheRecord};
