use async_trait::async_trait;
use relaydns_domain::DomainError;
use std::net::Ipv4Addr;

/// What the first answer record of an upstream A query carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamAnswer {
    Address(Ipv4Addr),
    /// CNAME target, without the trailing root dot.
    Alias(String),
}

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Send one A query for `domain` and classify the first answer.
    ///
    /// Transport failures, timeouts, non-NOERROR codes and empty answer
    /// sections are all errors.
    async fn query_a(&self, domain: &str) -> Result<UpstreamAnswer, DomainError>;

    /// Resolved upstream address, reported in startup logs and the admin
    /// snapshot.
    fn server(&self) -> String;
}
