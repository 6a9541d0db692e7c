use std::net::SocketAddr;
use std::sync::Arc;

/// Question type as far as the resolver cares: only A is answered from cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    A,
    Other(u16),
}

impl QueryType {
    pub fn is_address(&self) -> bool {
        matches!(self, Self::A)
    }
}

impl From<u16> for QueryType {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::A,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub query_type: QueryType,
    pub client: SocketAddr,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, query_type: QueryType, client: SocketAddr) -> Self {
        Self {
            domain: domain.into(),
            query_type,
            client,
        }
    }
}
