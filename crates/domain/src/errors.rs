use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Upstream {server} failed: {reason}")]
    Upstream { server: String, reason: String },

    #[error("Upstream {server} timed out")]
    UpstreamTimeout { server: String },

    #[error("Upstream answered {rcode} for {domain}")]
    UpstreamRcode { domain: String, rcode: String },

    #[error("Upstream returned no answers for {0}")]
    EmptyAnswer(String),

    #[error("Upstream returned unsupported {record_type} record for {domain}")]
    UnexpectedAnswer { domain: String, record_type: String },

    #[error("CNAME loop detected at {0}")]
    CnameLoop(String),

    #[error("CNAME chain for {domain} exceeded {hops} hops")]
    CnameHopLimit { domain: String, hops: usize },

    #[error("Failed to encode DNS response: {0}")]
    Encode(String),
}
