use crate::dns::wire_response::{build_a_response, parse_query};
use relaydns_application::use_cases::{QueryOutcome, ResolveQueryUseCase};
use relaydns_domain::DnsRequest;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one inbound datagram into at most one reply datagram.
///
/// Every failure is local to the query: it is logged and `None` is returned,
/// which the UDP worker treats as "send nothing".
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(&self, payload: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match parse_query(payload) {
            Ok(q) => q,
            Err(e) => {
                debug!(client = %client, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        info!(domain = %query.domain, query_type = ?query.query_type, client = %client, "DNS query received");

        let request = DnsRequest::new(query.domain.as_str(), query.query_type, client);
        let resolution = match self.use_case.execute(&request).await {
            Ok(QueryOutcome::Resolved(resolution)) => resolution,
            Ok(QueryOutcome::Blocked) => return None,
            Err(e) => {
                warn!(domain = %query.domain, error = %e, "Query resolution failed");
                return None;
            }
        };

        let addr: Ipv4Addr = match resolution.ip.parse() {
            Ok(addr) => addr,
            Err(_) => {
                error!(domain = %query.domain, ip = %resolution.ip, "Cached value is not an IPv4 address");
                return None;
            }
        };

        match build_a_response(&query.message, addr) {
            Ok(bytes) => {
                debug!(domain = %query.domain, ip = %addr, source = ?resolution.source, "Sending response");
                Some(bytes)
            }
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Failed to encode response");
                None
            }
        }
    }
}
