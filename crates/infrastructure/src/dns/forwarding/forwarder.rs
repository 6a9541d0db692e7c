use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use relaydns_application::ports::{UpstreamAnswer, UpstreamResolver};
use relaydns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const MAX_RESPONSE_SIZE: usize = 4096;

/// Sends single-question A queries to one upstream server over UDP.
///
/// Each exchange uses a fresh ephemeral socket, so concurrent chases never
/// read each other's replies.
pub struct UpstreamForwarder {
    server: SocketAddr,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    /// Resolve a `host:port` endpoint once and build a forwarder for it.
    /// IPv4 addresses are preferred when the host has both families.
    pub async fn from_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, DomainError> {
        let resolve_error = |reason: String| DomainError::Upstream {
            server: endpoint.to_string(),
            reason,
        };

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(endpoint)
            .await
            .map_err(|e| resolve_error(format!("Failed to resolve upstream: {}", e)))?
            .collect();

        let server = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| resolve_error("Upstream resolved to no addresses".to_string()))?;

        debug!(endpoint = %endpoint, server = %server, "Upstream endpoint resolved");
        Ok(Self::new(server, timeout))
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Upstream {
            server: self.server.to_string(),
            reason: format!("{}: {}", action, e),
        }
    }

    async fn exchange(&self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bind_addr: SocketAddr = if self.server.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error("Failed to bind socket", e))?;

        socket
            .connect(self.server)
            .await
            .map_err(|e| self.io_error("Failed to connect to server", e))?;

        socket
            .send(request)
            .await
            .map_err(|e| self.io_error("Failed to send query", e))?;

        let mut response_buf = vec![0u8; MAX_RESPONSE_SIZE];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut response_buf))
            .await
            .map_err(|_| DomainError::UpstreamTimeout {
                server: self.server.to_string(),
            })?
            .map_err(|e| self.io_error("Failed to receive response", e))?;

        response_buf.truncate(len);
        Ok(response_buf)
    }
}

#[async_trait]
impl UpstreamResolver for UpstreamForwarder {
    async fn query_a(&self, domain: &str) -> Result<UpstreamAnswer, DomainError> {
        let (id, request) = MessageBuilder::build_a_query(domain)?;
        let response = self.exchange(&request).await?;

        if response.len() < 2 || u16::from_be_bytes([response[0], response[1]]) != id {
            return Err(DomainError::Upstream {
                server: self.server.to_string(),
                reason: format!("Reply id does not match query id {}", id),
            });
        }

        let answer = ResponseParser::parse_a_answer(domain, &response)?;
        debug!(domain = %domain, server = %self.server, answer = ?answer, "Upstream answered");
        Ok(answer)
    }

    fn server(&self) -> String {
        self.server.to_string()
    }
}
