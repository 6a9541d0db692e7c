#![allow(dead_code)]

use async_trait::async_trait;
use relaydns_application::ports::{UpstreamAnswer, UpstreamResolver};
use relaydns_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::RwLock;

/// Scripted upstream that records every name it is asked about.
pub struct MockUpstream {
    answers: RwLock<HashMap<String, Result<UpstreamAnswer, DomainError>>>,
    calls: RwLock<Vec<String>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            answers: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_address(self, domain: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().unwrap();
        self.answers
            .write()
            .unwrap()
            .insert(domain.to_string(), Ok(UpstreamAnswer::Address(ip)));
        self
    }

    pub fn with_alias(self, domain: &str, target: &str) -> Self {
        self.answers.write().unwrap().insert(
            domain.to_string(),
            Ok(UpstreamAnswer::Alias(target.to_string())),
        );
        self
    }

    pub fn with_error(self, domain: &str, error: DomainError) -> Self {
        self.answers
            .write()
            .unwrap()
            .insert(domain.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstream {
    async fn query_a(&self, domain: &str) -> Result<UpstreamAnswer, DomainError> {
        self.calls.write().unwrap().push(domain.to_string());
        self.answers
            .read()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::EmptyAnswer(domain.to_string())))
    }

    fn server(&self) -> String {
        "mock-upstream".to_string()
    }
}
