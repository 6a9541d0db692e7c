use serde::{Deserialize, Serialize};

/// Admin web server settings. The DNS listen port lives at the top level of
/// the config file as `port`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Datagrams resolved concurrently; extra datagrams are dropped.
    #[serde(default = "default_max_inflight")]
    pub max_inflight: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            max_inflight: default_max_inflight(),
        }
    }
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_max_inflight() -> usize {
    1024
}
