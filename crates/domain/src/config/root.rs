use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

pub const DEFAULT_UPSTREAM_PORT: u16 = 53;

const LOCAL_CONFIG_PATH: &str = "relaydns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/relaydns/config.toml";

/// Main configuration structure for relaydns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Regex pattern -> IPv4 address, seeded into the wildcard store
    #[serde(default)]
    pub wildcard: HashMap<String, String>,

    /// Domain -> IPv4 address, seeded into the exact store
    #[serde(default)]
    pub simple: HashMap<String, String>,

    /// Domains that are silently dropped
    #[serde(default)]
    pub black: Vec<String>,

    /// Parsed and kept for round-tripping only; no lookup path consults it.
    #[serde(default)]
    pub wildcard_black: Vec<String>,

    /// Upstream resolver as `host:port`; a bare IP gets port 53
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// UDP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Cache backend name looked up in the registry
    #[serde(default = "default_cache")]
    pub cache: String,

    /// Upstream exchange timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Upper bound on upstream exchanges while chasing one CNAME chain
    #[serde(default = "default_max_cname_hops")]
    pub max_cname_hops: usize,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wildcard: HashMap::new(),
            simple: HashMap::new(),
            black: Vec::new(),
            wildcard_black: Vec::new(),
            upstream: default_upstream(),
            port: default_port(),
            cache: default_cache(),
            query_timeout: default_query_timeout(),
            max_cname_hops: default_max_cname_hops(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_upstream() -> String {
    format!("8.8.8.8:{}", DEFAULT_UPSTREAM_PORT)
}

fn default_port() -> u16 {
    53
}

fn default_cache() -> String {
    "memory".to_string()
}

fn default_query_timeout() -> u64 {
    5
}

fn default_max_cname_hops() -> usize {
    16
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. relaydns.toml in current directory
    /// 3. /etc/relaydns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_bytes(&contents)
    }

    pub fn from_bytes(buffer: &[u8]) -> Result<Self, ConfigError> {
        let contents = std::str::from_utf8(buffer).map_err(|e| ConfigError::Parse(e.to_string()))?;
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream = upstream;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(cache) = overrides.cache {
            self.cache = cache;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Normalize `upstream` into a `host:port` endpoint, defaulting the port
    /// to 53. Hostnames are kept as-is and resolved when the forwarder is
    /// built.
    pub fn upstream_endpoint(&self) -> Result<String, ConfigError> {
        let raw = self.upstream.trim();
        let invalid =
            || ConfigError::Validation(format!("Invalid upstream address '{}'", self.upstream));

        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(addr.to_string());
        }
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DEFAULT_UPSTREAM_PORT).to_string());
        }

        match raw.rsplit_once(':') {
            Some((host, port)) => {
                if host.is_empty() || host.contains(':') {
                    return Err(invalid());
                }
                let port: u16 = port.parse().map_err(|_| invalid())?;
                if port == 0 {
                    return Err(invalid());
                }
                Ok(format!("{}:{}", host, port))
            }
            None => Ok(format!("{}:{}", raw, DEFAULT_UPSTREAM_PORT)),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout must be at least 1 second".to_string(),
            ));
        }

        if self.max_cname_hops == 0 {
            return Err(ConfigError::Validation(
                "max_cname_hops must be at least 1".to_string(),
            ));
        }

        self.upstream_endpoint()?;

        if self.server.max_inflight == 0 {
            return Err(ConfigError::Validation(
                "server.max_inflight must be at least 1".to_string(),
            ));
        }

        for (section, map) in [("simple", &self.simple), ("wildcard", &self.wildcard)] {
            for (key, ip) in map {
                if ip.parse::<Ipv4Addr>().is_err() {
                    return Err(ConfigError::Validation(format!(
                        "{} entry '{}' has invalid IPv4 address '{}'",
                        section, key, ip
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub upstream: Option<String>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub cache: Option<String>,
    pub log_level: Option<String>,
}
