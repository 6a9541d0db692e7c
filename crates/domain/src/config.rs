pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_UPSTREAM_PORT};
pub use server::ServerConfig;
