use relaydns_domain::{CliOverrides, Config};

/// Load, apply overrides, then validate. Any failure is fatal at startup.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
