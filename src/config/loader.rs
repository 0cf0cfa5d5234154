//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::ProxyConfig;
use crate::error::ProxyError;

/// Load and validate configuration from the process environment.
///
/// Recognized variables: `API_COMMAND`, `API_START_TIMEOUT`,
/// `STATIC_PATH`, `PORT` (the proxy's own listen port in standalone
/// mode), and `PYTHONPATH`. Unset variables keep their defaults.
pub fn from_env() -> Result<ProxyConfig, ProxyError> {
    from_lookup(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ProxyConfig, ProxyError> {
    let mut config = ProxyConfig::default();

    if let Some(command) = lookup("API_COMMAND") {
        config.backend.command = command;
    }
    if let Some(timeout) = lookup("API_START_TIMEOUT") {
        config.backend.startup_timeout_secs = timeout.parse().map_err(|_| {
            ProxyError::Config(format!("API_START_TIMEOUT is not a number: {timeout:?}"))
        })?;
    }
    if let Some(root) = lookup("STATIC_PATH") {
        config.static_files.root = root.into();
    }
    if let Some(port) = lookup("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ProxyError::Config(format!("PORT is not a port number: {port:?}")))?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }
    if let Some(path) = lookup("PYTHONPATH") {
        config.backend.dependency_path = path;
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &ProxyConfig) -> Result<(), ProxyError> {
    if config.backend.command.trim().is_empty() {
        return Err(ProxyError::Config("API command is empty".into()));
    }
    if config.backend.startup_timeout_secs == 0 {
        return Err(ProxyError::Config("API startup timeout must be positive".into()));
    }
    if config.static_files.root.as_os_str().is_empty() {
        return Err(ProxyError::Config("static root is empty".into()));
    }
    if config.listener.bind_address.ends_with(&format!(":{}", config.backend.port)) {
        return Err(ProxyError::Config(format!(
            "proxy listen port collides with the API server port {}",
            config.backend.port
        )));
    }
    Ok(())
}
