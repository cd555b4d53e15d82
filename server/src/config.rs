use std::{env, path::PathBuf};

use color_eyre::{eyre::WrapErr, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub jobs_file: Option<PathBuf>,
}

impl Config {
    pub fn new_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, falling back to
    /// defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid PORT value: {:?}", port))?,
            None => 5000,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            jobs_file: lookup("JOBS_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
