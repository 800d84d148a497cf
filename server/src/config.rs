//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Where `/color_video_stream` redirects to. The camera stream itself is
    /// produced by the sensor side, not by this service.
    pub stream_url: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STREAM_URL`: camera stream location; unset disables the redirect
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let stream_url = lookup("STREAM_URL")
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());
        Ok(Self { port, stream_url })
    }
}
