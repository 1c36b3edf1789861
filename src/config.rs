use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigToml {
    pub posts: PostsConfig,
    pub tracing: Tracing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostsConfig {
    /// Channel the `/channel_post` wizard publishes to, as `@username`.
    pub directory_channel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tracing {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ConfigToml {
    pub fn parse(path: &str) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&config)?)
    }
}
