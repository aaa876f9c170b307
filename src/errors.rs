use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot format timestamp: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
