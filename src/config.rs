//! Site configuration.
//!
//! `SiteConfig` holds the few knobs the site has: where favorites are stored,
//! which origin the storage belongs to, and the label text of favorite
//! controls. Defaults come from [`Default`]; the fluent
//! [`SiteConfig::builder()`] validates on `build()`.
//!
//! ```rust
//! use delta_tourism::config::SiteConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SiteConfig::builder()
//!     .storage_key("delta.favorites")
//!     .database_path("local.db")
//!     .build()?;
//! assert_eq!(cfg.storage_key, "delta.favorites");
//! # Ok(()) }
//! ```

use std::fmt;
use std::path::PathBuf;
use url::{Host, Origin, Url};

use crate::favorites::store::DEFAULT_STORAGE_KEY;
use crate::favorites::FavoriteLabels;

const DEFAULT_SITE_NAME: &str = "Discover Delta State";
const DEFAULT_ORIGIN_SCHEME: &str = "http";
const DEFAULT_ORIGIN_HOST: &str = "localhost";
const DEFAULT_ORIGIN_PORT: u16 = 80;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Title shown in the page header
    pub site_name: String,
    /// Origin the local storage belongs to
    pub origin: Origin,
    /// Storage key holding the favorites array
    pub storage_key: String,
    /// Label text of favorite controls
    pub labels: FavoriteLabels,
    /// SQLite file for persistent storage. `None` keeps everything in memory.
    pub database_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            origin: Origin::Tuple(
                DEFAULT_ORIGIN_SCHEME.to_string(),
                Host::Domain(DEFAULT_ORIGIN_HOST.to_string()),
                DEFAULT_ORIGIN_PORT,
            ),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            labels: FavoriteLabels::default(),
            database_path: None,
        }
    }
}

impl SiteConfig {
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    inner: SiteConfig,
    origin: Option<String>,
}

impl SiteConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut SiteConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn site_name<S: Into<String>>(self, name: S) -> Self { self.map(|c| c.site_name = name.into()) }
    pub fn storage_key<S: Into<String>>(self, key: S) -> Self { self.map(|c| c.storage_key = key.into()) }
    pub fn favorited_label<S: Into<String>>(self, label: S) -> Self { self.map(|c| c.labels.favorited = label.into()) }
    pub fn not_favorited_label<S: Into<String>>(self, label: S) -> Self { self.map(|c| c.labels.not_favorited = label.into()) }
    pub fn database_path<P: Into<PathBuf>>(self, path: P) -> Self { self.map(|c| c.database_path = Some(path.into())) }

    /// Origin as a URL string; parsed and checked on `build()`.
    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Validate and build the final config.
    pub fn build(mut self) -> Result<SiteConfig, ConfigError> {
        if let Some(raw) = self.origin.take() {
            let url = Url::parse(&raw).map_err(|_| ConfigError::InvalidOrigin(raw.clone()))?;
            self.inner.origin = url.origin();
            if !self.inner.origin.is_tuple() {
                return Err(ConfigError::OpaqueOrigin(raw));
            }
        }
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidOrigin(String),
    OpaqueOrigin(String),
    EmptyStorageKey,
    IndistinguishableLabels,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOrigin(s) => write!(f, "origin '{s}' is not a valid URL"),
            ConfigError::OpaqueOrigin(s) => write!(f, "origin '{s}' has no host to scope storage to"),
            ConfigError::EmptyStorageKey => write!(f, "storage_key must not be empty"),
            ConfigError::IndistinguishableLabels => {
                write!(f, "favorited and not-favorited labels must differ")
            }
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &SiteConfig) -> Result<(), ConfigError> {
    if !c.origin.is_tuple() {
        return Err(ConfigError::OpaqueOrigin(c.origin.ascii_serialization()));
    }
    if c.storage_key.trim().is_empty() {
        return Err(ConfigError::EmptyStorageKey);
    }
    if c.labels.favorited == c.labels.not_favorited {
        return Err(ConfigError::IndistinguishableLabels);
    }
    Ok(())
}
