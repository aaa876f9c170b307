//! Local storage substrate for the site.
//!
//! Favorites (and anything else the site wants to remember between visits)
//! live in a key/value area shaped like the DOM's `Storage` interface. The
//! area is injected wherever it is needed, so the rest of the crate never
//! reaches for a global.
//!
//! # Available backends
//!
//! - [`InMemoryStorageArea`]: Ephemeral storage. Cloning the `Arc` that
//!   wraps it lets several stores ("tabs") share the same data.
//! - [`SqliteStorageArea`]: Persistent storage in a SQLite file, keyed by
//!   site origin. Requires the `sqlite_storage` feature.
//! - [`UnavailableStorageArea`]: Storage that is disabled or over quota:
//!   reads find nothing and every write fails.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use delta_tourism::storage::{InMemoryStorageArea, StorageArea};
//!
//! let area: Arc<dyn StorageArea> = Arc::new(InMemoryStorageArea::new());
//! area.set_item("deltaFavorites", "[\"abraka\"]").unwrap();
//! assert_eq!(area.get_item("deltaFavorites").as_deref(), Some("[\"abraka\"]"));
//! ```

/// Storage area module, defining the key/value storage interface.
pub mod area;
/// In-memory storage area.
pub mod in_memory;
/// SQLite-backed storage area.
#[cfg(feature = "sqlite_storage")]
pub mod sqlite_store;
/// Storage area that refuses every write.
pub mod unavailable;

pub use area::{StorageArea, StorageHandle};
pub use in_memory::InMemoryStorageArea;
#[cfg(feature = "sqlite_storage")]
pub use sqlite_store::SqliteStorageArea;
pub use unavailable::UnavailableStorageArea;

use std::sync::Arc;

use crate::config::SiteConfig;

/// Opens the storage area described by `config`: the SQLite file at
/// `database_path` when one is set, in-memory storage otherwise.
pub fn open(config: &SiteConfig) -> anyhow::Result<StorageHandle> {
    match &config.database_path {
        #[cfg(feature = "sqlite_storage")]
        Some(path) => Ok(Arc::new(SqliteStorageArea::open(path, &config.origin)?)),
        #[cfg(not(feature = "sqlite_storage"))]
        Some(path) => {
            log::warn!(
                "Built without sqlite_storage; ignoring {} and keeping favorites in memory",
                path.display()
            );
            Ok(Arc::new(InMemoryStorageArea::new()))
        }
        None => Ok(Arc::new(InMemoryStorageArea::new())),
    }
}
