//! Tourism site for Delta State: content cards, a mobile nav toggle, a
//! populated footer, and favorites that persist in local storage.
//!
//! ```
//! use std::sync::Arc;
//! use delta_tourism::favorites::FavoriteId;
//! use delta_tourism::storage::InMemoryStorageArea;
//! use delta_tourism::{Page, SiteConfig};
//! use time::OffsetDateTime;
//!
//! let now = OffsetDateTime::now_utc();
//! let page = Page::load(&SiteConfig::default(), Arc::new(InMemoryStorageArea::new()), now, now).unwrap();
//!
//! let abraka = page.favorite_control(&FavoriteId::from("abraka")).unwrap();
//! abraka.click();
//! assert!(page.store().is_favorite(&FavoriteId::from("abraka")));
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod errors;
pub mod favorites;
pub mod footer;
pub mod nav;
pub mod page;
pub mod storage;

pub use config::SiteConfig;
pub use errors::SiteError;
pub use page::Page;
