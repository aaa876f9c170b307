//! Favorites: which content items the visitor has starred.
//!
//! The favorites subsystem has two halves:
//!
//! - [`FavoritesStore`] keeps a [`FavoritesSet`] in a [`StorageArea`](crate::storage::StorageArea)
//!   under a single key, as a JSON array of ids. Storage faults never reach the
//!   caller: unreadable data loads as an empty set and failed writes are logged
//!   and dropped.
//! - [`FavoritesBinder`] wires rendered [`ToggleControl`]s to the store. It sets
//!   each control's label from the stored set and, on activation, toggles the
//!   id and relabels that one control.
//!
//! # Known limitations
//!
//! - When the storage area refuses writes, a control's label can disagree with
//!   what is persisted until the page is reloaded.
//! - Controls sharing an id are not relabelled together. Only the activated
//!   control changes; the others catch up on the next bind.
//! - Two stores on the same substrate that toggle at the same moment can lose
//!   one of the updates. The substrate offers no compare-and-swap.

/// Binding of toggle controls to the store.
pub mod binder;
/// Toggle control interface and display states.
pub mod control;
/// Favorite ids and the deduplicated set.
pub mod set;
/// Persistence of the set in a storage area.
pub mod store;

pub use binder::FavoritesBinder;
pub use control::{FavoriteLabels, FavoriteState, ToggleControl, FAVORITE_ID_ATTR};
pub use set::{parse_or_default, FavoriteId, FavoritesSet};
pub use store::FavoritesStore;
