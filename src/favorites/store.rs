use crate::favorites::set::{parse_or_default, FavoriteId, FavoritesSet};
use crate::storage::StorageHandle;

/// Key the set is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "deltaFavorites";

/// Reads and writes the [`FavoritesSet`] in a storage area.
///
/// Cloning the store is cheap and every clone talks to the same area.
#[derive(Clone)]
pub struct FavoritesStore {
    area: StorageHandle,
    key: String,
}

impl FavoritesStore {
    pub fn new(area: StorageHandle) -> Self {
        Self::with_key(area, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key<S: Into<String>>(area: StorageHandle, key: S) -> Self {
        Self {
            area,
            key: key.into(),
        }
    }

    /// Current persisted set. Missing or unreadable data loads as an empty set.
    pub fn load(&self) -> FavoritesSet {
        parse_or_default(self.area.get_item(&self.key).as_deref())
    }

    /// Overwrites the persisted set. A write the storage area refuses is logged
    /// and otherwise ignored.
    pub fn save(&self, set: &FavoritesSet) {
        let raw = match serde_json::to_string(set) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Cannot serialize favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.area.set_item(&self.key, &raw) {
            log::warn!("Favorites not saved under '{}': {}", self.key, e);
        }
    }

    /// Flips membership of `id` against the latest persisted set, saves, and
    /// returns the resulting set.
    pub fn toggle(&self, id: &FavoriteId) -> FavoritesSet {
        let mut set = self.load();
        let added = set.toggle(id);
        self.save(&set);

        log::debug!(
            "Favorite {} {}",
            id,
            if added { "added" } else { "removed" }
        );
        set
    }

    pub fn is_favorite(&self, id: &FavoriteId) -> bool {
        self.load().contains(id)
    }
}
