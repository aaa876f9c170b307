use crate::dom::{ClickEvent, Element};
use crate::favorites::control::{FavoriteLabels, FavoriteState, ToggleControl, FAVORITE_ID_ATTR};
use crate::favorites::store::FavoritesStore;

/// Wires toggle controls to a [`FavoritesStore`].
pub struct FavoritesBinder {
    store: FavoritesStore,
    labels: FavoriteLabels,
}

impl FavoritesBinder {
    pub fn new(store: FavoritesStore, labels: FavoriteLabels) -> Self {
        Self { store, labels }
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn labels(&self) -> &FavoriteLabels {
        &self.labels
    }

    /// Labels every control from the stored set and registers its toggle
    /// handler. The store is read once for the whole pass. Controls without an
    /// id are skipped. Returns the number of controls bound.
    pub fn bind<C: ToggleControl + 'static>(&self, controls: &[C]) -> usize {
        let current = self.store.load();
        let mut bound = 0;

        for control in controls {
            let Some(id) = control.favorite_id() else {
                log::debug!("Skipping favorite control without an id");
                continue;
            };

            control.set_label(FavoriteState::of(&current, &id).label(&self.labels));

            let store = self.store.clone();
            let labels = self.labels.clone();
            control.on_activate(Box::new(move |ev: &ClickEvent, target: &C| {
                ev.prevent_default();
                let updated = store.toggle(&id);
                target.set_label(FavoriteState::of(&updated, &id).label(&labels));
            }));

            bound += 1;
        }

        log::debug!("Bound {} favorite controls", bound);
        bound
    }

    /// Binds every control inside `container` that carries a favorite id attribute.
    pub fn bind_container(&self, container: &Element) -> usize {
        let controls = container.query_by_attr(FAVORITE_ID_ATTR);
        self.bind(&controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::set::{FavoriteId, FavoritesSet};
    use crate::storage::{InMemoryStorageArea, StorageArea, StorageHandle};
    use anyhow::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts reads so tests can check how often the binder hits storage.
    #[derive(Default)]
    struct CountingArea {
        inner: InMemoryStorageArea,
        reads: AtomicUsize,
    }

    impl StorageArea for CountingArea {
        fn get_item(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_item(key)
        }
        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set_item(key, value)
        }
        fn remove_item(&self, key: &str) -> Result<()> {
            self.inner.remove_item(key)
        }
        fn clear(&self) -> Result<()> {
            self.inner.clear()
        }
        fn len(&self) -> usize {
            self.inner.len()
        }
        fn keys(&self) -> Vec<String> {
            self.inner.keys()
        }
    }

    fn binder_with(ids: &[&str]) -> FavoritesBinder {
        let area: StorageHandle = Arc::new(InMemoryStorageArea::new());
        let store = FavoritesStore::new(area);
        store.save(&ids.iter().map(|s| FavoriteId::from(*s)).collect());
        FavoritesBinder::new(store, FavoriteLabels::default())
    }

    fn control(id: &str) -> Element {
        Element::new("button").with_attr(FAVORITE_ID_ATTR, id)
    }

    fn state(binder: &FavoritesBinder, el: &Element) -> Option<FavoriteState> {
        binder.labels().state_of(&el.label())
    }

    #[test]
    fn bind_reflects_store() {
        let binder = binder_with(&["abraka"]);
        let abraka = control("abraka");
        let palace = control("warri-palace");

        assert_eq!(binder.bind(&[abraka.clone(), palace.clone()]), 2);

        assert_eq!(state(&binder, &abraka), Some(FavoriteState::Favorited));
        assert_eq!(state(&binder, &palace), Some(FavoriteState::NotFavorited));
    }

    #[test]
    fn activation_toggles_store_and_label() {
        let binder = binder_with(&[]);
        let banga = control("banga");
        binder.bind(&[banga.clone()]);
        assert_eq!(state(&binder, &banga), Some(FavoriteState::NotFavorited));

        let ev = banga.click();
        assert!(ev.default_prevented());
        assert_eq!(state(&binder, &banga), Some(FavoriteState::Favorited));

        let expected: FavoritesSet = [FavoriteId::from("banga")].into_iter().collect();
        assert_eq!(binder.store().load(), expected);

        // Rebinding a freshly rendered control picks up the persisted state.
        let rerendered = control("banga");
        binder.bind(&[rerendered.clone()]);
        assert_eq!(state(&binder, &rerendered), Some(FavoriteState::Favorited));

        banga.click();
        assert_eq!(state(&binder, &banga), Some(FavoriteState::NotFavorited));
        assert!(binder.store().load().is_empty());
    }

    #[test]
    fn activation_updates_only_the_clicked_control() {
        let binder = binder_with(&[]);
        let first = control("otuogu-beach");
        let second = control("otuogu-beach");
        binder.bind(&[first.clone(), second.clone()]);

        first.click();

        assert_eq!(state(&binder, &first), Some(FavoriteState::Favorited));
        assert_eq!(state(&binder, &second), Some(FavoriteState::NotFavorited));

        // Stale until the next bind.
        binder.bind(&[second.clone()]);
        assert_eq!(state(&binder, &second), Some(FavoriteState::Favorited));
    }

    #[test]
    fn rebinding_a_control_keeps_one_toggle_per_click() {
        let binder = binder_with(&[]);
        let beach = control("otuogu-beach");
        let other = control("otuogu-beach");
        binder.bind(&[beach.clone(), other.clone()]);

        beach.click();
        binder.bind(&[other.clone()]);
        binder.bind(&[other.clone()]);
        assert_eq!(state(&binder, &other), Some(FavoriteState::Favorited));

        other.click();
        assert!(binder.store().load().is_empty());
        assert_eq!(state(&binder, &other), Some(FavoriteState::NotFavorited));

        other.click();
        let expected: FavoritesSet = [FavoriteId::from("otuogu-beach")].into_iter().collect();
        assert_eq!(binder.store().load(), expected);
        assert_eq!(state(&binder, &other), Some(FavoriteState::Favorited));
    }

    #[test]
    fn bind_reads_storage_once_per_pass() {
        let area = Arc::new(CountingArea::default());
        let store = FavoritesStore::new(area.clone());
        let binder = FavoritesBinder::new(store, FavoriteLabels::default());

        let controls: Vec<Element> = ["abraka", "banga", "warri-palace", "otuogu-beach"]
            .into_iter()
            .map(control)
            .collect();
        binder.bind(&controls);

        assert_eq!(area.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn controls_without_id_are_skipped() {
        let binder = binder_with(&[]);
        let bare = Element::new("button").with_text("untouched");
        assert_eq!(binder.bind(&[bare.clone(), control("banga")]), 1);

        bare.click();
        assert_eq!(bare.label(), "untouched");
        assert!(binder.store().load().is_empty());
    }

    #[test]
    fn bind_container_finds_nested_controls() {
        let binder = binder_with(&["warri-palace"]);
        let container = Element::new("div").with_attr("id", "attractions");
        let card = Element::new("div").with_attr("class", "card");
        card.append_child(Element::new("h3").with_text("Olu of Warri Palace"));
        card.append_child(control("warri-palace"));
        container.append_child(card);
        container.append_child(control("abraka"));

        assert_eq!(binder.bind_container(&container), 2);

        let labels: Vec<String> = container
            .query_by_attr(FAVORITE_ID_ATTR)
            .iter()
            .map(|e| e.label())
            .collect();
        assert_eq!(labels, vec!["♥ Favorited", "♡ Favorite"]);
    }
}
