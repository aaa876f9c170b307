use crate::dom::{ClickEvent, Element};
use crate::favorites::set::{FavoriteId, FavoritesSet};

/// Attribute carrying the favorite id on rendered toggle controls.
pub const FAVORITE_ID_ATTR: &str = "data-id";

/// What a toggle control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    /// State of `id` according to `set`.
    pub fn of(set: &FavoritesSet, id: &FavoriteId) -> Self {
        if set.contains(id) {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }

    pub fn label<'a>(&self, labels: &'a FavoriteLabels) -> &'a str {
        match self {
            FavoriteState::Favorited => &labels.favorited,
            FavoriteState::NotFavorited => &labels.not_favorited,
        }
    }
}

/// Label text for each [`FavoriteState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteLabels {
    pub favorited: String,
    pub not_favorited: String,
}

impl Default for FavoriteLabels {
    fn default() -> Self {
        Self {
            favorited: "♥ Favorited".to_string(),
            not_favorited: "♡ Favorite".to_string(),
        }
    }
}

impl FavoriteLabels {
    /// Reverse lookup from a displayed label. `None` for text that is neither label.
    pub fn state_of(&self, label: &str) -> Option<FavoriteState> {
        if label == self.favorited {
            Some(FavoriteState::Favorited)
        } else if label == self.not_favorited {
            Some(FavoriteState::NotFavorited)
        } else {
            None
        }
    }
}

/// Handler run when a control is activated. Receives the control itself.
pub type ActivateHandler<C> = Box<dyn Fn(&ClickEvent, &C)>;

/// A clickable affordance bound to one favorite id, with a mutable label.
pub trait ToggleControl: Sized {
    /// The id this control toggles, if it carries one.
    fn favorite_id(&self) -> Option<FavoriteId>;

    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    /// Sets the handler run on every activation of this control. Replaces any
    /// handler set by an earlier call, so a control rebound after a re-render
    /// still toggles once per activation.
    fn on_activate(&self, handler: ActivateHandler<Self>);
}

impl ToggleControl for Element {
    fn favorite_id(&self) -> Option<FavoriteId> {
        self.attr(FAVORITE_ID_ATTR)
            .filter(|id| !id.is_empty())
            .map(FavoriteId::from)
    }

    fn label(&self) -> String {
        self.text()
    }

    fn set_label(&self, label: &str) {
        self.set_text(label);
    }

    fn on_activate(&self, handler: ActivateHandler<Self>) {
        // The handler gets the target from the event, so the element never holds a handle to itself.
        self.set_onclick(move |ev| handler(ev, ev.target()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_reads_id_from_data_attribute() {
        let button = Element::new("button").with_attr(FAVORITE_ID_ATTR, "abraka");
        assert_eq!(button.favorite_id(), Some(FavoriteId::from("abraka")));

        assert_eq!(Element::new("button").favorite_id(), None);
        assert_eq!(
            Element::new("button").with_attr(FAVORITE_ID_ATTR, "").favorite_id(),
            None
        );
    }

    #[test]
    fn activation_handler_is_replaced_not_stacked() {
        use std::cell::Cell;
        use std::rc::Rc;

        let button = Element::new("button").with_attr(FAVORITE_ID_ATTR, "abraka");
        let calls = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let calls = calls.clone();
            button.on_activate(Box::new(move |_: &ClickEvent, _: &Element| calls.set(calls.get() + 1)));
        }

        button.click();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn labels_round_trip_through_state() {
        let labels = FavoriteLabels::default();
        for state in [FavoriteState::Favorited, FavoriteState::NotFavorited] {
            assert_eq!(labels.state_of(state.label(&labels)), Some(state));
        }
        assert_eq!(labels.state_of(""), None);
    }
}
