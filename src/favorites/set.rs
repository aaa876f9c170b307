use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of a content item, assigned by the content catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(String);

impl FavoriteId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FavoriteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FavoriteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for FavoriteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of favorite ids in which no id appears twice.
///
/// Insertion order is kept for the persisted form only. Two sets compare equal
/// when they hold the same ids, in any order.
#[derive(Clone, Debug, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    ids: Vec<FavoriteId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &FavoriteId) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteId> {
        self.ids.iter()
    }

    /// Removes `id` if present, appends it otherwise. Returns whether `id` is now a member.
    pub(crate) fn toggle(&mut self, id: &FavoriteId) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }
}

impl PartialEq for FavoritesSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

/// Collects ids, keeping the first occurrence of each.
impl FromIterator<FavoriteId> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = FavoriteId>>(iter: I) -> Self {
        let mut set = FavoritesSet::new();
        for id in iter {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a FavoritesSet {
    type Item = &'a FavoriteId;
    type IntoIter = std::slice::Iter<'a, FavoriteId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Parses a persisted set. Never fails: absent, corrupt or foreign data yields
/// an empty set, and repeated ids are collapsed.
pub fn parse_or_default(raw: Option<&str>) -> FavoritesSet {
    let Some(raw) = raw else {
        return FavoritesSet::new();
    };

    match serde_json::from_str::<Vec<FavoriteId>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            log::warn!("Ignoring unreadable favorites data: {}", e);
            FavoritesSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &FavoritesSet) -> Vec<&str> {
        set.iter().map(|i| i.as_str()).collect()
    }

    #[test]
    fn absent_value_is_empty() {
        assert!(parse_or_default(None).is_empty());
    }

    #[test]
    fn corrupt_or_foreign_values_are_empty() {
        for raw in ["", "not json", "{\"a\":1}", "null", "[1,2,3]", "[\"a\",", "\"abraka\""] {
            assert!(parse_or_default(Some(raw)).is_empty(), "input {raw:?}");
        }
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let set = parse_or_default(Some("[\"banga\",\"abraka\",\"banga\"]"));
        assert_eq!(ids(&set), vec!["banga", "abraka"]);
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut set: FavoritesSet = ["abraka", "banga"].into_iter().map(FavoriteId::from).collect();
        let id = FavoriteId::from("warri-palace");

        assert!(set.toggle(&id));
        assert_eq!(ids(&set), vec!["abraka", "banga", "warri-palace"]);

        assert!(!set.toggle(&FavoriteId::from("abraka")));
        assert_eq!(ids(&set), vec!["banga", "warri-palace"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: FavoritesSet = ["x", "y"].into_iter().map(FavoriteId::from).collect();
        let b: FavoritesSet = ["y", "x"].into_iter().map(FavoriteId::from).collect();
        let c: FavoritesSet = ["x"].into_iter().map(FavoriteId::from).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_as_plain_string_array() {
        let set: FavoritesSet = ["abraka", "banga"].into_iter().map(FavoriteId::from).collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[\"abraka\",\"banga\"]");
    }
}
