use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::area::StorageArea;

/// In‑memory storage (no persistence). Used in tests and when no database is configured.
#[derive(Default)]
pub struct InMemoryStorageArea {
    map: Mutex<HashMap<String, String>>,
}

impl InMemoryStorageArea {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for InMemoryStorageArea {
    fn get_item(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .lock()
            .map_err(|_| anyhow::anyhow!("storage lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.map
            .lock()
            .map_err(|_| anyhow::anyhow!("storage lock poisoned"))?
            .remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.map
            .lock()
            .map_err(|_| anyhow::anyhow!("storage lock poisoned"))?
            .clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.map.lock().map(|m| m.len()).unwrap_or(0)
    }

    fn keys(&self) -> Vec<String> {
        let mut v: Vec<String> = match self.map.lock() {
            Ok(m) => m.keys().cloned().collect(),
            Err(_) => return vec![],
        };
        v.sort_unstable();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageHandle;
    use std::sync::Arc;

    #[test]
    fn shared_handle_sees_writes_from_other_holder() {
        let area: StorageHandle = Arc::new(InMemoryStorageArea::new());
        let other = area.clone();

        area.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").as_deref(), Some("v"));

        other.remove_item("k").unwrap();
        assert!(area.get_item("k").is_none());
    }

    #[test]
    fn separate_areas_are_isolated() {
        let a = InMemoryStorageArea::new();
        let b = InMemoryStorageArea::new();

        a.set_item("k", "v").unwrap();
        assert!(b.get_item("k").is_none());
        assert_eq!(b.len(), 0);
    }
}
