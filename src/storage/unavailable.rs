use anyhow::{bail, Result};

use crate::storage::area::StorageArea;

/// Storage that cannot be used, as when the user agent disables local storage
/// or the quota is exhausted. Reads find nothing and writes fail.
#[derive(Debug, Default)]
pub struct UnavailableStorageArea;

impl UnavailableStorageArea {
    pub fn new() -> Self {
        Self
    }
}

impl StorageArea for UnavailableStorageArea {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<()> {
        bail!("storage unavailable: cannot write '{key}'")
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        bail!("storage unavailable: cannot remove '{key}'")
    }

    fn clear(&self) -> Result<()> {
        bail!("storage unavailable: cannot clear")
    }

    fn len(&self) -> usize {
        0
    }

    fn keys(&self) -> Vec<String> {
        vec![]
    }
}
