//! Local persistence for the campaign form.
//!
//! Everything goes through the [`KeyValueStore`] trait: the browser's
//! `localStorage` on wasm, a small JSON file under the platform data
//! directory on native, and [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::counters::{CampaignCounters, CampaignType};

pub const COUNTERS_KEY: &str = "adgauge.counters";
pub const CAMPAIGN_TYPE_KEY: &str = "adgauge.campaign_type";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat text store addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// What a previous session left behind. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredCampaign {
    pub counters: Option<CampaignCounters>,
    pub campaign_type: Option<CampaignType>,
}

/// Read both keys. Unreadable or malformed entries load as absent.
pub fn load_campaign(store: &dyn KeyValueStore) -> StoredCampaign {
    let counters = match store.get(COUNTERS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<CampaignCounters>(&raw) {
            Ok(counters) => Some(counters),
            Err(err) => {
                tracing::warn!("ignoring stored counters ({err})");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!("couldn't read stored counters: {err}");
            None
        }
    };

    let campaign_type = match store.get(CAMPAIGN_TYPE_KEY) {
        Ok(Some(raw)) => raw.parse::<CampaignType>().ok(),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!("couldn't read stored campaign type: {err}");
            None
        }
    };

    StoredCampaign {
        counters,
        campaign_type,
    }
}

pub fn save_campaign(
    store: &dyn KeyValueStore,
    counters: &CampaignCounters,
    campaign_type: CampaignType,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(counters)?;
    store.set(COUNTERS_KEY, &payload)?;
    store.set(CAMPAIGN_TYPE_KEY, campaign_type.as_str())
}

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("unable to read `{key}`")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write(format!("unable to write `{key}`")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{KeyValueStore, StorageError};

    const STORE_FILENAME: &str = "storage.json";

    /// JSON object on disk, rewritten in full on every `set`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/storage.json` for the current user.
        pub fn in_data_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "AdGauge", "AdGauge").ok_or_else(
                || StorageError::Unavailable("unable to determine data directory".into()),
            )?;
            Ok(Self::new(dirs.data_dir().join(STORE_FILENAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            // Corrupt contents are discarded on write.
            let mut entries = self.read_all().unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

/// Platform default store, falling back to memory when the real backend is
/// unavailable.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_data_dir() {
            Ok(store) => {
                tracing::debug!("campaign storage at {}", store.path().display());
                Rc::new(store)
            }
            Err(err) => {
                tracing::warn!("{err}; campaign data will not survive restarts");
                Rc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert_eq!(load_campaign(&store), StoredCampaign::default());
    }

    #[test]
    fn save_then_load_restores_both_keys() {
        let store = MemoryStore::new();
        let counters = CampaignCounters {
            reach: "900".into(),
            cost: "12.5".into(),
            ..Default::default()
        };
        save_campaign(&store, &counters, CampaignType::Leads).expect("memory write");

        let entries = store.snapshot();
        assert_eq!(entries.get(CAMPAIGN_TYPE_KEY).map(String::as_str), Some("leads"));
        assert!(entries.contains_key(COUNTERS_KEY));

        let loaded = load_campaign(&store);
        assert_eq!(loaded.counters, Some(counters));
        assert_eq!(loaded.campaign_type, Some(CampaignType::Leads));
    }

    #[test]
    fn malformed_entries_load_as_absent() {
        let store = MemoryStore::new();
        store.set(COUNTERS_KEY, "{not json").unwrap();
        store.set(CAMPAIGN_TYPE_KEY, "billboards").unwrap();
        assert_eq!(load_campaign(&store), StoredCampaign::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("storage.json");

        let first = FileStore::new(&path);
        save_campaign(&first, &CampaignCounters::default(), CampaignType::Video).unwrap();

        let second = FileStore::new(&path);
        let loaded = load_campaign(&second);
        assert_eq!(loaded.campaign_type, Some(CampaignType::Video));
        assert_eq!(loaded.counters, Some(CampaignCounters::default()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get(COUNTERS_KEY).is_err());
        store.set(CAMPAIGN_TYPE_KEY, "sales").unwrap();
        assert_eq!(store.get(CAMPAIGN_TYPE_KEY).unwrap().as_deref(), Some("sales"));
    }
}
