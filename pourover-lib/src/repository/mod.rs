use tracing::{debug, warn};

use crate::{Result, repository::config::CoreConfig};

mod backend;
mod profile;

pub mod config;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use profile::{CoffeeProfile, GRIND_SIZE_RANGE, TEMPERATURE_RANGE, TEMPERATURE_STEP};

/// Key the serialized profile list lives under.
pub const PROFILES_KEY: &str = "coffeeProfiles";

/// Central access point for saved profiles.
///
/// The whole list is kept as a single JSON array under [`PROFILES_KEY`]. Every write replaces
/// the stored list, and nothing ever edits or removes a profile once it has been saved.
#[derive(Clone, Debug)]
pub struct ProfileStore<S = FileStore> {
    backend: S,
}

impl ProfileStore<FileStore> {
    /// Open the file backed store in the configured data directory.
    pub fn open(cfg: &CoreConfig) -> Result<Self> {
        Ok(Self::new(FileStore::open(cfg.data_dir()?)?))
    }
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read every saved profile, in the order they were saved.
    ///
    /// Missing, unreadable or corrupt data is treated as "no profiles" rather than an error.
    pub fn load(&self) -> Vec<CoffeeProfile> {
        let raw = match self.backend.get(PROFILES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Failed to read saved profiles: {err}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("Discarding unreadable saved profiles: {err}");
            Vec::new()
        })
    }

    /// Append `profile` to `current` and persist the result.
    ///
    /// Returns the new list, which the caller should adopt in place of `current`.
    pub fn append(
        &self,
        current: &[CoffeeProfile],
        profile: CoffeeProfile,
    ) -> Result<Vec<CoffeeProfile>> {
        let mut profiles = Vec::with_capacity(current.len() + 1);
        profiles.extend_from_slice(current);
        profiles.push(profile);

        self.save(&profiles)?;

        debug!("Saved profile #{}", profiles.len());

        Ok(profiles)
    }

    /// Overwrite the stored list with `profiles`.
    pub fn save(&self, profiles: &[CoffeeProfile]) -> Result<()> {
        let contents = serde_json::to_string(profiles)?;
        self.backend.set(PROFILES_KEY, &contents)
    }
}

impl ProfileStore<MemoryStore> {
    #[cfg(test)]
    /// Return a store backed by a fresh in-memory map.
    pub(crate) fn mock() -> Self {
        Self::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        Error,
        suggestion::{SOUR_SUGGESTION, Taste},
    };

    fn ethiopia() -> CoffeeProfile {
        CoffeeProfile::new(90.0, 0.0, Taste::Bitter, "Ethiopia")
    }

    #[test]
    fn test_load_empty() {
        let store = ProfileStore::mock();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let store = ProfileStore::mock();

        let profiles = store.append(&store.load(), ethiopia()).unwrap();

        assert_eq!(profiles, vec![ethiopia()]);
        assert_eq!(store.load(), vec![ethiopia()]);
        assert_eq!(
            store.load().first().unwrap().suggestion(),
            "To make it less bitter, try coarsening the grind size or lowering the temperature."
        );
    }

    #[test]
    fn test_append_keeps_order() {
        let store = ProfileStore::mock();
        let first = ethiopia();
        let second = CoffeeProfile::new(95.0, 7.5, Taste::Sour, "Colombia");
        let third = CoffeeProfile::new(88.0, 2.0, Taste::Good, "");

        let mut profiles = store.load();
        for profile in [first.clone(), second.clone(), third.clone()] {
            let before = profiles.clone();
            profiles = store.append(&profiles, profile).unwrap();
            assert_eq!(profiles.get(..before.len()).unwrap(), before.as_slice());
        }

        assert_eq!(store.load(), vec![first, second.clone(), third]);
        assert_eq!(store.load().get(1).unwrap().suggestion(), SOUR_SUGGESTION);
    }

    #[test]
    fn test_duplicates_allowed() {
        let store = ProfileStore::mock();

        let profiles = store.append(&[], ethiopia()).unwrap();
        let profiles = store.append(&profiles, ethiopia()).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_load_is_stable() {
        let store = ProfileStore::mock();
        store.append(&[], ethiopia()).unwrap();

        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn test_load_corrupt() {
        let store = ProfileStore::mock();
        store.backend().set(PROFILES_KEY, "not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape() {
        let store = ProfileStore::mock();
        store
            .backend()
            .set(PROFILES_KEY, r#"{"temperature":90}"#)
            .unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_old_records() {
        let store = ProfileStore::mock();
        store
            .backend()
            .set(
                PROFILES_KEY,
                r#"[{"temperature":90,"grindSize":0,"taste":"bitter","coffeeName":"Ethiopia"},
                    {"grindSize":3,"taste":"","temperature":80}]"#,
            )
            .unwrap();

        let profiles = store.load();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles.first().unwrap().coffee_name(), "Ethiopia");
        assert_eq!(profiles.first().unwrap().suggestion(), "");
        assert_eq!(profiles.get(1).unwrap().coffee_name(), "");
        assert_eq!(profiles.get(1).unwrap().taste(), Taste::Unset);
    }

    #[test]
    fn test_append_overwrites_whole_list() {
        let store = ProfileStore::mock();
        store.backend().set(PROFILES_KEY, "not json").unwrap();

        store.append(&store.load(), ethiopia()).unwrap();

        let raw = store.backend().get(PROFILES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_file_backed() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CoreConfig::mock(dir.path().to_path_buf());

        let store = ProfileStore::open(&cfg).unwrap();
        store.append(&store.load(), ethiopia()).unwrap();

        let reopened = ProfileStore::open(&cfg).unwrap();
        assert_eq!(reopened.load(), vec![ethiopia()]);
    }

    #[test]
    fn test_file_backed_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(FileStore::open(dir.path()).unwrap());

        // A directory where the data file should be makes the final rename fail
        std::fs::create_dir(dir.path().join(format!("{PROFILES_KEY}.json"))).unwrap();

        assert!(matches!(store.append(&[], ethiopia()), Err(Error::Io(_))));
        assert!(store.load().is_empty());
    }
}
