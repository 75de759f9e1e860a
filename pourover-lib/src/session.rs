use tracing::debug;

use crate::{
    Result,
    form::{Action, BrewForm, Message},
    repository::{CoffeeProfile, FileStore, KeyValueStore, ProfileStore, config::FormDefaults},
};

/// A brew form bound to a profile store.
///
/// Profiles are loaded once when the session starts. Saving appends to the in-memory list and
/// the store persists it in one go, so the two never drift apart.
#[derive(Debug)]
pub struct Session<S = FileStore> {
    store: ProfileStore<S>,
    form: BrewForm,
    profiles: Vec<CoffeeProfile>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: ProfileStore<S>, defaults: &FormDefaults) -> Self {
        let profiles = store.load();

        debug!("Loaded {} saved profiles", profiles.len());

        Self {
            store,
            form: BrewForm::new(defaults),
            profiles,
        }
    }

    pub fn update(&mut self, message: Message) -> Result<()> {
        match self.form.update(message) {
            Action::None => Ok(()),
            Action::Save(profile) => {
                self.profiles = self.store.append(&self.profiles, profile)?;
                self.form.clear_name();
                Ok(())
            }
        }
    }

    pub fn form(&self) -> &BrewForm {
        &self.form
    }

    pub fn profiles(&self) -> &[CoffeeProfile] {
        &self.profiles
    }
}
