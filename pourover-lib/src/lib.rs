//! Core library for Pour Over.
//!
//! Holds everything that isn't presentation: the taste suggestion rules, the
//! persistent profile store and its backing stores, the brew form state and
//! the configuration file.

use thiserror::Error;

pub mod form;
pub mod fs;
pub mod recipe;
pub mod repository;
pub mod session;
pub mod suggestion;

pub use form::BrewForm;
pub use recipe::Recipe;
pub use repository::{CoffeeProfile, FileStore, KeyValueStore, MemoryStore, ProfileStore};
pub use session::Session;
pub use suggestion::{Taste, suggest};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to locate the home directory")]
    NoHome,
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode profiles: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to encode configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
