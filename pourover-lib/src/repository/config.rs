use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    Result,
    fs::{config_dir, data_dir},
};

const FILE_NAME: &str = "pourover.toml";

/// The core configuration, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Where saved profiles are kept. Defaults to the XDG data directory.
    pub data_dir: Option<PathBuf>,
    pub form: FormDefaults,
}

/// Starting values of the brew form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub temperature: f64,
    pub grind_size: f64,
    /// Resolution of the grind size control
    pub grind_step: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            temperature: 90.0,
            grind_size: 0.0,
            grind_step: 0.1,
        }
    }
}

impl CoreConfig {
    /// Read the configuration file, writing one with default values if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring invalid configuration {}: {err}", path.display());
                Self::default()
            }))
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(config_dir()?.join(FILE_NAME), contents)?;

        Ok(())
    }

    /// The directory profiles are stored in.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_dir(),
        }
    }

    #[cfg(test)]
    /// Return a configuration that never touches the user's directories.
    pub(crate) fn mock(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Some(data_dir),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_file() {
        let cfg: CoreConfig = toml::from_str("[form]\ntemperature = 94.0\n").unwrap();

        assert_eq!(cfg.data_dir, None);
        assert_eq!(cfg.form.temperature, 94.0);
        assert_eq!(cfg.form.grind_step, 0.1);
    }

    #[test]
    fn test_round_trip() {
        let cfg = CoreConfig::mock(PathBuf::from("/tmp/pourover"));
        let contents = toml::to_string_pretty(&cfg).unwrap();

        assert_eq!(toml::from_str::<CoreConfig>(&contents).unwrap(), cfg);
    }

    #[test]
    fn test_data_dir_override() {
        let cfg = CoreConfig::mock(PathBuf::from("/srv/coffee"));

        assert_eq!(cfg.data_dir().unwrap(), PathBuf::from("/srv/coffee"));
    }
}
