use std::{fs::create_dir_all, path::PathBuf};

use xdg::BaseDirectories;

use crate::{Error, Result};

/// Returns the path to the Pour Over configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> Result<PathBuf> {
    let path = xdg_prefix().get_config_home().ok_or(Error::NoHome)?;

    create_dir_all(&path)?;

    Ok(path)
}

/// Returns the path to the Pour Over data directory. If it doesn't exist when this function is
/// called, it will be created.
///
/// Saved profiles live here unless the configuration points somewhere else.
pub fn data_dir() -> Result<PathBuf> {
    let path = xdg_prefix().get_data_home().ok_or(Error::NoHome)?;

    create_dir_all(&path)?;

    Ok(path)
}

fn xdg_prefix() -> BaseDirectories {
    xdg::BaseDirectories::with_prefix("pourover")
}
