// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod state;

use std::{fs, io, path::Path};

use crate::error::ConfigError;
use options::AppOptions;

/// Read options from a TOML file. A missing file means "all defaults";
/// any other read or parse failure is reported.
pub fn load_options(path: &Path) -> Result<AppOptions, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(AppOptions::default());
        }
        Err(source) => {
            return Err(ConfigError::Io { path: path.to_path_buf(), source });
        }
    };

    let opts: AppOptions = toml::from_str(&text)?;
    logf!("Config: loaded {}", path.display());
    Ok(opts)
}
