use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, SiteError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 2] = ["_config.yml", "_config.yaml"];

/// Load site configuration from the project root.
///
/// A missing config file means pure defaults; a file that exists but cannot
/// be read or parsed is fatal.
pub fn load_config<P: AsRef<Path>>(project_root: P, config_file: Option<&Path>) -> BoxResult<Config> {
    let config_path = match config_file {
        Some(path) => {
            if !path.is_file() {
                return Err(SiteError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path.to_path_buf())
        }
        None => find_default_config_file(&project_root),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file under the project root
fn find_default_config_file<P: AsRef<Path>>(project_root: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| project_root.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Parse a YAML configuration file
fn parse_config_file(path: &Path) -> BoxResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        SiteError::Config(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = serde_yaml::from_str(&content).map_err(|e| {
        SiteError::Config(format!(
            "failed to parse configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(config)
}
