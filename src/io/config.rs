//! Chart settings on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::ChartConfig;

/// Environment variable pointing at an alternative settings file.
pub const CONFIG_ENV: &str = "GANTTR_CONFIG";

const CONFIG_FILE: &str = "chart.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the settings file lives: `$GANTTR_CONFIG`, else the OS config dir.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    match directories::ProjectDirs::from("", "", "Ganttr") {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE),
        None => PathBuf::from(".").join(CONFIG_FILE),
    }
}

/// Load chart settings from `path`.
///
/// A missing file yields the defaults and writes them out as a reference
/// the user can edit. A file that exists but does not parse is an error.
pub fn load_config(path: &Path) -> Result<ChartConfig, ConfigError> {
    if !path.exists() {
        let config = ChartConfig::default();
        write_reference(path, &config);
        return Ok(config);
    }

    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded chart settings");
    Ok(config)
}

fn write_reference(path: &Path, config: &ChartConfig) {
    let json = match serde_json::to_string_pretty(config) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("could not serialize default settings: {}", e);
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(
                path = %parent.display(),
                "could not create settings directory: {}",
                e
            );
            return;
        }
    }
    match std::fs::write(path, json) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default chart settings"),
        Err(e) => tracing::warn!(path = %path.display(), "could not write default settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults_and_writes_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = load_config(&path).unwrap();
        assert_eq!(config, ChartConfig::default());
        assert!(path.exists());

        // The reference file round-trips to the same defaults.
        assert_eq!(load_config(&path).unwrap(), ChartConfig::default());
    }

    #[test]
    fn reads_pixel_strings_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "width": "1200px", "height": "600px", "max_rows": 12 }"#)
            .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.width, 1200.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.max_rows, 12);
        assert_eq!(config.label_width, 200.0);
    }

    #[test]
    fn env_variable_overrides_config_location() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("elsewhere.json");
        let previous = std::env::var_os(CONFIG_ENV);

        std::env::set_var(CONFIG_ENV, &custom);
        let resolved = config_path();
        match previous {
            Some(value) => std::env::set_var(CONFIG_ENV, value),
            None => std::env::remove_var(CONFIG_ENV),
        }

        assert_eq!(resolved, custom);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
