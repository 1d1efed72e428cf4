//! Application configuration.

use crate::consts::cli_consts::APP_DIR_NAME;
use crate::records::Period;
use serde::{Deserialize, Serialize};
use std::io::{Error, ErrorKind};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Paint the dashboard background instead of using the terminal's own.
    pub with_background_color: bool,
    /// Period the sales chart shows at startup.
    pub default_period: Period,
}

/// Returns the path of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, Error> {
    let home_path = home::home_dir().ok_or(Error::new(
        ErrorKind::NotFound,
        "Failed to determine home directory",
    ))?;
    Ok(home_path.join(APP_DIR_NAME).join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let buf = fs::read(path)?;
        let config: Config =
            serde_json::from_slice(&buf).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn month_config() -> Config {
        Config {
            with_background_color: true,
            default_period: Period::Month,
        }
    }

    #[test]
    // Loading a written configuration file should return the same configuration.
    fn test_load_recovers_written_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = month_config();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Values present in the file override the defaults.
    fn test_load_reads_every_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"with_background_color": true, "default_period": "month"}"#,
        )
        .unwrap();

        assert_eq!(Config::load_or_default(&path).unwrap(), month_config());
    }

    #[test]
    // A missing file yields defaults; missing fields fall back individually.
    fn test_missing_file_and_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        fs::write(&path, r#"{"default_period": "year"}"#).unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.default_period, Period::Year);
        assert!(!config.with_background_color);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }
}
