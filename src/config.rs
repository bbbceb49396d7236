use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DEFAULT_SEASON_START, Locale, MonthDay};

const CONFIG_PATH_ENV_VAR: &str = "SUNDAYS_CONFIG_FILE";
const APP_DIR: &str = "sundays";
const CONFIG_FILE: &str = "config.toml";
const HOME_CONFIG_FILE: &str = ".sundays.toml";

/// Error type for loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", .path.display())]
    Toml { path: PathBuf, source: toml::de::Error },

    #[error("Unable to find home directory")]
    NoHomeDirectory,
}

/// Settings of a schedule. Missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// First day Sundays are counted from
    pub season_start: CalendarDate,
    /// Yearly deadline the season runs up to
    pub target:       MonthDay,
    pub locale:       Locale,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            season_start: CalendarDate::from_naive(DEFAULT_SEASON_START),
            target: MonthDay::season_deadline(),
            locale: Locale::default(),
        }
    }
}

impl ScheduleConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns the TOML error for malformed documents or invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Toml` if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })
    }

    /// Loads `explicit` if given, otherwise the first existing file from
    /// [`find_config_locations`], otherwise the defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the chosen file cannot be read or parsed. An
    /// explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let locations = match find_config_locations() {
            Ok(locations) => locations,
            Err(ConfigError::NoHomeDirectory) => {
                warn!("No home directory, using default config");
                return Ok(Self::default());
            },
            Err(e) => return Err(e),
        };

        match locations.iter().find(|p| p.is_file()) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(path)
            },
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }
}

/// Candidate config files in search order: `$SUNDAYS_CONFIG_FILE`, then
/// `$XDG_CONFIG_HOME/sundays/config.toml` (or `~/.config/sundays/config.toml`),
/// then `~/.sundays.toml`.
///
/// # Errors
/// Returns `ConfigError::NoHomeDirectory` if `HOME` is unset.
pub fn find_config_locations() -> Result<Vec<PathBuf>, ConfigError> {
    let config_env = env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from);
    let home = env::var_os("HOME").map(PathBuf::from);
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    config_locations(config_env, home, xdg)
}

fn config_locations(
    config_env: Option<PathBuf>,
    home: Option<PathBuf>,
    xdg: Option<PathBuf>,
) -> Result<Vec<PathBuf>, ConfigError> {
    let home = home.ok_or(ConfigError::NoHomeDirectory)?;

    let config_xdg = xdg
        .unwrap_or_else(|| home.join(".config"))
        .join(APP_DIR)
        .join(CONFIG_FILE);
    let home_config = home.join(HOME_CONFIG_FILE);

    let mut locations = vec![config_xdg, home_config];
    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.season_start.to_string(), "2025-11-04");
        assert_eq!(config.target, MonthDay::new(2, 8).unwrap());
        assert_eq!(config.locale, Locale::Korean);
    }

    #[test]
    fn test_default_season_start_matches_from_ymd() {
        let expected = CalendarDate::from_ymd(2025, 11, 4).unwrap();
        assert_eq!(CalendarDate::from_naive(DEFAULT_SEASON_START), expected);
        assert_eq!(ScheduleConfig::default().season_start, expected);
    }

    #[test]
    fn test_from_toml_full() {
        let config = ScheduleConfig::from_toml_str(
            r#"
            season_start = "2024-12-01"
            target = "03-01"
            locale = "english"
            "#,
        )
        .unwrap();
        assert_eq!(config.season_start, CalendarDate::from_ymd(2024, 12, 1).unwrap());
        assert_eq!(config.target, MonthDay::new(3, 1).unwrap());
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = ScheduleConfig::from_toml_str(r#"season_start = "2024-12-01""#).unwrap();
        assert_eq!(config.target, MonthDay::season_deadline());
        assert_eq!(config.locale, Locale::Korean);

        let empty = ScheduleConfig::from_toml_str("").unwrap();
        assert_eq!(empty, ScheduleConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(ScheduleConfig::from_toml_str(r#"season_start = "2025-02-30""#).is_err());
        assert!(ScheduleConfig::from_toml_str(r#"target = "02-29""#).is_err());
        assert!(ScheduleConfig::from_toml_str(r#"locale = "french""#).is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_default() {
        let config = ScheduleConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ScheduleConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_file_missing() {
        let path = env::temp_dir().join("sundays-test-missing-config.toml");
        let result = ScheduleConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_file_reads_toml() {
        let path = env::temp_dir().join(format!("sundays-test-config-{}.toml", std::process::id()));
        fs::write(&path, "target = \"12-25\"\n").unwrap();

        let config = ScheduleConfig::load(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.target, MonthDay::new(12, 25).unwrap());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let path = env::temp_dir().join(format!("sundays-test-bad-config-{}.toml", std::process::id()));
        fs::write(&path, "season_start = ").unwrap();

        let result = ScheduleConfig::from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn test_config_locations_order() {
        let locations = config_locations(
            Some(PathBuf::from("/tmp/explicit.toml")),
            Some(PathBuf::from("/home/u")),
            None,
        )
        .unwrap();
        assert_eq!(
            locations,
            vec![
                PathBuf::from("/tmp/explicit.toml"),
                PathBuf::from("/home/u/.config/sundays/config.toml"),
                PathBuf::from("/home/u/.sundays.toml"),
            ]
        );
    }

    #[test]
    fn test_config_locations_xdg() {
        let locations = config_locations(
            None,
            Some(PathBuf::from("/home/u")),
            Some(PathBuf::from("/xdg")),
        )
        .unwrap();
        assert_eq!(locations[0], PathBuf::from("/xdg/sundays/config.toml"));
        assert_eq!(locations.len(), 2);
    }

    #[test]
    fn test_config_locations_without_home() {
        let result = config_locations(None, None, None);
        assert!(matches!(result, Err(ConfigError::NoHomeDirectory)));
    }
}
