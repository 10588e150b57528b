use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::errors::ConfigError;
use crate::tracker::projection::{FilterKey, SortKey};
use crate::utils::paths;

const TMP_SUFFIX: &str = "tmp";

/// User preferences. Expense data is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_sort: SortKey,
    pub default_filter: FilterKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub auto_list: bool,
    pub high_contrast: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Date,
            default_filter: FilterKey::All,
            export_dir: None,
            auto_list: false,
            high_contrast: false,
            quiet: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 6] = [
        "default_sort",
        "default_filter",
        "export_dir",
        "auto_list",
        "high_contrast",
        "quiet",
    ];

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "default_sort" => match SortKey::from_option(value) {
                SortKey::Insertion if !value.eq_ignore_ascii_case("insertion") => {
                    return Err(invalid())
                }
                sort => self.default_sort = sort,
            },
            "default_filter" => self.default_filter = value.parse().map_err(|_| invalid())?,
            "export_dir" => {
                self.export_dir = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "auto_list" => self.auto_list = parse_flag(value).ok_or_else(invalid)?,
            "high_contrast" => self.high_contrast = parse_flag(value).ok_or_else(invalid)?,
            "quiet" => self.quiet = parse_flag(value).ok_or_else(invalid)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default_sort", self.default_sort.to_string()),
            ("default_filter", self.default_filter.to_string()),
            (
                "export_dir",
                self.export_dir
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(current directory)".into()),
            ),
            ("auto_list", self.auto_list.to_string()),
            ("high_contrast", self.high_contrast.to_string()),
            ("quiet", self.quiet.to_string()),
        ]
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = paths::config_dir_in(&base);
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            debug!(path = %self.path.display(), "loading config");
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn set_validates_keys_and_values() {
        let mut config = Config::default();
        config.set("default_sort", "amount").unwrap();
        config.set("default_filter", "credit").unwrap();
        config.set("auto_list", "on").unwrap();
        assert_eq!(config.default_sort, SortKey::Amount);
        assert_eq!(config.default_filter, FilterKey::Credit);
        assert!(config.auto_list);

        assert!(matches!(
            config.set("default_sort", "colour"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("currency", "EUR"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{ "default_filter": "debit" }"#).unwrap();
        assert_eq!(config.default_filter, FilterKey::Debit);
        assert_eq!(config.default_sort, SortKey::Date);
    }
}
