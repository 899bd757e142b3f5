//! TOML-based application configuration.
//!
//! Stores the channel identity, the tracked team, fetch-window settings
//! and filler branding. Stored at `~/.config/puckguide/config.toml`; the
//! defaults reproduce a working Tampa Bay Lightning setup so a fresh
//! install builds a usable guide with no editing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Returns `~/.config/puckguide[-dev]/` based on PUCKGUIDE_ENV.
///
/// Set PUCKGUIDE_ENV=dev to use a separate development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PUCKGUIDE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("puckguide-dev")
    } else {
        base_dir.join("puckguide")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Channel identity emitted in the guide header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default = "default_channel_id")]
    pub id: String,
    #[serde(default = "default_channel_name")]
    pub name: String,
    #[serde(default = "default_channel_icon")]
    pub icon: Option<String>,
    #[serde(default = "default_channel_url")]
    pub url: Option<String>,
}

/// The tracked team and its display titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Numeric team id as used by the schedule API
    #[serde(default = "default_team_id")]
    pub id: u32,
    #[serde(default = "default_title_en")]
    pub title_en: String,
    #[serde(default = "default_title_fr")]
    pub title_fr: Option<String>,
}

/// Fetch-window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Filler-block branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerConfig {
    #[serde(default = "default_filler_title")]
    pub title: String,
    #[serde(default = "default_filler_image")]
    pub image: Option<String>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    /// Optional artwork side-table CSV
    #[serde(default)]
    pub artwork_csv: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/puckguide/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub team: TeamConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub filler: FillerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// Default functions
fn default_channel_id() -> String {
    "the-spot-tbl".into()
}
fn default_channel_name() -> String {
    "Tampa Bay Lightning on The Spot".into()
}
fn default_channel_icon() -> Option<String> {
    Some("https://assets.nhle.com/logos/nhl/svg/TBL_dark.svg".into())
}
fn default_channel_url() -> Option<String> {
    Some("https://www.nhl.com/lightning/schedule".into())
}
fn default_team_id() -> u32 {
    14
}
fn default_title_en() -> String {
    "Tampa Bay Lightning".into()
}
fn default_title_fr() -> Option<String> {
    Some("Lightning de Tampa Bay".into())
}
fn default_weeks() -> u32 {
    2
}
fn default_base_url() -> String {
    "https://api-web.nhle.com".into()
}
fn default_filler_title() -> String {
    "Tampa Bumper".into()
}
fn default_filler_image() -> Option<String> {
    Some("https://github.com/shayypy/boltsguide/raw/refs/heads/main/images/vasy.jpg".into())
}
fn default_output_path() -> String {
    "guide.xml".into()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            id: default_channel_id(),
            name: default_channel_name(),
            icon: default_channel_icon(),
            url: default_channel_url(),
        }
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            id: default_team_id(),
            title_en: default_title_en(),
            title_fr: default_title_fr(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
            base_url: default_base_url(),
        }
    }
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            title: default_filler_title(),
            image: default_filler_image(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            artwork_csv: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default(),
            team: TeamConfig::default(),
            fetch: FetchConfig::default(),
            filler: FillerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/puckguide"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk or fall back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/puckguide"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Read a value by dotted path, e.g. `fetch.weeks`.
    pub fn get(&self, key: &str) -> Result<serde_json::Value, ConfigError> {
        let root = serde_json::to_value(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        let mut current = &root;
        for part in key.split('.') {
            current = current
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(current.clone())
    }

    /// Set a value by dotted path. The new value must parse as the same
    /// JSON type as the existing one (strings are taken verbatim).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        {
            let mut current = &mut root;
            let mut parts = key.split('.').peekable();
            loop {
                let part = parts.next().ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let is_leaf = parts.peek().is_none();
                if is_leaf {
                    let obj = current
                        .as_object_mut()
                        .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                    let existing = obj
                        .get(part)
                        .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                    let new_value = match existing {
                        serde_json::Value::Bool(_) => serde_json::Value::Bool(
                            value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as bool"),
                            })?,
                        ),
                        serde_json::Value::Number(_) => serde_json::Value::Number(
                            value.parse::<u64>().map(Into::into).map_err(|_| {
                                ConfigError::InvalidValue {
                                    key: key.to_string(),
                                    message: format!("cannot parse '{value}' as number"),
                                }
                            })?,
                        ),
                        _ => serde_json::Value::String(value.to_string()),
                    };
                    obj.insert(part.to_string(), new_value);
                    break;
                }
                current = current
                    .get_mut(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            }
        }

        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
