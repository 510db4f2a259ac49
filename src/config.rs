use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Flat-file storage locations, all relative to `data_dir`
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_campground_file")]
    pub campground_file: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_bookings_file")]
    pub bookings_file: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl StorageSettings {
    pub fn campground_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.campground_file)
    }

    pub fn users_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.users_file)
    }

    pub fn bookings_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.bookings_file)
    }

    pub fn log_dir_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.log_dir)
    }
}

fn default_data_dir() -> String { "data".to_string() }
fn default_campground_file() -> String { "campground.json".to_string() }
fn default_users_file() -> String { "users.json".to_string() }
fn default_bookings_file() -> String { "bookings.json".to_string() }
fn default_log_dir() -> String { "logs".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Drop campgrounds with conflicting bookings from recommendations.
    /// Off by default: only the booking step enforces availability.
    #[serde(default)]
    pub exclude_unavailable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub profile: ScoringProfile,
}

/// Named scoring weight profiles
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringProfile {
    #[default]
    Standard,
    LocationHeavy,
}

impl ScoringProfile {
    pub fn weights(self) -> ScoringWeights {
        match self {
            ScoringProfile::Standard => ScoringWeights::default(),
            ScoringProfile::LocationHeavy => ScoringWeights::location_heavy(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPSCOUT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. CAMPSCOUT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAMPSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAMPSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
