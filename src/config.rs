//! Host-supplied configuration.
//!
//! The host passes a JSON object to [`create_app`](crate::create_app). Every field is
//! optional:
//!
//! ```json
//! {
//!   "db_name": "workout_checklist",
//!   "max_sets": 5,
//!   "profile": { "name": "Sam", "photo_url": null, "streak": 7 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::line_item::DEFAULT_MAX_SETS;

pub const DEFAULT_DB_NAME: &str = "workout_checklist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database name; the LMDB environment lives in `<db_name>.lmdb/`.
    pub db_name: String,

    pub max_sets: u32,

    pub profile: Profile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_name: DEFAULT_DB_NAME.to_string(),
            max_sets: DEFAULT_MAX_SETS,
            profile: Profile::default(),
        }
    }
}

impl AppConfig {
    /// Parses and checks a config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = if json.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_name.trim().is_empty() {
            return Err(ConfigError::Invalid("db_name must not be empty".to_string()));
        }
        if self.max_sets == 0 {
            return Err(ConfigError::Invalid("max_sets must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// The signed-in user shown in the app header. Owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub photo_url: Option<String>,
    pub streak: u32,
}
