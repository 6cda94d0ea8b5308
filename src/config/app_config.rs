use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_PATH};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    #[serde(default = "app_config_default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "app_config_default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

pub fn app_config_default_database_path() -> PathBuf {
    DEFAULT_DATABASE_PATH.into()
}

pub fn app_config_default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: DEFAULT_DATABASE_PATH.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
