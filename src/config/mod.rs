use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_REJECT_MESSAGE: &str = "Log Out time must be later than Log In time!";

/// Element ids of the guarded form and the message shown on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date_field")]
    pub date_field: String,
    #[serde(default = "default_login_field")]
    pub login_field: String,
    #[serde(default = "default_logout_field")]
    pub logout_field: String,
    #[serde(default = "default_reject_message")]
    pub reject_message: String,
}

fn default_date_field() -> String {
    "date".to_string()
}
fn default_login_field() -> String {
    "login-time".to_string()
}
fn default_logout_field() -> String {
    "logout-time".to_string()
}
fn default_reject_message() -> String {
    DEFAULT_REJECT_MESSAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_field: default_date_field(),
            login_field: default_login_field(),
            logout_field: default_logout_field(),
            reject_message: default_reject_message(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimeguard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeguard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeguard.conf")
    }

    /// Load the default config file, or defaults if it does not exist
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Empty ids or message would leave the guard pointing at nothing.
    pub fn validate(&self) -> AppResult<()> {
        for (key, value) in [
            ("date_field", &self.date_field),
            ("login_field", &self.login_field),
            ("logout_field", &self.logout_field),
            ("reject_message", &self.reject_message),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`, creating parent dirs.
    pub fn init_at(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let mut file = fs::File::create(path)?;
        file.write_all(config.to_yaml()?.as_bytes())?;
        Ok(config)
    }
}
