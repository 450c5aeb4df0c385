//! Layered client configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! then `MEDIALOGGER_<SECTION>__<KEY>` environment variables. A `.env` file in
//! the working directory is loaded into the environment beforehand.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://medialogger-6jne.onrender.com";

/// Prefix of deep links that complete a social login
pub const DEFAULT_REDIRECT_PREFIX: &str = "medialoggermobile://success";

/// Auto-dismiss delay of a toast
pub const DEFAULT_TOAST_DISMISS_MS: u64 = 2500;

const CONFIG_FILE_ENV: &str = "MEDIALOGGER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "medialogger.toml";
const ENV_PREFIX: &str = "MEDIALOGGER";

/// Error raised while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub toast: ToastSettings,
    #[serde(default)]
    pub oauth: OAuthSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from `.env`, the configuration file and the environment.
    ///
    /// The file is taken from `MEDIALOGGER_CONFIG` when set, otherwise
    /// `medialogger.toml` in the working directory. A missing file is fine.
    pub fn load() -> Result<Self, SettingsError> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let file = std::env::var_os(CONFIG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::load_from(&file)
    }

    /// Load settings from a specific file plus the environment
    pub fn load_from(file: &Path) -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(file.to_path_buf()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
}

impl ApiSettings {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// JSON file holding the session token
    #[serde(default = "SessionSettings::default_store_path")]
    pub store_path: PathBuf,
}

impl SessionSettings {
    fn default_store_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".medialogger")
            .join("session.json")
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            store_path: Self::default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToastSettings {
    #[serde(default = "ToastSettings::default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

impl ToastSettings {
    fn default_dismiss_after_ms() -> u64 {
        DEFAULT_TOAST_DISMISS_MS
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: Self::default_dismiss_after_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthSettings {
    #[serde(default = "OAuthSettings::default_redirect_prefix")]
    pub redirect_prefix: String,
}

impl OAuthSettings {
    fn default_redirect_prefix() -> String {
        DEFAULT_REDIRECT_PREFIX.to_string()
    }
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            redirect_prefix: Self::default_redirect_prefix(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "LogSettings::default_filter")]
    pub filter: String,
}

impl LogSettings {
    fn default_filter() -> String {
        "warn".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}
