//! TOML-based application configuration.
//!
//! Stores:
//! - Credentials for the suggestion adapters (music, workout, creative)
//! - Web surface bind settings and development mode
//! - The image used by the "Image Focus Analysis" menu option
//!
//! Configuration is stored at `~/.config/unplug/config.toml`. Environment
//! variables (`SPOTIFY_API_KEY`, `FITBIT_API_KEY`, `OPENAI_API_KEY`, `PORT`,
//! `UNPLUG_ENV`/`FLASK_ENV`) are layered on top by [`Config::apply_env`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Credential strings for the external suggestion adapters.
///
/// An empty string means "not configured".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub spotify: String,
    #[serde(default)]
    pub fitbit: String,
    #[serde(default)]
    pub openai: String,
}

/// Web surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Development mode: default port regardless of `PORT`, request tracing.
    #[serde(default)]
    pub dev_mode: bool,
}

/// Interactive session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Image analysed by menu option 7.
    #[serde(default = "default_image_path")]
    pub image_path: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/unplug/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

pub const DEFAULT_PORT: u16 = 5000;

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_image_path() -> String {
    "user_image.jpg".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dev_mode: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            image_path: default_image_path(),
        }
    }
}

const CREDENTIAL_KEYS: [&str; 3] = [
    "credentials.spotify",
    "credentials.fitbit",
    "credentials.openai",
];

/// Whether an environment value selects development mode.
pub fn is_development(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "dev" | "development")
}

/// Returns the configuration directory.
///
/// `UNPLUG_CONFIG_DIR` wins outright; otherwise `~/.config/unplug[-dev]/`
/// based on `UNPLUG_ENV`.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var("UNPLUG_CONFIG_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("UNPLUG_ENV").unwrap_or_default();
            if is_development(&env) {
                base_dir.join("unplug-dev")
            } else {
                base_dir.join("unplug")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// JSON pointer for a dotted key such as `server.port`. `None` when any
/// segment is empty.
fn key_pointer(key: &str) -> Option<String> {
    if key.split('.').any(str::is_empty) {
        return None;
    }
    Some(key.split('.').fold(String::new(), |mut pointer, segment| {
        pointer.push('/');
        pointer.push_str(segment);
        pointer
    }))
}

/// Replace the leaf at `key`, parsing `raw` as the type already stored there.
fn assign_by_key(root: &mut Value, key: &str, raw: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let pointer = key_pointer(key).ok_or_else(|| invalid("config key is empty".into()))?;
    let slot = root
        .pointer_mut(&pointer)
        .ok_or_else(|| invalid("unknown config key".into()))?;

    let replacement = match &*slot {
        Value::Bool(_) => Value::Bool(
            raw.parse()
                .map_err(|_| invalid(format!("expected true or false, got '{raw}'")))?,
        ),
        Value::Number(_) => Value::from(
            raw.parse::<u64>()
                .map_err(|_| invalid(format!("expected a whole number, got '{raw}'")))?,
        ),
        Value::Object(_) | Value::Array(_) => {
            return Err(invalid("a section cannot be set as a single value".into()))
        }
        _ => Value::String(raw.to_string()),
    };
    *slot = replacement;
    Ok(())
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults.
    ///
    /// A missing file is normal on first run. A broken file is logged and
    /// ignored so the interactive session can always start.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable config: {e}");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("no config directory available: {e}");
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Layer process environment variables on top of the file values.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Layer variables from an arbitrary lookup on top of the file values.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("SPOTIFY_API_KEY") {
            self.credentials.spotify = key;
        }
        if let Some(key) = lookup("FITBIT_API_KEY") {
            self.credentials.fitbit = key;
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.credentials.openai = key;
        }
        match lookup("PORT").map(|p| p.trim().parse::<u16>()) {
            Some(Ok(port)) => self.server.port = port,
            Some(Err(e)) => tracing::warn!("ignoring invalid PORT: {e}"),
            None => {}
        }
        let dev = ["UNPLUG_ENV", "FLASK_ENV"]
            .iter()
            .filter_map(|name| lookup(name))
            .any(|value| is_development(&value));
        if dev {
            self.server.dev_mode = true;
        }
        self
    }

    /// Address the web surface binds to.
    ///
    /// Development mode always uses the default port.
    pub fn bind_addr(&self) -> String {
        let port = if self.server.dev_mode {
            DEFAULT_PORT
        } else {
            self.server.port
        };
        format!("{}:{port}", self.server.host)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.pointer(&key_pointer(key)?)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Returns error if key is unknown or the
    /// value does not match the existing type. Does not save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        assign_by_key(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// JSON view with credential values masked.
    pub fn redacted(&self) -> Value {
        let mut json = serde_json::to_value(self).unwrap_or_default();
        for key in CREDENTIAL_KEYS {
            let Some((section, field)) = key.split_once('.') else {
                continue;
            };
            if let Some(slot) = json.get_mut(section).and_then(|s| s.get_mut(field)) {
                if slot.as_str().is_some_and(|s| !s.is_empty()) {
                    *slot = Value::String("***".into());
                }
            }
        }
        json
    }
}
