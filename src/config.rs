//! Server configuration, stored per platform.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "songboard.server_config";

const FALLBACK_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ServerConfig {
    /// Read the stored configuration, falling back to the platform default.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match LocalStorage::get(CONFIG_KEY) {
            Ok(config) => config,
            Err(_) => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("ignoring unreadable config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                let config = Self::default();
                config.write_to(&path);
                config
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_to(&self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(raw) = serde_json::to_string_pretty(self) {
            if std::fs::write(path, raw).is_ok() {
                tracing::info!("wrote default config to {}", path.display());
            }
        }
    }
}

// On web the client targets whatever origin served it.
#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    FALLBACK_BASE_URL.to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn config_file_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("songboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_somewhere() {
        assert!(!ServerConfig::default().base_url.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let config = ServerConfig {
            base_url: "https://music.example.net".into(),
        };
        let raw = serde_json::to_string(&config).unwrap();
        let back: ServerConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }
}
