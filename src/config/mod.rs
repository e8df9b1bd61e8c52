// Configuration management for pideo
// Two flat JSON documents next to the executable: param.json for settings,
// secret.json for bus credentials. Both are optional; every field has a default.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "param.json";
pub const SECRETS_FILE: &str = "secret.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub mqtt_server: Option<String>,
    #[serde(default = "default_mqtt_port")]
    pub mqtt_port: u16,
    pub mqtt_topic: Option<String>,
    /// Shell command run per video; `{video_path}` expands to the resolved path.
    #[serde(default = "default_player_cmd")]
    pub player_cmd: String,
    #[serde(default = "default_videos_dir")]
    pub videos_dir: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    pub mqtt_username: Option<String>,
    pub mqtt_password: Option<String>,
}

fn default_mqtt_port() -> u16 {
    1883
}

fn default_player_cmd() -> String {
    // Streams the file through ffmpeg and discards the output - a "play" that
    // works headless. Real deployments override this with their player.
    "ffmpeg -re -i '{video_path}' -f null -".to_string()
}

fn default_videos_dir() -> String {
    "videos".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mqtt_server: None,
            mqtt_port: default_mqtt_port(),
            mqtt_topic: None,
            player_cmd: default_player_cmd(),
            videos_dir: default_videos_dir(),
        }
    }
}

/// Load a JSON document into any deserializable type. Callers decide what a
/// missing or malformed file means - here that is always "log once, use the
/// default".
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Missing(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mqtt_port, 1883);
        assert_eq!(config.videos_dir, "videos");
        assert!(config.mqtt_server.is_none());
        assert!(config.player_cmd.contains("{video_path}"));
    }

    #[test]
    fn test_load_full_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("param.json");
        fs::write(
            &path,
            r#"{"mqtt_server": "broker.local", "mqtt_port": 8883, "mqtt_topic": "pideo/playing", "videos_dir": "clips"}"#,
        )
        .unwrap();

        let config: Config = load_document(&path).unwrap();
        assert_eq!(config.mqtt_server.as_deref(), Some("broker.local"));
        assert_eq!(config.mqtt_port, 8883);
        assert_eq!(config.mqtt_topic.as_deref(), Some("pideo/playing"));
        assert_eq!(config.videos_dir, "clips");
    }

    #[test]
    fn test_partial_document_falls_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("param.json");
        fs::write(&path, r#"{"mqtt_server": "broker.local"}"#).unwrap();

        let config: Config = load_document(&path).unwrap();
        assert_eq!(config.mqtt_server.as_deref(), Some("broker.local"));
        assert_eq!(config.mqtt_port, 1883);
        assert_eq!(config.videos_dir, "videos");
    }

    #[test]
    fn test_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Config, _> = load_document(&dir.path().join("param.json"));
        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("param.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Config, _> = load_document(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_secrets_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(&path, r#"{"mqtt_username": "pi", "mqtt_password": "hunter2"}"#).unwrap();

        let secrets: Secrets = load_document(&path).unwrap();
        assert_eq!(secrets.mqtt_username.as_deref(), Some("pi"));
        assert_eq!(secrets.mqtt_password.as_deref(), Some("hunter2"));
    }
}
