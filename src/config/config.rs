use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::constants::CONFIG_FILE;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_token: Option<String>,
    pub default_owner: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if path.exists() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path().ok_or("Could not find home directory")?;

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;

    Ok(())
}

pub fn get_api_token() -> Result<String, Box<dyn std::error::Error>> {
    // Environment variable wins over the config file
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        return Ok(token);
    }

    let config = load_config();
    if let Some(token) = config.api_token {
        return Ok(token);
    }

    Err("No API token found. Set GITHUB_TOKEN environment variable or run 'ghp auth' to configure.".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = Config {
            api_token: Some("ghp_test".to_string()),
            default_owner: Some("acme".to_string()),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_token.as_deref(), Some("ghp_test"));
        assert_eq!(parsed.default_owner.as_deref(), Some("acme"));
    }

    #[test]
    fn test_config_tolerates_missing_keys() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_token.is_none());
        assert!(parsed.default_owner.is_none());
    }

    #[test]
    fn test_config_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"api_token":"ghp_abc","default_owner":null}"#).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.api_token.as_deref(), Some("ghp_abc"));
    }
}
