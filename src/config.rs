// Configuration management

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::models::AppConfig;

pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("feedlens");

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    Ok(config_dir)
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the config file, writing out the defaults on first run.
pub fn load_config() -> Result<AppConfig> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        let default_config = AppConfig::default();
        save_config(&default_config)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(&config_path).context("Failed to read config file")?;

    let config: AppConfig = toml::from_str(&contents).context("Failed to parse config file")?;

    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    let config_path = get_config_path()?;

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&config_path, contents).context("Failed to write config file")?;

    Ok(())
}

/// The service credential is an opaque external dependency; it never lives
/// in the config file.
pub fn api_key_from_env() -> Result<String> {
    std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY environment variable is not set")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_config_creates_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();

        let original_home = std::env::var("HOME").ok();
        let original_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("HOME", temp_dir.path());
        std::env::remove_var("XDG_CONFIG_HOME");

        let config = load_config();

        if let Some(home) = &original_home {
            std::env::set_var("HOME", home);
        } else {
            std::env::remove_var("HOME");
        }
        if let Some(xdg) = &original_xdg {
            std::env::set_var("XDG_CONFIG_HOME", xdg);
        }

        let config = config.unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout, 120);
    }

    #[test]
    fn test_save_and_load_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = AppConfig {
            api_base_url: "http://localhost:9090".to_string(),
            model: "gemini-2.0-pro".to_string(),
            request_timeout: 30,
        };

        let contents = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_path, contents).unwrap();

        let loaded_contents = fs::read_to_string(&config_path).unwrap();
        let loaded: AppConfig = toml::from_str(&loaded_contents).unwrap();

        assert_eq!(loaded.api_base_url, "http://localhost:9090");
        assert_eq!(loaded.model, "gemini-2.0-pro");
        assert_eq!(loaded.request_timeout, 30);
    }

    #[test]
    fn test_timeout_falls_back_to_default_when_absent() {
        let toml_str = r#"
            api_base_url = "http://localhost:9090"
            model = "gemini-2.5-flash"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.request_timeout, 120);
    }

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        let original = std::env::var("GEMINI_API_KEY").ok();

        std::env::set_var("GEMINI_API_KEY", "secret");
        let key = api_key_from_env();

        std::env::remove_var("GEMINI_API_KEY");
        let missing = api_key_from_env();

        if let Some(value) = &original {
            std::env::set_var("GEMINI_API_KEY", value);
        }

        assert_eq!(key.unwrap(), "secret");
        assert!(missing.is_err());
    }
}
