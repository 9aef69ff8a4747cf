//! Configuration management for the Playground CLI
//!
//! Stores the server URL and generation defaults in
//! ~/.config/prompt-playground/config.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use playground::PromptType;

const CONFIG_DIR: &str = "prompt-playground";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default)]
    pub default_prompt_type: PromptType,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            default_prompt_type: PromptType::default(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set a single key by name (as used by `playground config set`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => self.base_url = value.trim_end_matches('/').to_string(),
            "default_model" => self.default_model = value.to_string(),
            "default_prompt_type" => {
                self.default_prompt_type = value.parse().map_err(anyhow::Error::msg)?
            }
            "temperature" => {
                let t: f64 = value.parse().context("temperature must be a number")?;
                if !(0.0..=1.0).contains(&t) {
                    bail!("temperature must be between 0 and 1");
                }
                self.temperature = t;
            }
            "max_tokens" => {
                let n: u32 = value.parse().context("max_tokens must be an integer")?;
                if !(1..=4000).contains(&n) {
                    bail!("max_tokens must be between 1 and 4000");
                }
                self.max_tokens = n;
            }
            _ => bail!(
                "Unknown key: {}. Valid: base_url, default_model, default_prompt_type, temperature, max_tokens",
                key
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("default_model = \"m1\"\ndefault_prompt_type = \"few-shot\"\n").unwrap();
        assert_eq!(config.default_model, "m1");
        assert_eq!(config.default_prompt_type, PromptType::FewShot);
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::default();
        config.set("base_url", "http://example.test/").unwrap();
        assert_eq!(config.base_url, "http://example.test");
        config.set("default_prompt_type", "chain-of-thought").unwrap();
        assert_eq!(config.default_prompt_type, PromptType::ChainOfThought);

        assert!(config.set("temperature", "1.5").is_err());
        assert!(config.set("max_tokens", "0").is_err());
        assert!(config.set("default_prompt_type", "nope").is_err());
        assert!(config.set("colour", "blue").is_err());
    }
}
