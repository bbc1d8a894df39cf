use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Library file, JSON lines.
    #[serde(default = "default_library")]
    pub library: String,

    /// Style used when --style is not given.
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: default_library(),
            style: default_style(),
        }
    }
}

fn default_library() -> String {
    "library.jsonl".to_string()
}

fn default_style() -> String {
    "apa7".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_from_project() -> Result<Self> {
        let config_paths = [Path::new(".refmark.toml"), Path::new("refmark.toml")];

        for path in &config_paths {
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: Config = toml::from_str("style = \"ieee\"").unwrap();
        assert_eq!(config.style, "ieee");
        assert_eq!(config.library, "library.jsonl");
    }

    #[test]
    fn test_empty_config_matches_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.library, Config::default().library);
        assert_eq!(config.style, Config::default().style);
    }
}
