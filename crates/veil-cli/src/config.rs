use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for veil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "default_blacklist")]
    pub blacklist: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_chars: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_replacement")]
    pub replacement: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
            stop_chars: None,
            variants: None,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            replacement: default_replacement(),
        }
    }
}

fn default_blacklist() -> PathBuf {
    PathBuf::from("lexicon/black_words.txt")
}

fn default_replacement() -> char {
    '*'
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "veil", "veil") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.veil/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.replacement, '*');
        assert_eq!(config.lexicon.blacklist, default_blacklist());
        assert!(config.lexicon.stop_chars.is_none());
        assert!(config.lexicon.variants.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.scan.replacement, config.scan.replacement);
        assert_eq!(parsed.lexicon.blacklist, config.lexicon.blacklist);
    }

    #[test]
    fn test_config_parse_overrides() {
        let toml_str = r##"
[lexicon]
blacklist = "words/deny.txt"
stop_chars = "words/noise.txt"

[scan]
replacement = "#"
"##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lexicon.blacklist, PathBuf::from("words/deny.txt"));
        assert_eq!(
            config.lexicon.stop_chars,
            Some(PathBuf::from("words/noise.txt"))
        );
        assert!(config.lexicon.variants.is_none());
        assert_eq!(config.scan.replacement, '#');
    }
}
