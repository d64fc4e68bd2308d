use crate::error::{Result, TextTallyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub names: NamesConfig,
    pub counts: CountsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamesConfig {
    /// Suffix appended to the input filename to form the summary file path.
    pub summary_suffix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CountsConfig {
    /// Number of entries emitted by the top-count listing.
    pub top_words: usize,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            summary_suffix: ".summary".to_string(),
        }
    }
}

impl Default for CountsConfig {
    fn default() -> Self {
        Self { top_words: 20 }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TextTallyError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| TextTallyError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| TextTallyError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["texttally.toml", ".texttally.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.names.summary_suffix.is_empty() {
            return Err(TextTallyError::Config {
                message: "Summary suffix must not be empty".to_string(),
            });
        }

        if self.counts.top_words == 0 {
            return Err(TextTallyError::Config {
                message: "Top word count must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.names.summary_suffix, ".summary");
        assert_eq!(config.counts.top_words, 20);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.counts.top_words = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.names.summary_suffix.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[counts]\ntop_words = 5").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.counts.top_words, 5);
        // Unspecified sections fall back to defaults
        assert_eq!(config.names.summary_suffix, ".summary");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("does-not-exist.toml");
        assert!(matches!(result, Err(TextTallyError::Config { .. })));
    }

    #[test]
    fn test_load_with_no_path_uses_defaults() {
        let config = Config::load_with_defaults(None::<&str>).unwrap();
        assert_eq!(config.counts.top_words, 20);
    }
}
