// src/config/mod.rs
pub mod types;

pub use self::types::{Config, Preferences};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "twitterverse.toml";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `path`, or from `twitterverse.toml` in the
    /// working directory when no path is given. A missing default file
    /// yields the built-in defaults.
    ///
    /// # Errors
    /// Returns error if an explicit path is missing, or the file is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// # Errors
    /// Returns error if the TOML is malformed or a value is out of range.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if `log_level` is not a known level.
    pub fn validate(&self) -> Result<()> {
        let level = self.preferences.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.preferences.log_level
            );
        }
        Ok(())
    }
}
