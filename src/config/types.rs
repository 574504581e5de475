use crate::query::PresentSpec;
use serde::{Deserialize, Serialize};

/// Contents of `twitterverse.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for PRESENT lines a query leaves out.
    #[serde(default)]
    pub present: PresentSpec,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_color")]
    pub color: bool,
    /// `error`, `warn`, `info`, `debug` or `trace`. `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

const fn default_color() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }
