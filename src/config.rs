//! Configuration loaded from `remedian.toml`.
//!
//! [`RemedianConfig`] holds the validation knobs. Values missing from the
//! file fall back to defaults. The `REMEDIAN_STRICT` environment variable
//! takes precedence over the file for strict mode.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration loaded from `remedian.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemedianConfig {
    /// Reject unknown fields on plans and stages during validation.
    #[serde(default)]
    pub strict: bool,

    /// Maximum number of stages a plan may declare.
    #[serde(default = "default_max_stages")]
    pub max_stages: usize,

    /// Maximum number of actions a single stage may declare.
    #[serde(default = "default_max_actions_per_stage")]
    pub max_actions_per_stage: usize,
}

fn default_max_stages() -> usize {
    50
}

fn default_max_actions_per_stage() -> usize {
    20
}

impl Default for RemedianConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_stages: default_max_stages(),
            max_actions_per_stage: default_max_actions_per_stage(),
        }
    }
}

impl RemedianConfig {
    /// Load configuration from `remedian.toml` in the current directory.
    /// Uses defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new("remedian.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<RemedianConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variable takes precedence over the file for strict mode.
        if let Ok(val) = std::env::var("REMEDIAN_STRICT")
            && !val.is_empty()
        {
            config.strict = val == "1" || val.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}
