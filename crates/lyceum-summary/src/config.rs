//! Runtime configuration for the summary pipeline.
//!
//! Precedence: built-in defaults, then an optional `lyceum.toml` (path override
//! via `LYCEUM_CONFIG`), then `LYCEUM__*` environment variables. The API key is
//! never baked in anywhere; it arrives through config or `OPENAI_API_KEY` and is
//! handed to the engine constructor explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::error::SummaryResult;

/// Configuration for summary generation and artifact output.
///
/// | Key | Default | Description |
/// |-----|---------|-------------|
/// | model | gpt-3.5-turbo | Chat model for the remote engine. |
/// | api_base | https://api.openai.com/v1 | OpenAI-compatible API base URL. |
/// | api_key | unset | Bearer key; falls back to `OPENAI_API_KEY`. |
/// | offline | false | Force the template engine, never call out. |
/// | output_dir | . | Directory for timestamped artifacts. |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScribeConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub offline: bool,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key: None,
            offline: false,
            output_dir: default_output_dir(),
        }
    }
}

impl ScribeConfig {
    /// Load config from file and environment.
    /// Precedence: env `LYCEUM_CONFIG` path > `lyceum.toml` > defaults, with
    /// `LYCEUM__*` environment variables on top.
    pub fn load() -> SummaryResult<Self> {
        let config_path =
            std::env::var("LYCEUM_CONFIG").unwrap_or_else(|_| "lyceum.toml".to_string());
        Self::load_from_path(Path::new(&config_path))
    }

    /// Same as [`ScribeConfig::load`], but with an explicit file path. The file
    /// may be absent; environment variables still apply.
    pub fn load_from_path(path: &Path) -> SummaryResult<Self> {
        let builder = config::Config::builder()
            .set_default("model", DEFAULT_MODEL)?
            .set_default("api_base", DEFAULT_API_BASE)?
            .set_default("offline", false)?
            .set_default("output_dir", ".")?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("LYCEUM").separator("__"))
            .build()?;

        Ok(built.try_deserialize()?)
    }

    /// Key precedence: explicit config value, then the `OPENAI_API_KEY`
    /// environment variable. Blank values count as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}
