//! Console configuration
//!
//! Settings come from an optional JSON file, then CLI flags override them:
//!
//! ```json
//! { "prompt": "starlog> ", "banner": false, "theme": "plain", "format": "text" }
//! ```

use crate::core::error::{ResultExt, Result, StarlogError};
use crate::core::presenter::{OutputFormat, Theme};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings for one console session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Prompt written before each line is read; empty disables it
    pub prompt: String,
    /// Print a greeting when the console starts
    pub banner: bool,
    pub theme: Theme,
    pub format: OutputFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
            theme: Theme::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StarlogError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)
            .map_err(StarlogError::from)
            .context(format!("reading {}", path.display()))?;
        Self::from_json(&contents).context(format!("parsing {}", path.display()))
    }

    /// Parse settings from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Settings for non-interactive use: no prompt, no banner, no markers
    pub fn quiet() -> Self {
        Self {
            prompt: String::new(),
            banner: false,
            theme: Theme::Plain,
            format: OutputFormat::Text,
        }
    }
}
