//! Config schema and deserialization

use crate::prompts::DEFAULT_COMPLEXITY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Root configuration (.competencerc.json)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Complexity score above which the extension prompt fires (0.0-1.0)
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: f64,

    /// File extensions evaluated when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_complexity_threshold() -> f64 {
    DEFAULT_COMPLEXITY_THRESHOLD
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            extensions: default_extensions(),
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// Check value ranges serde cannot express
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.complexity_threshold) {
            return Err(crate::Error::Config(format!(
                "complexityThreshold must be between 0 and 1, got {}",
                self.complexity_threshold
            )));
        }
        if self.extensions.is_empty() {
            return Err(crate::Error::Config(
                "extensions must list at least one file extension".to_string(),
            ));
        }
        Ok(())
    }

    /// CLI flags take precedence over file config
    pub fn merge_with_cli(mut self, complexity_threshold: Option<f64>) -> Self {
        if let Some(t) = complexity_threshold {
            self.complexity_threshold = t;
        }
        self
    }

    /// Whether a path has one of the configured extensions
    pub fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.trim_start_matches('.') == e))
            .unwrap_or(false)
    }
}
