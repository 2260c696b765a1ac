//! Configuration loading for Competence

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".competencerc.json";

/// Find and load the config file. Searches current directory then parents;
/// no file means defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Search for .competencerc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Write a default config into `dir`. Fails if one already exists.
pub fn write_default_config(dir: &Path, complexity_threshold: Option<f64>) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    let config = Config::default().merge_with_cli(complexity_threshold);
    config.validate()?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    fs::write(&path, json + "\n")
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(path)
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        // A config further up the real filesystem would change the result; the
        // temp dir is assumed clean of .competencerc.json
        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.complexity_threshold, 0.5);
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"complexityThreshold": 0.25, "ignore": ["**/venv/**"]}"#,
        )
        .unwrap();
        let nested = dir.path().join("submissions");
        fs::create_dir_all(&nested).unwrap();
        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.complexity_threshold, 0.25);
        assert_eq!(config.ignore, vec!["**/venv/**"]);
    }

    #[test]
    fn test_custom_path_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"complexityThreshold": 3}"#).unwrap();
        assert!(load_config(dir.path(), Some(&path)).is_err());
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_write_default_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_default_config(dir.path(), Some(0.4)).unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.complexity_threshold, 0.4);
        assert!(write_default_config(dir.path(), None).is_err());
        assert!(path.ends_with(CONFIG_FILENAME));
    }

    #[test]
    fn test_is_ignored_patterns() {
        let set = build_ignore_set(&["**/venv/**".to_string(), "**/test_*.py".to_string()])
            .unwrap();
        assert!(is_ignored(Path::new("proj/venv/lib/x.py"), &set));
        assert!(is_ignored(Path::new("proj/test_answers.py"), &set));
        assert!(!is_ignored(Path::new("proj/answer.py"), &set));
    }
}
