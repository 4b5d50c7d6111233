//! Configuration file discovery and loading

use super::merge::ConfigMerger;
use crate::error::{LintforgeError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed during auto-discovery, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &[".lintforgerc.json", ".lintforgerc.toml", "lintforge.json"];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from start_path
    ///
    /// Searches for config files in the following order:
    /// 1. `.lintforgerc.json` - dotfile config (JSON/JSONC)
    /// 2. `.lintforgerc.toml` - dotfile config (TOML)
    /// 3. `lintforge.json` - project config (JSON)
    ///
    /// Starts from the given directory and moves up the directory tree until
    /// a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintforgeError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            // Move up to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached filesystem root
                break;
            }
        }

        Ok(None)
    }

    /// Load a configuration file and resolve its `extends` chain
    ///
    /// Extended files are loaded relative to the file that declares them and
    /// folded through [`ConfigMerger`] parents-first, so the extending file
    /// always wins ties. The `extends` key itself is consumed here and does
    /// not appear in the result.
    pub fn load_from_file(path: &Path) -> Result<Value> {
        let mut visited = HashSet::new();
        Self::load_resolved(path, &mut visited)
    }

    /// Load config from path or auto-discover
    ///
    /// If a custom path is provided, loads from that path. Otherwise,
    /// attempts to auto-discover a config file starting from the given
    /// directory (or current directory).
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<Value> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintforgeError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            Self::auto_discover(search_dir)?.ok_or_else(|| {
                LintforgeError::config_error(
                    "No config file found (.lintforgerc.json, .lintforgerc.toml, or lintforge.json)",
                )
            })?
        };

        Self::load_from_file(&config_path)
    }

    fn load_resolved(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Value> {
        let canonical = path
            .canonicalize()
            .map_err(|e| LintforgeError::io_error(path, e))?;
        if !visited.insert(canonical.clone()) {
            return Err(LintforgeError::config_error(format!(
                "Circular extends chain at '{}'",
                path.display()
            )));
        }

        let mut fragment = Self::read_fragment(&canonical)?;
        let parents = Self::take_extends(&mut fragment, &canonical)?;

        if parents.is_empty() {
            visited.remove(&canonical);
            return Ok(fragment);
        }

        tracing::debug!(
            "Resolving {} extends entries for {}",
            parents.len(),
            canonical.display()
        );
        let mut sources = Vec::with_capacity(parents.len() + 1);
        for parent in &parents {
            sources.push(Self::load_resolved(parent, visited)?);
        }
        sources.push(fragment);

        // the set tracks the active chain only, so diamonds are not cycles
        visited.remove(&canonical);
        ConfigMerger::merge(sources.iter())
    }

    /// Remove the `extends` field from a fragment and resolve its entries to
    /// paths relative to the declaring file.
    fn take_extends(fragment: &mut Value, declaring_file: &Path) -> Result<Vec<PathBuf>> {
        let Some(fields) = fragment.as_object_mut() else {
            return Err(LintforgeError::config_error(format!(
                "Config file '{}' must contain an object at the top level",
                declaring_file.display()
            )));
        };
        let Some(extends) = fields.shift_remove("extends") else {
            return Ok(Vec::new());
        };

        let references: Vec<String> = match extends {
            Value::String(reference) => vec![reference],
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    Value::String(reference) => Ok(reference),
                    other => Err(LintforgeError::config_error(format!(
                        "'extends' entries in '{}' must be strings, found {}",
                        declaring_file.display(),
                        other
                    ))),
                })
                .collect::<Result<_>>()?,
            other => {
                return Err(LintforgeError::config_error(format!(
                    "'extends' in '{}' must be a string or an array of strings, found {}",
                    declaring_file.display(),
                    other
                )));
            }
        };

        let base_dir = declaring_file.parent().unwrap_or_else(|| Path::new("."));
        Ok(references
            .iter()
            .map(|reference| base_dir.join(reference))
            .collect())
    }

    fn read_fragment(path: &Path) -> Result<Value> {
        let content =
            fs::read_to_string(path).map_err(|e| LintforgeError::io_error(path, e))?;

        let fragment = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| {
                LintforgeError::config_error(format!(
                    "Failed to parse '{}': {e}",
                    path.display()
                ))
            })?
        } else {
            // json5 accepts plain JSON plus comments and trailing commas
            json5::from_str(&content).map_err(|e| {
                LintforgeError::config_error(format!(
                    "Failed to parse '{}': {e}",
                    path.display()
                ))
            })?
        };

        match fragment {
            Value::Object(_) => Ok(fragment),
            _ => Err(LintforgeError::config_error(format!(
                "Config file '{}' must contain an object at the top level",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintforge.json",
            r#"{
                "root": true,
                "plugins": ["import"]
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config["root"], json!(true));
        assert_eq!(config["plugins"], json!(["import"]));
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintforgerc.json",
            r#"{
                // project plugins
                "plugins": ["import"],
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config["plugins"], json!(["import"]));
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintforgerc.toml",
            r#"
root = true
plugins = ["import"]

[rules]
no-unused-vars = "error"
"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config["root"], json!(true));
        assert_eq!(config["rules"]["no-unused-vars"], json!("error"));
    }

    #[test]
    fn test_auto_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), "lintforge.json", r#"{"root": true}"#);

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().file_name().unwrap(), "lintforge.json");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), ".lintforgerc.json", r#"{"root": true}"#);
        create_temp_config(temp_dir.path(), "lintforge.json", r#"{"root": false}"#);

        // dotfile config wins
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintforgerc.json");
    }

    #[test]
    fn test_extends_resolution_child_wins() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(
            temp_dir.path(),
            "base.json",
            r#"{"plugins": ["a"], "rules": {"r": "error", "s": "warn"}}"#,
        );
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintforge.json",
            r#"{"extends": ["./base.json"], "plugins": ["b"], "rules": {"r": "off"}}"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config["plugins"], json!(["a", "b"]));
        assert_eq!(config["rules"]["r"], json!("off"));
        assert_eq!(config["rules"]["s"], json!("warn"));
        // consumed by the loader
        assert!(config.get("extends").is_none());
    }

    #[test]
    fn test_extends_accepts_single_string() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "base.json", r#"{"root": true}"#);
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintforge.json",
            r#"{"extends": "./base.json"}"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config["root"], json!(true));
    }

    #[test]
    fn test_circular_extends_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "a.json", r#"{"extends": ["./b.json"]}"#);
        let config_path =
            create_temp_config(temp_dir.path(), "b.json", r#"{"extends": ["./a.json"]}"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Some(Path::new("nonexistent.json")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "lintforge.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_top_level_array_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "lintforge.json", r#"["not", "an", "object"]"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }
}
