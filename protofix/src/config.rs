use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[protofix]` section.
    pub protofix: ProtofixConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for protofix.
pub struct ProtofixConfig {
    /// Folders skipped while indexing (names or `*.suffix` patterns).
    pub exclude_folders: Option<Vec<String>>,
    /// Only print diagnostics, never modify files.
    pub dry: Option<bool>,
    /// Verbose output on stderr.
    pub verbose: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
struct PyProject {
    tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct ToolConfig {
    protofix: ProtofixConfig,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// In each directory `.protofix.toml` is tried first, then a
    /// `pyproject.toml` with a `[tool.protofix]` table. Files that fail to
    /// parse are skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        // Relative paths run out of parents early; walk the absolute form.
        if let Ok(absolute) = current.canonicalize() {
            current = absolute;
        }

        loop {
            let protofix_toml = current.join(CONFIG_FILENAME);
            if protofix_toml.exists() {
                if let Ok(content) = fs::read_to_string(&protofix_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(protofix_toml);
                        return config;
                    }
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if pyproject_toml.exists() {
                if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                    if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                        return Config {
                            protofix: pyproject.tool.protofix,
                            config_file_path: Some(pyproject_toml),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
