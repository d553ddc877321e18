//! Configuration management for the CLI.
//!
//! An optional `typetransfer.toml` next to the manifest tunes the output
//! flavor and selection filters; every key has a default, and a missing
//! file simply yields the default configuration.

use crate::emitter::ScriptFlavor;
use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "typetransfer.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Selection filters.
    pub selection: SelectionConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Target script flavor (javascript or typescript).
    pub flavor: ScriptFlavor,

    /// Grouping folder segment stripped from output paths.
    pub strip_segment: String,

    /// Directory of the shared enum file, relative to the output root.
    pub enum_dir: String,

    /// Base name of the shared enum file.
    pub enum_file: String,
}

/// Selection filter configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Namespace segment that marks enumeration modules.
    pub enum_namespace: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            flavor: ScriptFlavor::Javascript,
            strip_segment: "models".to_string(),
            enum_dir: "Enums".to_string(),
            enum_file: "EnumType".to_string(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enum_namespace: "enums".to_string(),
        }
    }
}

/// Configuration manager for loading config files.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts the default location; when no config
    /// file exists the defaults are returned.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# typetransfer configuration file

[output]
# Target script flavor: "javascript" (classes) or "typescript" (interfaces)
flavor = "javascript"

# Grouping folder segment stripped from output paths
strip_segment = "models"

# Location of the shared enumeration file, relative to the output root
enum_dir = "Enums"
enum_file = "EnumType"

[selection]
# Namespace segment that marks enumeration modules
enum_namespace = "enums"
"#
    }
}
