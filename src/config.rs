use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = "nexttag.toml";

/// Represents the complete configuration for next-tag.
///
/// Contains the tag format settings and the git behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_tag_format() -> String {
    "v${rev}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings that determine the shape of the computed tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Template with `${year}`, `${month}` and `${rev}` placeholders
    #[serde(default = "default_tag_format")]
    pub format: String,

    /// Optional JSON file overriding year and month
    #[serde(default)]
    pub version_file: Option<String>,

    #[serde(default)]
    pub release_candidate: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            format: default_tag_format(),
            version_file: None,
            release_candidate: false,
        }
    }
}

/// Configuration for git behavior.
///
/// Controls where tags come from and whether the computed tag is recorded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Fetch remote tags before computing the next version
    #[serde(default = "default_true")]
    pub fetch: bool,

    /// Create the computed tag locally at HEAD
    #[serde(default)]
    pub create_tag: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            fetch: true,
            create_tag: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nexttag.toml` in current directory
/// 3. `.nexttag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            log::debug!("No {} found, using default config", CONFIG_FILE_NAME);
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
