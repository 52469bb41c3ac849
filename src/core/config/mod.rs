pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

use crate::core::types::OutputFormat;
use crate::logging::ConsoleOutput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// strmod configuration loaded from strmod.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StrmodConfig {
    /// Initial state of the operation toggles
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging sinks
    #[serde(default)]
    pub logging: LoggingSection,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

/// Operation toggles applied when the command line does not set them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Convert backslashes to forward slashes
    #[serde(default = "default_true")]
    pub convert_slashes: bool,

    /// Trim whitespace around each line
    #[serde(default = "default_true")]
    pub trim_lines: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Copy successful results to the clipboard
    #[serde(default)]
    pub copy: bool,
}

/// `[logging]` table as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub default_level: String,

    #[serde(default)]
    pub enable_file: bool,

    /// Relative paths resolve against the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_output: Option<ConsoleOutput>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            convert_slashes: default_true(),
            trim_lines: default_true(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            default_level: default_log_level(),
            enable_file: false,
            log_dir: None,
            console_output: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}
