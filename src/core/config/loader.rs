#![allow(clippy::result_large_err)]

use super::{ConfigValidator, StrmodConfig};
use crate::core::error::AppError;
use crate::core::types::{ErrorCategory, OutputFormat};
use crate::logging::ConsoleOutput;
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "strmod.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve, load, override and validate the configuration.
    ///
    /// An explicit path must exist. Otherwise `$STRMOD_CONFIG`, `./strmod.toml` and
    /// `<config dir>/strmod/config.toml` are tried in order, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<StrmodConfig, AppError> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::new(
                        ErrorCategory::ConfigError,
                        format!("Config file {} does not exist", path.display()),
                    ));
                }
                Self::load_from_file(path)?.unwrap_or_default()
            }
            None => Self::discover()?,
        };

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn discover() -> Result<StrmodConfig, AppError> {
        for candidate in Self::candidate_paths() {
            if let Some(config) = Self::load_from_file(&candidate)? {
                return Ok(config);
            }
        }
        Ok(StrmodConfig::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = env::var("STRMOD_CONFIG") {
            if !path.trim().is_empty() {
                paths.push(PathBuf::from(path));
            }
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(dir) = dirs_next::config_dir() {
            paths.push(dir.join("strmod").join("config.toml"));
        }
        paths
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<StrmodConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let mut config: StrmodConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;
        config.source_path = Some(path.to_path_buf());

        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values.
    /// Unparseable booleans are ignored; an unknown format or console sink is an error.
    fn apply_env_overrides(config: &mut StrmodConfig) -> Result<(), AppError> {
        if let Some(value) = env_bool("STRMOD_CONVERT_SLASHES") {
            config.defaults.convert_slashes = value;
        }

        if let Some(value) = env_bool("STRMOD_TRIM_LINES") {
            config.defaults.trim_lines = value;
        }

        if let Ok(format) = env::var("STRMOD_OUTPUT_FORMAT") {
            config.output.format = format
                .parse::<OutputFormat>()
                .map_err(|err| AppError::new(ErrorCategory::ConfigError, err))?;
        }

        if let Some(value) = env_bool("STRMOD_OUTPUT_COPY") {
            config.output.copy = value;
        }

        if let Ok(level) = env::var("STRMOD_LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.logging.default_level = level;
            }
        }

        if let Ok(dir) = env::var("STRMOD_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.logging.log_dir = Some(PathBuf::from(dir));
                config.logging.enable_file = true;
            }
        }

        if let Ok(console) = env::var("STRMOD_LOG_CONSOLE") {
            let console = console
                .parse::<ConsoleOutput>()
                .map_err(|err| AppError::new(ErrorCategory::ConfigError, err))?;
            config.logging.console_output = Some(console);
        }

        Ok(())
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "STRMOD_CONFIG - Path to the configuration file",
            "STRMOD_CONVERT_SLASHES - Default for backslash conversion (true/false, default: true)",
            "STRMOD_TRIM_LINES - Default for per-line trimming (true/false, default: true)",
            "STRMOD_OUTPUT_FORMAT - Output format (text/json, default: text)",
            "STRMOD_OUTPUT_COPY - Copy results to the clipboard (true/false, default: false)",
            "STRMOD_LOG_LEVEL - Tracing directive for logs (default: warn)",
            "STRMOD_LOG_DIR - Enable file logging into this directory",
            "STRMOD_LOG_CONSOLE - Console log sink (stdout/stderr/none)",
            "RUST_LOG - Overrides STRMOD_LOG_LEVEL when set",
        ]
    }
}

fn env_bool(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().to_lowercase().parse::<bool>().ok())
}
