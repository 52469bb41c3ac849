use crate::core::config::StrmodConfig;
use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::anyhow;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "strmod.log";

/// Logging settings with the log directory resolved to an absolute location.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_level: String,
    pub log_dir: Option<PathBuf>,
    pub console_output: Option<ConsoleOutput>,
}

impl LoggingConfig {
    /// Resolve the `[logging]` table of an already loaded configuration.
    ///
    /// A relative `log_dir` is anchored at the directory of the config file, or at the
    /// home directory when the configuration came from defaults only.
    pub fn resolve(config: &StrmodConfig) -> Result<Self> {
        let section = &config.logging;
        let log_dir = if section.enable_file {
            Some(resolve_log_dir(
                section.log_dir.as_deref(),
                config.source_path.as_deref(),
            )?)
        } else {
            None
        };

        Ok(Self {
            default_level: section.default_level.clone(),
            log_dir,
            console_output: section.console_output,
        })
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }
}

fn resolve_log_dir(custom: Option<&Path>, config_file: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom.filter(|dir| dir.is_absolute()) {
        return Ok(dir.to_path_buf());
    }

    let anchor = match config_file.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        Some(_) => std::env::current_dir()?,
        None => home_base()?.join(".strmod"),
    };
    Ok(anchor.join(custom.unwrap_or_else(|| Path::new("logs"))))
}

fn home_base() -> Result<PathBuf> {
    dirs_next::home_dir().ok_or_else(|| anyhow!("$HOME directory unavailable"))
}
