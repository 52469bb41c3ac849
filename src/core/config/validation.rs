#![allow(clippy::result_large_err)]

use super::StrmodConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &StrmodConfig) -> Result<(), AppError> {
        let level = config.logging.default_level.trim();
        if level.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigError,
                "logging.default_level cannot be empty",
            ));
        }

        for directive in level.split(',') {
            Directive::from_str(directive.trim()).map_err(|_| {
                AppError::new(
                    ErrorCategory::ConfigError,
                    "logging.default_level must be a valid tracing directive",
                )
            })?;
        }

        if let Some(dir) = &config.logging.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ConfigError,
                    "logging.log_dir cannot be empty",
                ));
            }
        }

        Ok(())
    }
}
