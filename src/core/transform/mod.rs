//! Text transformation pipeline.
//!
//! A request is validated once, then passed through up to four stages in a fixed
//! order: literal find/replace, per-line prefix cut, backslash conversion, and
//! per-line whitespace trim. Each stage consumes the output of the previous one.

pub mod stages;
pub mod validation;

pub use stages::{convert_slashes, cut_prefix, replace_literal, trim_lines};
pub use validation::validate;

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Either the transformed text or the reason the request was rejected.
pub type TransformResult = Result<String, ValidationError>;

/// Values collected from the caller for a single transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub source: String,
    #[serde(default)]
    pub find: String,
    #[serde(default)]
    pub replace: String,
    #[serde(default)]
    pub cut_enabled: bool,
    #[serde(default)]
    pub cut_marker: String,
    #[serde(default)]
    pub convert_slashes: bool,
    #[serde(default)]
    pub trim_lines: bool,
}

impl TransformRequest {
    /// Request with the given source and every operation disabled.
    pub fn new<T: Into<String>>(source: T) -> Self {
        TransformRequest {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_replacement<F, R>(mut self, find: F, replace: R) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        self.find = find.into();
        self.replace = replace.into();
        self
    }

    pub fn with_cut<T: Into<String>>(mut self, marker: T) -> Self {
        self.cut_enabled = true;
        self.cut_marker = marker.into();
        self
    }

    pub fn with_convert_slashes(mut self, enabled: bool) -> Self {
        self.convert_slashes = enabled;
        self
    }

    pub fn with_trim_lines(mut self, enabled: bool) -> Self {
        self.trim_lines = enabled;
        self
    }

    /// Find/replace only applies when both halves are present.
    pub fn has_replacement(&self) -> bool {
        !self.find.is_empty() && !self.replace.is_empty()
    }
}

/// Validate the request and run every enabled stage exactly once.
pub fn transform(request: &TransformRequest) -> TransformResult {
    validate(request)?;

    let mut text = request.source.clone();
    if request.has_replacement() {
        tracing::debug!(find = %request.find, "applying literal replacement");
        text = replace_literal(&text, &request.find, &request.replace);
    }
    if request.cut_enabled {
        tracing::debug!(marker = %request.cut_marker, "cutting line prefixes");
        text = cut_prefix(&text, &request.cut_marker);
    }
    if request.convert_slashes {
        tracing::debug!("converting backslashes");
        text = convert_slashes(&text);
    }
    if request.trim_lines {
        tracing::debug!("trimming lines");
        text = trim_lines(&text);
    }
    Ok(text)
}
