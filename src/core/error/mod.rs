use crate::core::types::{ErrorCategory, Field};

/// Rejected transform request. Carries the user-facing message and the fields to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a value")]
    MissingSource,

    #[error("Both find and replace values are required for replacement")]
    UnpairedReplacement,

    #[error("Please specify where to end removal")]
    MissingCutMarker,

    #[error("No modifications selected. Choose an operation or enter values to replace")]
    NoModifications,
}

impl ValidationError {
    /// Fields the caller should mark as offending.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            ValidationError::MissingSource => &[Field::Source],
            ValidationError::UnpairedReplacement => &[Field::Find, Field::Replace],
            ValidationError::MissingCutMarker => &[Field::CutMarker],
            ValidationError::NoModifications => &[
                Field::Find,
                Field::Replace,
                Field::ConvertSlashes,
                Field::CutEnabled,
                Field::TrimLines,
            ],
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Comma-separated flag list, e.g. `--find, --replace`.
    pub fn flag_hint(&self) -> String {
        self.fields()
            .iter()
            .map(|field| field.flag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Failure outside the transform pipeline: config, input, clipboard.
#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        let code = match category {
            ErrorCategory::ConfigError => "CONFIG_ERROR",
            ErrorCategory::IoError => "IO_ERROR",
            ErrorCategory::ClipboardError => "CLIPBOARD_ERROR",
        };
        AppError {
            category,
            code: code.to_string(),
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    /// The message followed by the underlying cause, if any.
    pub fn reason(&self) -> String {
        match &self.source {
            Some(source) => format!("{}: {:#}", self.message, source),
            None => self.message.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
