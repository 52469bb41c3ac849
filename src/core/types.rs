use serde::{Deserialize, Serialize};

/// Input fields of a transform request, used to flag offending values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Source,
    Find,
    Replace,
    CutEnabled,
    CutMarker,
    ConvertSlashes,
    TrimLines,
}

impl Field {
    /// Command-line flag that supplies this field.
    pub fn flag(self) -> &'static str {
        match self {
            Field::Source => "TEXT",
            Field::Find => "--find",
            Field::Replace => "--replace",
            Field::CutEnabled => "--cut",
            Field::CutMarker => "--cut-marker",
            Field::ConvertSlashes => "--convert-slashes",
            Field::TrimLines => "--trim",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Source => "source",
            Field::Find => "find",
            Field::Replace => "replace",
            Field::CutEnabled => "cut_enabled",
            Field::CutMarker => "cut_marker",
            Field::ConvertSlashes => "convert_slashes",
            Field::TrimLines => "trim_lines",
        };
        f.write_str(name)
    }
}

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ConfigError,
    IoError,
    ClipboardError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Output rendering for a transform result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain result text, errors on stderr
    #[default]
    Text,
    /// JSON report suitable for editor integrations
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format '{}'; supported values are text, json",
                value
            )),
        }
    }
}
