use crate::core::config::StrmodConfig;
use crate::core::transform::TransformRequest;
use crate::core::types::OutputFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    /// Text to modify, one or more lines (default: read --input or stdin)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text to modify from this file
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Literal string to replace (requires --replace)
    #[arg(
        long,
        short,
        value_name = "STRING",
        default_value = "",
        hide_default_value = true,
        help_heading = "Replacement"
    )]
    pub find: String,

    /// Replacement inserted verbatim for every match of --find
    #[arg(
        long,
        short,
        value_name = "STRING",
        default_value = "",
        hide_default_value = true,
        help_heading = "Replacement"
    )]
    pub replace: String,

    /// Remove each line's start up to and including the first --cut-marker
    #[arg(long, help_heading = "Line Operations")]
    pub cut: bool,

    /// Marker where removal ends (implies --cut)
    #[arg(long, value_name = "STRING", help_heading = "Line Operations")]
    pub cut_marker: Option<String>,

    /// Convert backward slashes (\) to forward slashes (/)
    #[arg(
        long,
        overrides_with = "no_convert_slashes",
        help_heading = "Line Operations"
    )]
    pub convert_slashes: bool,

    /// Keep backward slashes as they are
    #[arg(
        long,
        overrides_with = "convert_slashes",
        help_heading = "Line Operations"
    )]
    pub no_convert_slashes: bool,

    /// Trim leading and trailing whitespace from each line
    #[arg(long, overrides_with = "no_trim", help_heading = "Line Operations")]
    pub trim: bool,

    /// Keep surrounding whitespace
    #[arg(long, overrides_with = "trim", help_heading = "Line Operations")]
    pub no_trim: bool,

    /// Emit the result as plain text or as a JSON report
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        help_heading = "Output Options"
    )]
    pub format: Option<OutputFormat>,

    /// Copy a successful result to the system clipboard
    #[arg(long, help_heading = "Output Options")]
    pub copy: bool,

    /// Path to a config file (default: ./strmod.toml, then the user config dir)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

impl ApplyArgs {
    /// Build the transform request, filling unset toggles from the config defaults.
    pub fn to_request(&self, source: String, config: &StrmodConfig) -> TransformRequest {
        let convert_slashes = toggle(
            self.convert_slashes,
            self.no_convert_slashes,
            config.defaults.convert_slashes,
        );
        let trim_lines = toggle(self.trim, self.no_trim, config.defaults.trim_lines);

        TransformRequest {
            source,
            find: self.find.clone(),
            replace: self.replace.clone(),
            cut_enabled: self.cut || self.cut_marker.is_some(),
            cut_marker: self.cut_marker.clone().unwrap_or_default(),
            convert_slashes,
            trim_lines,
        }
    }

    pub fn output_format(&self, config: &StrmodConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }

    pub fn wants_copy(&self, config: &StrmodConfig) -> bool {
        self.copy || config.output.copy
    }
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a config file (default: ./strmod.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}
