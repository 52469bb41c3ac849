use crate::{
    cli::args::{ApplyArgs, ConfigArgs},
    cli::output,
    core::{clipboard, config::StrmodConfig, transform, AppError, ConfigLoader, OutputFormat},
    Result,
};
use anyhow::{anyhow, Context};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The request was rejected by validation; the reason has already been rendered.
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Run the transform once and render the result.
pub fn apply(args: ApplyArgs, config: &StrmodConfig) -> Result<Outcome> {
    let source = read_source(&args)?;
    let request = args.to_request(source, config);
    let format = args.output_format(config);

    let result = transform::transform(&request);
    match &result {
        Ok(_) => tracing::info!("string replacement completed"),
        Err(error) => tracing::warn!("Error: {}", error),
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let written = match format {
        OutputFormat::Text => {
            output::write_text(&result, &mut stdout.lock(), &mut stderr.lock())
        }
        OutputFormat::Json => output::write_json(&result, &mut stdout.lock()),
    };
    written.context("failed to write result")?;

    match result {
        Ok(text) => {
            if args.wants_copy(config) {
                copy_result(&text);
            }
            Ok(Outcome::Success)
        }
        Err(_) => Ok(Outcome::Rejected),
    }
}

/// Print the resolved configuration and the supported environment variables.
pub fn config(_args: ConfigArgs, config: &StrmodConfig) -> Result<Outcome> {
    let rendered =
        toml::to_string_pretty(config).context("failed to render configuration as TOML")?;

    let mut out = io::stdout().lock();
    match &config.source_path {
        Some(path) => writeln!(out, "# loaded from {}", path.display())?,
        None => writeln!(out, "# built-in defaults")?,
    }
    write!(out, "{}", rendered)?;
    writeln!(out)?;
    writeln!(out, "# Environment overrides:")?;
    for line in ConfigLoader::env_var_documentation() {
        writeln!(out, "#   {}", line)?;
    }
    Ok(Outcome::Success)
}

fn read_source(args: &ApplyArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(anyhow!(
            "no input text; pass TEXT, --input FILE, or pipe text on stdin"
        ));
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(strip_final_newline(buffer))
}

/// Piped input almost always ends with one line break that the user did not type.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn copy_result(text: &str) {
    match clipboard::copy_text(text) {
        Ok(()) => tracing::info!("result copied to clipboard"),
        Err(err) => {
            tracing::warn!("clipboard copy failed: {}", err);
            eprintln!("{}", copy_failure_message(&err));
        }
    }
}

fn copy_failure_message(err: &AppError) -> String {
    format!("Failed to copy text: {}", err.reason())
}
