use crate::cli::Command;
use crate::core::config::StrmodConfig;
use crate::core::types::OutputFormat;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Text output read by a person at a terminal.
    Interactive,
    /// Machine-readable output consumed by another program, e.g. an editor panel.
    Scripted,
}

impl ExecutionContext {
    /// Returns `true` when console sinks should stay silent unless configured.
    pub fn disables_console(self) -> bool {
        matches!(self, ExecutionContext::Scripted)
    }
}

/// Derive the active execution context from a parsed CLI command and the loaded config.
pub fn detect_context(command: &Command, config: &StrmodConfig) -> ExecutionContext {
    match command {
        Command::Apply(args) => match args.format.unwrap_or(config.output.format) {
            OutputFormat::Json => ExecutionContext::Scripted,
            OutputFormat::Text => ExecutionContext::Interactive,
        },
        Command::Config(_) => ExecutionContext::Interactive,
    }
}
