pub mod args;
pub mod commands;
pub mod output;

pub use args::{ApplyArgs, ConfigArgs};
pub use commands::Outcome;

use crate::core::config::StrmodConfig;
use clap::{Parser, Subcommand};
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n\
{after-help}";

#[derive(Parser, Debug)]
#[command(name = "strmod")]
#[command(version = crate::VERSION)]
#[command(about = "Modify strings: literal replace, prefix cut, slash conversion, line trim")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Stages always run in this order: replace, cut, slashes, trim. Each runs at most once."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Transform text once and print the result",
        long_about = "Apply validates the requested operations, then runs literal find/replace, per-line prefix cut, backslash conversion and per-line trim on the input text.",
        after_help = "Examples:\n    strmod apply 'a.b.c' --find . --replace -\n    strmod apply --cut-marker web < paths.txt\n    strmod apply 'C:\\Users\\me' --format json"
    )]
    Apply(ApplyArgs),
    #[command(
        about = "Show the resolved configuration",
        long_about = "Config prints the effective configuration as TOML, including environment overrides, followed by the supported environment variables.",
        after_help = "Example:\n    strmod config --config ./strmod.toml"
    )]
    Config(ConfigArgs),
}

impl Command {
    /// Config file named on the command line, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Apply(args) => args.config.as_deref(),
            Command::Config(args) => args.config.as_deref(),
        }
    }
}

pub fn run(args: Args, config: &StrmodConfig) -> crate::Result<Outcome> {
    match args.command {
        Command::Apply(apply_args) => commands::apply(apply_args, config),
        Command::Config(config_args) => commands::config(config_args, config),
    }
}
