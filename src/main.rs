use clap::Parser;
use std::process::ExitCode;
use strmod::cli::{self, Args};
use strmod::core::ConfigLoader;
use strmod::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match ConfigLoader::load(args.command.config_path()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            return ExitCode::FAILURE;
        }
    };

    let _logging = match logging::init(&args.command, &config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args, &config) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
