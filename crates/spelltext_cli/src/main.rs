//! spelltext CLI
//!
//! Extracts spellcheckable plaintext from markup and localization files.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use spelltext_convert::{CONVERSION_FAILURE_EXIT_CODE, ConvertError};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::convert::run_convert;
use crate::commands::types::run_types;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Convert {
            input,
            texttype,
            output,
        } => run_convert(cli, input, texttype.as_deref(), output.as_deref()),
        Commands::Types => {
            run_types();
            Ok(())
        }
    }
}

fn exit_code(report: &miette::Report) -> u8 {
    report
        .downcast_ref::<ConvertError>()
        .map(ConvertError::exit_code)
        .unwrap_or(CONVERSION_FAILURE_EXIT_CODE)
}
