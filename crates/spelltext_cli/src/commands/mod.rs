//! Subcommand implementations

pub mod convert;
pub mod types;

use miette::{IntoDiagnostic, Result};
use spelltext_convert::ConverterConfig;
use tracing::info;

use crate::cli::Cli;

pub fn load_config(cli: &Cli) -> Result<ConverterConfig> {
    if let Some(ref path) = cli.config {
        return Ok(ConverterConfig::from_file(path)?);
    }

    let cwd = std::env::current_dir().into_diagnostic()?;
    if let Some(path) = ConverterConfig::discover(&cwd) {
        info!("Using config: {}", path.display());
        return Ok(ConverterConfig::from_file(&path)?);
    }

    Ok(ConverterConfig::new())
}
