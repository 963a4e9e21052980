//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// spelltext - Extract spellcheckable plaintext from documents
#[derive(Parser)]
#[command(name = "spelltext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows placeholder rewrites)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress advisory notices
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a file to plaintext
    Convert {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// File-type tag (defaults to the input's extension)
        #[arg(short = 't', long = "type", value_name = "TAG")]
        texttype: Option<String>,

        /// Write the plaintext to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported file types
    Types,
}
