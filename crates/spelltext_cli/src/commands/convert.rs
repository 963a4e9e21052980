//! Convert command implementation

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use miette::{IntoDiagnostic, Result, WrapErr};
use spelltext_convert::{
    Converter, ConverterConfig, DiagnosticSink, Notice, NullSink, TracingSink,
};
use tracing::debug;

use crate::cli::Cli;
use crate::commands::load_config;

const STDIN_PATH: &str = "-";

pub fn run_convert(
    cli: &Cli,
    input: &Path,
    texttype: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(cli)?;
    let texttype = match texttype {
        Some(tag) => tag.to_string(),
        None => resolve_texttype(&config, input),
    };
    debug!("Converting {} as `{}`", input.display(), texttype);

    let source = read_input(input)?;

    let sink: Arc<dyn DiagnosticSink> = if cli.quiet {
        Arc::new(NullSink)
    } else {
        Arc::new(AdvisorySink::new(TracingSink))
    };
    let converter = Converter::with_config(&config).with_sink(sink);

    let text = converter.convert(&source, &texttype)?;

    write_output(output, &text)
}

/// Forwards advisories to `inner`, except missing capabilities: those also
/// come back as the conversion error, which `main` reports.
struct AdvisorySink<S> {
    inner: S,
}

impl<S: DiagnosticSink> AdvisorySink<S> {
    fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: DiagnosticSink> DiagnosticSink for AdvisorySink<S> {
    fn advise(&self, notice: &Notice) {
        if !matches!(notice, Notice::CapabilityUnavailable(_)) {
            self.inner.advise(notice);
        }
    }
}

/// Picks the tag from the file extension. Stdin and extensionless paths get an
/// empty tag, which the converter treats as plaintext.
fn resolve_texttype(config: &ConverterConfig, input: &Path) -> String {
    if input == Path::new(STDIN_PATH) {
        return String::new();
    }
    config.texttype_for(input).unwrap_or_default()
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new(STDIN_PATH) {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .into_diagnostic()
            .wrap_err("Failed to read stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", input.display()))
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).into_diagnostic()?;
            stdout.flush().into_diagnostic()
        }
    }
}
