//! Conversion error types.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Exit status a host process should use when a converter is compiled out.
pub const MISSING_CAPABILITY_EXIT_CODE: u8 = 4;

/// Exit status for every other conversion failure.
pub const CONVERSION_FAILURE_EXIT_CODE: u8 = 2;

/// A format converter that is not available in this build.
///
/// Each converter backed by a third-party parser sits behind a Cargo feature.
/// When the feature is disabled, requesting that conversion yields this value
/// instead of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCapability {
    /// The library that performs the conversion.
    pub capability: &'static str,
    /// Human readable name of the input format.
    pub from: &'static str,
    /// Human readable name of the output format.
    pub to: &'static str,
    /// The Cargo feature that enables the capability.
    pub feature: &'static str,
}

impl MissingCapability {
    pub const HTML: Self = Self {
        capability: "scraper",
        from: "HTML",
        to: "text",
        feature: "html",
    };

    pub const MARKDOWN: Self = Self {
        capability: "markdown",
        from: "markdown",
        to: "HTML",
        feature: "markdown",
    };

    pub const RST: Self = Self {
        capability: "rst_renderer",
        from: "ReStructuredText",
        to: "HTML",
        feature: "rst",
    };

    /// Instructions for getting the capability back.
    pub fn remediation(&self) -> String {
        format!(
            "you can enable it by rebuilding with:\ncargo build --features {}",
            self.feature
        )
    }
}

impl fmt::Display for MissingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is needed to convert {} to {}\n{}",
            self.capability,
            self.from,
            self.to,
            self.remediation()
        )
    }
}

/// Errors that can occur during conversion.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// The converter for the requested format was compiled out.
    #[error("{0}")]
    #[diagnostic(code(spelltext::capability_unavailable))]
    CapabilityUnavailable(MissingCapability),

    /// The source is not valid JSON.
    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(spelltext::invalid_json))]
    InvalidJson(#[from] serde_json::Error),

    /// The source is not well-formed XML.
    #[error("Invalid XML: {0}")]
    #[diagnostic(code(spelltext::invalid_xml))]
    InvalidXml(String),

    /// The source is JSON but not a notebook.
    #[error("Invalid notebook: {0}")]
    #[diagnostic(code(spelltext::invalid_notebook))]
    InvalidNotebook(String),

    /// The source is JSON but not a two-level translation export.
    #[error("Invalid Transifex export: {0}")]
    #[diagnostic(
        code(spelltext::invalid_transifex),
        help("expected {{\"category\": {{\"key\": \"translation\", ...}}, ...}}")
    )]
    InvalidTransifex(String),

    /// The Markdown renderer rejected the source.
    #[error("Markdown error: {0}")]
    #[diagnostic(code(spelltext::markdown))]
    Markdown(String),

    /// The reStructuredText parser or renderer failed.
    #[error("reStructuredText error: {0}")]
    #[diagnostic(code(spelltext::rst))]
    Rst(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    #[diagnostic(code(spelltext::config))]
    Config(String),
}

impl ConvertError {
    /// Creates an invalid XML error.
    pub fn invalid_xml(message: impl Into<String>) -> Self {
        Self::InvalidXml(message.into())
    }

    /// Creates an invalid notebook error.
    pub fn invalid_notebook(message: impl Into<String>) -> Self {
        Self::InvalidNotebook(message.into())
    }

    /// Creates an invalid Transifex export error.
    pub fn invalid_transifex(message: impl Into<String>) -> Self {
        Self::InvalidTransifex(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The process exit status matching this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CapabilityUnavailable(_) => MISSING_CAPABILITY_EXIT_CODE,
            _ => CONVERSION_FAILURE_EXIT_CODE,
        }
    }
}
