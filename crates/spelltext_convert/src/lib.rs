//! # spelltext_convert
//!
//! Plaintext extraction for spellchecking.
//!
//! This crate provides:
//! - A `Converter` that dispatches on a file-type tag
//! - Markup extractors (HTML, Markdown, reStructuredText, Jupyter notebooks)
//! - Translation export extractors (Transifex JSON, XLIFF, properties)
//! - Message catalog extractors (`.m` and `tkmsg`)
//!
//! ## Line alignment
//!
//! The properties and message catalog extractors emit exactly one output line
//! per input line, blanking anything that is not translatable prose, so a
//! spellchecker's line numbers map straight back to the source.
//!
//! ## Example
//!
//! ```rust
//! let text = spelltext_convert::convert("# GREET 1 Hello %s, welcome", "m").unwrap();
//! assert_eq!(text, "Hello {s}, welcome\n");
//! ```

mod catalog;
mod config;
mod converter;
mod diagnostics;
mod error;
mod file_type;
mod html;
mod markdown;
mod notebook;
mod placeholder;
mod properties;
mod rst;
mod text;
mod traits;
mod transifex;
mod xliff;

use std::sync::LazyLock;

pub use catalog::{CatalogDialect, MessageCatalogExtractor, MessageEntry};
pub use config::{ConverterConfig, HtmlConfig, PropertiesConfig};
pub use converter::Converter;
pub use diagnostics::{CollectingSink, DiagnosticSink, Notice, NullSink, TracingSink};
pub use error::{
    CONVERSION_FAILURE_EXIT_CODE, ConvertError, MISSING_CAPABILITY_EXIT_CODE, MissingCapability,
};
pub use file_type::{FileType, SUPPORTED_EXTENSIONS};
pub use html::HtmlExtractor;
pub use markdown::MarkdownExtractor;
pub use notebook::{NotebookExtractor, notebook_to_markdown};
pub use placeholder::{CONVERSION_LETTERS, normalize_placeholders};
pub use properties::{PropertiesExtractor, Property};
pub use rst::RstExtractor;
pub use text::PlainTextExtractor;
pub use traits::Extractor;
pub use transifex::TransifexExtractor;
pub use xliff::{XLIFF_NAMESPACE, XliffExtractor};

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::new);

/// Converts `source` to plaintext using the default configuration.
///
/// Unknown `texttype` values are treated as plaintext. Notices are reported
/// through `tracing`.
pub fn convert(source: &str, texttype: &str) -> Result<String, ConvertError> {
    DEFAULT_CONVERTER.convert(source, texttype)
}
