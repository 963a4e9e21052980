//! Markdown extraction using markdown-rs (wooorm/markdown-rs).
//!
//! The source is rendered to HTML with GFM extensions and handed to the HTML
//! extractor, so fenced code, inline code and raw `<script>` blocks are all
//! dropped by the same rules.

use crate::{ConvertError, DiagnosticSink, Extractor, FileType, HtmlExtractor};

/// Markdown to text extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownExtractor {
    html: HtmlExtractor,
}

impl MarkdownExtractor {
    pub fn new(html: HtmlExtractor) -> Self {
        Self { html }
    }

    /// Renders Markdown to HTML.
    #[cfg(feature = "markdown")]
    pub fn markdown_to_html(source: &str) -> Result<String, ConvertError> {
        use markdown::{CompileOptions, Options, ParseOptions};

        // Raw HTML must survive rendering so the HTML stage can strip it.
        // The GFM tag filter is left off: it would escape `<script>` into text.
        let options = Options {
            parse: ParseOptions::gfm(),
            compile: CompileOptions {
                allow_dangerous_html: true,
                ..CompileOptions::default()
            },
        };

        markdown::to_html_with_options(source, &options)
            .map_err(|e| ConvertError::Markdown(e.to_string()))
    }

    #[cfg(not(feature = "markdown"))]
    pub fn markdown_to_html(_source: &str) -> Result<String, ConvertError> {
        Err(ConvertError::CapabilityUnavailable(
            crate::MissingCapability::MARKDOWN,
        ))
    }
}

impl Extractor for MarkdownExtractor {
    fn name(&self) -> &str {
        "markdown"
    }

    fn file_type(&self) -> FileType {
        FileType::Markdown
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let html = Self::markdown_to_html(source)?;
        self.html.html_to_text(&html)
    }
}
