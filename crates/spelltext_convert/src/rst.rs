//! reStructuredText extraction.
//!
//! The document is parsed with `rst_parser`, rendered to HTML5 with
//! `rst_renderer`, then reduced to text by the HTML extractor.

use crate::{ConvertError, DiagnosticSink, Extractor, FileType, HtmlExtractor};

/// reStructuredText to text extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RstExtractor {
    html: HtmlExtractor,
}

impl RstExtractor {
    pub fn new(html: HtmlExtractor) -> Self {
        Self { html }
    }

    /// Renders reStructuredText to an HTML5 fragment.
    #[cfg(feature = "rst")]
    pub fn rst_to_html(source: &str) -> Result<String, ConvertError> {
        // rst_parser rejects documents without a single block.
        if source.trim().is_empty() {
            return Ok(String::new());
        }

        let source = expand_literal_markers(source);
        let document = rst_parser::parse(&source).map_err(|e| ConvertError::Rst(e.to_string()))?;

        let mut html = Vec::with_capacity(source.len() * 2);
        rst_renderer::render_html(&document, &mut html, false)
            .map_err(|e| ConvertError::Rst(e.to_string()))?;

        String::from_utf8(html).map_err(|e| ConvertError::Rst(e.to_string()))
    }

    #[cfg(not(feature = "rst"))]
    pub fn rst_to_html(_source: &str) -> Result<String, ConvertError> {
        Err(ConvertError::CapabilityUnavailable(
            crate::MissingCapability::RST,
        ))
    }
}

/// Rewrites the `Paragraph::` shorthand as a paragraph ending in `:` followed
/// by a standalone `::` marker, the only literal block form rst_parser knows.
///
/// `Paragraph ::` loses the marker entirely. Directives (`.. code::`) and lines
/// made only of colons are left alone.
#[cfg(feature = "rst")]
fn expand_literal_markers(source: &str) -> std::borrow::Cow<'_, str> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut expanded = String::with_capacity(source.len() + 16);
    let mut changed = false;

    for (index, line) in lines.iter().enumerate() {
        let next_is_blank = lines
            .get(index + 1)
            .is_none_or(|next| next.trim().is_empty());

        match literal_marker_prefix(line) {
            Some(paragraph) if next_is_blank => {
                let indent = &line[..line.len() - line.trim_start().len()];
                expanded.push_str(paragraph);
                expanded.push_str("\n\n");
                expanded.push_str(indent);
                expanded.push_str("::");
                changed = true;
            }
            _ => expanded.push_str(line),
        }

        if index + 1 < lines.len() {
            expanded.push('\n');
        }
    }

    if changed {
        std::borrow::Cow::Owned(expanded)
    } else {
        std::borrow::Cow::Borrowed(source)
    }
}

/// Returns what remains of `line` once its trailing literal marker is removed,
/// or `None` when the line does not end a paragraph with the shorthand.
#[cfg(feature = "rst")]
fn literal_marker_prefix(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    let text = trimmed.strip_suffix("::")?;
    let body = text.trim_start();
    if body.is_empty() || body.starts_with("..") || body.chars().all(|c| c == ':') {
        return None;
    }

    if text.ends_with(char::is_whitespace) {
        Some(text.trim_end())
    } else {
        Some(&trimmed[..trimmed.len() - 1])
    }
}

impl Extractor for RstExtractor {
    fn name(&self) -> &str {
        "rst"
    }

    fn file_type(&self) -> FileType {
        FileType::Rst
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let html = Self::rst_to_html(source)?;
        self.html.html_to_text(&html)
    }
}
