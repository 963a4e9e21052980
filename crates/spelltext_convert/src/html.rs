//! HTML text extraction using scraper (html5ever).
//!
//! Non-prose elements (scripts, styles, code, preformatted blocks and
//! anything carrying a `literal` class by default) are dropped together with
//! their subtree. The text nodes that remain are concatenated in document
//! order without reflowing whitespace.

use crate::config::HtmlConfig;
use crate::{ConvertError, DiagnosticSink, Extractor, FileType};

/// HTML to text extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlExtractor {
    skip_tags: Vec<String>,
    skip_classes: Vec<String>,
}

impl HtmlExtractor {
    /// Creates an extractor with the default skip rules.
    pub fn new() -> Self {
        Self::from_config(&HtmlConfig::default())
    }

    pub fn from_config(config: &HtmlConfig) -> Self {
        Self {
            skip_tags: config
                .skip_tags
                .iter()
                .map(|tag| tag.to_ascii_lowercase())
                .collect(),
            skip_classes: config.skip_classes.clone(),
        }
    }

    /// Converts an HTML document or fragment to text.
    #[cfg(feature = "html")]
    pub fn html_to_text(&self, html: &str) -> Result<String, ConvertError> {
        let document = scraper::Html::parse_document(html);
        let mut text = String::with_capacity(html.len());
        self.collect_text(document.root_element(), &mut text);
        Ok(text)
    }

    #[cfg(not(feature = "html"))]
    pub fn html_to_text(&self, _html: &str) -> Result<String, ConvertError> {
        Err(ConvertError::CapabilityUnavailable(
            crate::MissingCapability::HTML,
        ))
    }

    #[cfg(feature = "html")]
    fn collect_text(&self, element: scraper::ElementRef<'_>, out: &mut String) {
        if self.is_skipped(element.value()) {
            return;
        }

        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(text);
            } else if let Some(child) = scraper::ElementRef::wrap(child) {
                self.collect_text(child, out);
            }
        }
    }

    #[cfg(feature = "html")]
    fn is_skipped(&self, element: &scraper::node::Element) -> bool {
        self.skip_tags.iter().any(|tag| tag == element.name())
            || element
                .classes()
                .any(|class| self.skip_classes.iter().any(|skip| skip == class))
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HtmlExtractor {
    fn name(&self) -> &str {
        "html"
    }

    fn file_type(&self) -> FileType {
        FileType::Html
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        self.html_to_text(source)
    }
}
