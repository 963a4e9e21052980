//! Format dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::MessageCatalogExtractor;
use crate::config::ConverterConfig;
use crate::{
    ConvertError, DiagnosticSink, Extractor, FileType, HtmlExtractor, MarkdownExtractor,
    NotebookExtractor, Notice, PlainTextExtractor, PropertiesExtractor, RstExtractor,
    TracingSink, TransifexExtractor, XliffExtractor,
};

/// Routes content to the extractor registered for its file-type tag.
///
/// Tags are matched exactly. Content with an unknown tag is returned
/// unchanged after an [`Notice::UnknownFileType`] advisory.
pub struct Converter {
    extractors: HashMap<&'static str, Arc<dyn Extractor>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Converter {
    /// Creates a converter with the default configuration, reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_config(&ConverterConfig::default())
    }

    /// Creates a converter with every built-in extractor configured from `config`.
    pub fn with_config(config: &ConverterConfig) -> Self {
        let html = HtmlExtractor::from_config(&config.html);
        let markdown = MarkdownExtractor::new(html.clone());

        let mut converter = Self {
            extractors: HashMap::new(),
            sink: Arc::new(TracingSink),
        };
        converter.register(PlainTextExtractor::new());
        converter.register(html.clone());
        converter.register(markdown.clone());
        converter.register(RstExtractor::new(html));
        converter.register(NotebookExtractor::new(markdown));
        converter.register(TransifexExtractor::new());
        converter.register(XliffExtractor::new());
        converter.register(PropertiesExtractor::from_config(&config.properties));
        converter.register(MessageCatalogExtractor::m());
        converter.register(MessageCatalogExtractor::tkmsg());
        converter
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Registers an extractor under every tag of its file type, replacing any
    /// previous extractor for those tags.
    pub fn register<E: Extractor + 'static>(&mut self, extractor: E) {
        let extractor: Arc<dyn Extractor> = Arc::new(extractor);
        for tag in extractor.file_type().tags() {
            self.extractors.insert(*tag, Arc::clone(&extractor));
        }
    }

    /// Returns the extractor for a tag, if one is registered.
    pub fn extractor_for(&self, texttype: &str) -> Option<&Arc<dyn Extractor>> {
        self.extractors.get(texttype)
    }

    /// Converts `source` of the given file-type tag to plaintext.
    pub fn convert(&self, source: &str, texttype: &str) -> Result<String, ConvertError> {
        let Some(extractor) = self.extractor_for(texttype) else {
            self.sink.advise(&Notice::UnknownFileType {
                texttype: texttype.to_string(),
            });
            return Ok(source.to_string());
        };

        debug!(
            extractor = extractor.name(),
            bytes = source.len(),
            "Converting {} content",
            texttype
        );

        extractor
            .extract(source, self.sink.as_ref())
            .inspect_err(|e| {
                if let ConvertError::CapabilityUnavailable(missing) = e {
                    self.sink.advise(&Notice::CapabilityUnavailable(*missing));
                }
            })
    }

    /// Converts `source` of a known file type.
    pub fn convert_as(&self, source: &str, file_type: FileType) -> Result<String, ConvertError> {
        self.convert(source, file_type.tag())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.extractors.keys().collect();
        tags.sort_unstable();
        f.debug_struct("Converter")
            .field("tags", &tags)
            .finish_non_exhaustive()
    }
}
