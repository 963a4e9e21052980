//! Plain text passthrough.

use crate::{ConvertError, DiagnosticSink, Extractor, FileType};

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PlainTextExtractor {
    fn name(&self) -> &str {
        "text"
    }

    fn file_type(&self) -> FileType {
        FileType::Text
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        Ok(source.to_string())
    }
}
