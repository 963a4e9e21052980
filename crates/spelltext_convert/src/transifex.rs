//! Transifex JSON export extraction.
//!
//! Exports are two-level objects, `{category: {key: translation}}`. Every
//! translation is emitted on its own line in document order (`serde_json` is
//! built with `preserve_order`).

use serde_json::Value;

use crate::{ConvertError, DiagnosticSink, Extractor, FileType};

/// Transifex JSON to text extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransifexExtractor;

impl TransifexExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for TransifexExtractor {
    fn name(&self) -> &str {
        "transifex-json"
    }

    fn file_type(&self) -> FileType {
        FileType::TransifexJson
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let data: Value = serde_json::from_str(source)?;
        let categories = data
            .as_object()
            .ok_or_else(|| ConvertError::invalid_transifex("top level must be an object"))?;

        let mut text = String::new();
        for (category, content) in categories {
            let entries = content.as_object().ok_or_else(|| {
                ConvertError::invalid_transifex(format!("category `{category}` must be an object"))
            })?;

            for (key, value) in entries {
                let value = value.as_str().ok_or_else(|| {
                    ConvertError::invalid_transifex(format!(
                        "value of `{category}.{key}` must be a string"
                    ))
                })?;
                text.push_str(value);
                text.push('\n');
            }
        }

        Ok(text)
    }
}
