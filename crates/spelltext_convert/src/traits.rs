//! Extractor trait definition.

use crate::{ConvertError, DiagnosticSink, FileType};

/// Trait for turning the raw content of one format into spellcheckable text.
///
/// Implementations are stateless between calls and may be shared across
/// threads.
///
/// # Example
///
/// ```rust,ignore
/// use spelltext_convert::{ConvertError, DiagnosticSink, Extractor, FileType};
///
/// struct Shouting;
///
/// impl Extractor for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn file_type(&self) -> FileType {
///         FileType::Text
///     }
///
///     fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// Returns the name of this extractor.
    fn name(&self) -> &str;

    /// Returns the format this extractor handles.
    fn file_type(&self) -> FileType;

    /// Extracts plaintext from `source`.
    ///
    /// Advisories go to `sink`; they never affect the returned text.
    fn extract(&self, source: &str, sink: &dyn DiagnosticSink) -> Result<String, ConvertError>;

    /// Returns true if this extractor handles the given file-type tag.
    ///
    /// Tags are case-sensitive.
    fn can_extract(&self, tag: &str) -> bool {
        self.file_type().tags().contains(&tag)
    }
}
