//! XLIFF 1.1 extraction using quick-xml.
//!
//! The document is walked as `root > file > body > trans-unit`, by position
//! rather than by element name. For each unit the first `target` child in the
//! XLIFF 1.1 namespace is read; its text is emitted followed by a blank
//! separator line. Units without a target, or with an empty one, produce no
//! output at all, so this format does not keep line alignment.

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

use crate::{ConvertError, DiagnosticSink, Extractor, FileType};

/// Namespace of the translated `target` elements.
pub const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.1";

// Element depths, counting the root as 1.
const TRANS_UNIT_DEPTH: usize = 4;
const TARGET_DEPTH: usize = 5;

/// XLIFF to text extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct XliffExtractor;

impl XliffExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the non-empty target texts, in document order.
    pub fn targets(source: &str) -> Result<Vec<String>, ConvertError> {
        let mut reader = NsReader::from_str(source);
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut unit_has_target = false;
        let mut target: Option<String> = None;
        let mut targets = Vec::new();

        loop {
            match reader.read_resolved_event() {
                Ok((ns, Event::Start(e))) => {
                    depth += 1;
                    seen_root = true;
                    match depth {
                        TRANS_UNIT_DEPTH => unit_has_target = false,
                        TARGET_DEPTH if !unit_has_target && is_target(&ns, e.local_name().as_ref()) => {
                            unit_has_target = true;
                            target = Some(String::new());
                        }
                        _ => {}
                    }
                }
                Ok((ns, Event::Empty(e))) => {
                    seen_root = true;
                    match depth + 1 {
                        TRANS_UNIT_DEPTH => unit_has_target = false,
                        TARGET_DEPTH if is_target(&ns, e.local_name().as_ref()) => {
                            unit_has_target = true;
                        }
                        _ => {}
                    }
                }
                Ok((_, Event::Text(e))) => {
                    if let Some(text) = target.as_mut() {
                        let unescaped = e
                            .unescape()
                            .map_err(|e| ConvertError::invalid_xml(e.to_string()))?;
                        text.push_str(&unescaped);
                    }
                }
                Ok((_, Event::CData(e))) => {
                    if let Some(text) = target.as_mut() {
                        text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok((_, Event::End(_))) => {
                    if depth == TARGET_DEPTH {
                        if let Some(text) = target.take().filter(|text| !text.is_empty()) {
                            targets.push(text);
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => {}
                Err(e) => return Err(ConvertError::invalid_xml(e.to_string())),
            }
        }

        if !seen_root {
            return Err(ConvertError::invalid_xml("no root element found"));
        }
        if depth != 0 {
            return Err(ConvertError::invalid_xml("unclosed element at end of document"));
        }

        Ok(targets)
    }
}

fn is_target(ns: &ResolveResult<'_>, local_name: &[u8]) -> bool {
    local_name == b"target"
        && matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == XLIFF_NAMESPACE.as_bytes())
}

impl Extractor for XliffExtractor {
    fn name(&self) -> &str {
        "xliff"
    }

    fn file_type(&self) -> FileType {
        FileType::Xliff
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let mut text = String::new();
        for target in Self::targets(source)? {
            text.push_str(&target);
            text.push_str("\n\n");
        }
        Ok(text)
    }
}
