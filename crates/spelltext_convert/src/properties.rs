//! Java-style `.properties` extraction.
//!
//! Every input line yields exactly one output line: the value of a
//! `key = value` pair, or an empty line for comments, blank lines, and keys
//! excluded from spellchecking. Values cannot span lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PropertiesConfig;
use crate::{ConvertError, DiagnosticSink, Extractor, FileType};

static PROPERTY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<key>[^=]*?)\s*=\s*(?P<value>.*?)\s*$").expect("Invalid property pattern")
});

/// A `key = value` pair split on the first `=`, both sides trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Property<'a> {
    /// Parses a single line; `None` when the line has no `=`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = PROPERTY_LINE.captures(line)?;
        Some(Self {
            key: caps.name("key")?.as_str(),
            value: caps.name("value")?.as_str(),
        })
    }
}

/// Properties to text extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesExtractor {
    excluded_suffixes: Vec<String>,
}

impl PropertiesExtractor {
    pub fn new() -> Self {
        Self::from_config(&PropertiesConfig::default())
    }

    pub fn from_config(config: &PropertiesConfig) -> Self {
        Self {
            excluded_suffixes: config.excluded_suffixes.clone(),
        }
    }

    /// Whether values under `key` are kept out of spellchecking.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_suffixes
            .iter()
            .any(|suffix| key.ends_with(suffix.as_str()))
    }
}

impl Default for PropertiesExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PropertiesExtractor {
    fn name(&self) -> &str {
        "properties"
    }

    fn file_type(&self) -> FileType {
        FileType::Properties
    }

    fn extract(&self, source: &str, _sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let mut text = String::with_capacity(source.len());
        for line in source.split('\n') {
            match Property::parse(line) {
                Some(property) if !self.is_excluded(property.key) => text.push_str(property.value),
                _ => {}
            }
            text.push('\n');
        }
        Ok(text)
    }
}
