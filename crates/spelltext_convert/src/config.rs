//! Converter configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::{ConvertError, FileType};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for the converters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterConfig {
    /// HTML text extraction rules (also used after Markdown and reStructuredText rendering).
    #[serde(default)]
    pub html: HtmlConfig,

    /// Properties file rules.
    #[serde(default)]
    pub properties: PropertiesConfig,

    /// Extra file extensions mapped to a known file-type tag (e.g. `"htm": "html"`).
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

/// Elements dropped before HTML text extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlConfig {
    #[serde(default = "default_skip_tags")]
    pub skip_tags: Vec<String>,

    #[serde(default = "default_skip_classes")]
    pub skip_classes: Vec<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            skip_tags: default_skip_tags(),
            skip_classes: default_skip_classes(),
        }
    }
}

fn default_skip_tags() -> Vec<String> {
    ["script", "style", "code", "pre"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_skip_classes() -> Vec<String> {
    vec!["literal".to_string()]
}

/// Keys whose values are never spellchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesConfig {
    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            excluded_suffixes: default_excluded_suffixes(),
        }
    }
}

fn default_excluded_suffixes() -> Vec<String> {
    vec![".lcl".to_string(), ".notrans".to_string()]
}

impl ConverterConfig {
    /// File names searched by [`ConverterConfig::discover`], in priority order.
    pub const CONFIG_FILES: [&'static str; 2] = [".spelltext.jsonc", ".spelltext.json"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Comments are allowed in both `.jsonc` and `.json` files.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConvertError::config(format!("Failed to read config: {}", e)))?;

        Self::from_jsonc(&content)
    }

    /// Parses configuration from JSONC with schema validation.
    pub fn from_jsonc(content: &str) -> Result<Self, ConvertError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ConvertError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ConvertError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ConvertError::config(format!("Invalid config: {}", e)))
    }

    /// Resolves the file-type tag for a path from its extension.
    ///
    /// Configured aliases win over the built-in tags. Returns `None` when the
    /// path has no extension; unknown extensions are returned as-is so the
    /// dispatcher can fall back to plaintext.
    pub fn texttype_for(&self, path: impl AsRef<Path>) -> Option<String> {
        let ext = path.as_ref().extension()?.to_str()?;

        if let Some(tag) = self.extensions.get(ext) {
            return Some(tag.clone());
        }

        Some(
            FileType::from_tag(ext)
                .map(|file_type| file_type.tag())
                .unwrap_or(ext)
                .to_string(),
        )
    }
}
