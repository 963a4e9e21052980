//! Jupyter notebook extraction.
//!
//! Only markdown cells are spellchecked. Their sources are joined into one
//! Markdown document, one cell per block, and run through the Markdown
//! extractor.

use serde::Deserialize;

use crate::{ConvertError, DiagnosticSink, Extractor, FileType, MarkdownExtractor};

#[derive(Debug, Deserialize)]
struct Notebook {
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// nbformat stores a cell source either as a list of lines or as one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Fragments(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Fragments(Vec::new())
    }
}

impl CellSource {
    fn push_to(&self, out: &mut String) {
        match self {
            CellSource::Fragments(fragments) => fragments.iter().for_each(|f| out.push_str(f)),
            CellSource::Text(text) => out.push_str(text),
        }
    }
}

/// Collects the markdown cells of a notebook into a single Markdown document.
///
/// Each cell's fragments are concatenated without a separator and followed by
/// a newline. Code and raw cells are skipped.
pub fn notebook_to_markdown(source: &str) -> Result<String, ConvertError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let notebook: Notebook =
        serde_json::from_value(value).map_err(|e| ConvertError::invalid_notebook(e.to_string()))?;

    let mut markdown = String::new();
    for cell in notebook
        .cells
        .iter()
        .filter(|cell| cell.cell_type == "markdown")
    {
        cell.source.push_to(&mut markdown);
        markdown.push('\n');
    }

    Ok(markdown)
}

/// Notebook to text extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookExtractor {
    markdown: MarkdownExtractor,
}

impl NotebookExtractor {
    pub fn new(markdown: MarkdownExtractor) -> Self {
        Self { markdown }
    }
}

impl Extractor for NotebookExtractor {
    fn name(&self) -> &str {
        "ipynb"
    }

    fn file_type(&self) -> FileType {
        FileType::Notebook
    }

    fn extract(&self, source: &str, sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let markdown = notebook_to_markdown(source)?;
        self.markdown.extract(&markdown, sink)
    }
}
