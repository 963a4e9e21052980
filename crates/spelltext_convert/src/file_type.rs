//! File-type tags understood by the converter.

use std::fmt;
use std::path::Path;

/// Every tag with a dedicated converter, in the order they are documented.
pub const SUPPORTED_EXTENSIONS: [&str; 11] = [
    "txt",
    "html",
    "md",
    "markdown",
    "rst",
    "ipynb",
    "json",
    "xliff",
    "properties",
    "m",
    "tkmsg",
];

/// A known input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Text,
    Html,
    Markdown,
    Rst,
    Notebook,
    TransifexJson,
    Xliff,
    Properties,
    MessageCatalog,
    TkMessageCatalog,
}

impl FileType {
    pub const ALL: [FileType; 10] = [
        FileType::Text,
        FileType::Html,
        FileType::Markdown,
        FileType::Rst,
        FileType::Notebook,
        FileType::TransifexJson,
        FileType::Xliff,
        FileType::Properties,
        FileType::MessageCatalog,
        FileType::TkMessageCatalog,
    ];

    /// Looks up a tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|file_type| file_type.tags().contains(&tag))
    }

    /// Looks up the tag named by a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_tag)
    }

    /// The tags routed to this format.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            FileType::Text => &["txt"],
            FileType::Html => &["html"],
            FileType::Markdown => &["md", "markdown"],
            FileType::Rst => &["rst"],
            FileType::Notebook => &["ipynb"],
            FileType::TransifexJson => &["json"],
            FileType::Xliff => &["xliff"],
            FileType::Properties => &["properties"],
            FileType::MessageCatalog => &["m"],
            FileType::TkMessageCatalog => &["tkmsg"],
        }
    }

    /// The primary tag.
    pub fn tag(self) -> &'static str {
        self.tags()[0]
    }

    /// Human readable format name.
    pub fn name(self) -> &'static str {
        match self {
            FileType::Text => "plain text",
            FileType::Html => "HTML",
            FileType::Markdown => "Markdown",
            FileType::Rst => "reStructuredText",
            FileType::Notebook => "Jupyter notebook",
            FileType::TransifexJson => "Transifex JSON",
            FileType::Xliff => "XLIFF",
            FileType::Properties => "properties",
            FileType::MessageCatalog => "message catalog",
            FileType::TkMessageCatalog => "tk message catalog",
        }
    }

    /// Whether output line `n` always corresponds to input line `n`.
    pub fn is_line_aligned(self) -> bool {
        matches!(
            self,
            FileType::Text
                | FileType::Properties
                | FileType::MessageCatalog
                | FileType::TkMessageCatalog
        )
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
