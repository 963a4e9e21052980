//! Line-oriented message catalogs (`.m` and `tkmsg`).
//!
//! A translatable message is a tag line:
//!
//! ```text
//! # <tag> [<numeric-id>] <message>      (.m)
//! # <tag> [<numeric-id>] !<message>     (tkmsg)
//! ```
//!
//! Each line is matched on its own. Matching lines emit their message,
//! anything else emits an empty line, so output line `n` is always input
//! line `n`. Entries spanning several lines are not recognised.

use std::sync::LazyLock;

use regex::Regex;

use crate::placeholder::normalize_placeholders;
use crate::{ConvertError, DiagnosticSink, Extractor, FileType, Notice};

static M_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*(?P<msgtag>[\w\d_]+)\s+((?P<msgnum>\d+)\s+)?(?P<msg>.*$)")
        .expect("Invalid .m line pattern")
});

static TKMSG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*(?P<msgtag>[\w\d_]+)\s+((?P<msgnum>\d+)\s+)?!\s*(?P<msg>.*$)")
        .expect("Invalid tkmsg line pattern")
});

/// The two catalog grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDialect {
    /// `.m` files; placeholder directives are normalised.
    M,
    /// `tkmsg` files; the message follows a `!` marker and is used verbatim.
    TkMsg,
}

impl CatalogDialect {
    fn pattern(self) -> &'static Regex {
        match self {
            CatalogDialect::M => &*M_LINE,
            CatalogDialect::TkMsg => &*TKMSG_LINE,
        }
    }

    pub fn file_type(self) -> FileType {
        match self {
            CatalogDialect::M => FileType::MessageCatalog,
            CatalogDialect::TkMsg => FileType::TkMessageCatalog,
        }
    }

    pub fn normalizes_placeholders(self) -> bool {
        matches!(self, CatalogDialect::M)
    }
}

/// A parsed tag line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry<'a> {
    pub tag: &'a str,
    pub id: Option<u64>,
    pub body: &'a str,
}

impl<'a> MessageEntry<'a> {
    /// Parses one line in the given dialect.
    pub fn parse(dialect: CatalogDialect, line: &'a str) -> Option<Self> {
        let caps = dialect.pattern().captures(line)?;
        Some(Self {
            tag: caps.name("msgtag")?.as_str(),
            id: caps.name("msgnum").and_then(|m| m.as_str().parse().ok()),
            body: caps.name("msg")?.as_str(),
        })
    }
}

/// Message catalog to text extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalogExtractor {
    dialect: CatalogDialect,
}

impl MessageCatalogExtractor {
    pub fn new(dialect: CatalogDialect) -> Self {
        Self { dialect }
    }

    /// Extractor for `.m` catalogs.
    pub fn m() -> Self {
        Self::new(CatalogDialect::M)
    }

    /// Extractor for `tkmsg` catalogs.
    pub fn tkmsg() -> Self {
        Self::new(CatalogDialect::TkMsg)
    }

    pub fn dialect(&self) -> CatalogDialect {
        self.dialect
    }
}

impl Extractor for MessageCatalogExtractor {
    fn name(&self) -> &str {
        match self.dialect {
            CatalogDialect::M => "m",
            CatalogDialect::TkMsg => "tkmsg",
        }
    }

    fn file_type(&self) -> FileType {
        self.dialect.file_type()
    }

    fn extract(&self, source: &str, sink: &dyn DiagnosticSink) -> Result<String, ConvertError> {
        let mut text = String::with_capacity(source.len());

        for (index, line) in source.split('\n').enumerate() {
            let Some(entry) = MessageEntry::parse(self.dialect, line) else {
                text.push('\n');
                continue;
            };

            if self.dialect.normalizes_placeholders() {
                let normalized = normalize_placeholders(entry.body);
                if normalized != entry.body {
                    sink.advise(&Notice::PlaceholderRewrite {
                        line: index + 1,
                        before: entry.body.to_string(),
                        after: normalized.to_string(),
                    });
                }
                text.push_str(&normalized);
            } else {
                text.push_str(entry.body);
            }
            text.push('\n');
        }

        Ok(text)
    }
}
