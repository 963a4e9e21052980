//! Advisory notices raised during conversion.
//!
//! Notices never change the converted text. They are routed through a
//! [`DiagnosticSink`] so hosts can log, collect, or drop them.

use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::MissingCapability;

/// An advisory raised while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The file-type tag is not one of the known tags; the source is passed through.
    UnknownFileType { texttype: String },

    /// Placeholder directives in a message catalog line were rewritten.
    PlaceholderRewrite {
        /// 1-based line number in the source.
        line: usize,
        before: String,
        after: String,
    },

    /// The converter for a requested format is not compiled in.
    CapabilityUnavailable(MissingCapability),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::UnknownFileType { .. } => {
                write!(f, "filetype not detected, assuming plaintext")
            }
            Notice::PlaceholderRewrite { before, after, .. } => write!(f, "{before}\n{after}"),
            Notice::CapabilityUnavailable(missing) => write!(f, "{missing}"),
        }
    }
}

/// Receiver for conversion notices.
pub trait DiagnosticSink: Send + Sync {
    /// Records a single advisory.
    fn advise(&self, notice: &Notice);
}

/// Forwards notices to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn advise(&self, notice: &Notice) {
        match notice {
            Notice::UnknownFileType { texttype } => info!(texttype = %texttype, "{notice}"),
            Notice::PlaceholderRewrite {
                line,
                before,
                after,
            } => debug!(
                line = *line,
                before = %before,
                after = %after,
                "rewrote placeholder directives"
            ),
            Notice::CapabilityUnavailable(missing) => warn!("{missing}"),
        }
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn advise(&self, _notice: &Notice) {}
}

/// Keeps notices in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the notices recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Removes and returns the recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn advise(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}
