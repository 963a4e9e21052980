//! Legacy printf-style placeholder directives in message catalogs.
//!
//! A directive is `%`, an optional `-` flag, an optional width digit, an
//! optional positional index (`#1,` or `2,`), further digits, then the
//! optional `@`, `l` and `*` modifiers and a conversion letter. Each directive
//! is rewritten to `{letter}` so the spellchecker sees a single neutral token.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Conversion letters recognised at the end of a directive.
pub const CONVERSION_LETTERS: &str = "ahkmnqtwzscbxpodifeguvy";

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"%-?\d?(?:#?\d,?)?\d*@?l?\*?(?P<conv>[{CONVERSION_LETTERS}])"
    ))
    .expect("Invalid placeholder pattern")
});

/// Rewrites every directive in `message` to `{letter}`.
///
/// Returns the input borrowed when nothing matched.
pub fn normalize_placeholders(message: &str) -> Cow<'_, str> {
    DIRECTIVE.replace_all(message, |caps: &Captures<'_>| format!("{{{}}}", &caps["conv"]))
}
