//! Placeholder substitution for command templates
//!
//! The templating language is a closed set of four tokens:
//!
//! | token         | value                                            |
//! |---------------|--------------------------------------------------|
//! | `<file>`      | absolute path to the source file                 |
//! | `<outDir>`    | absolute path to the compile output directory    |
//! | `<out>`       | output base name (file name without extension)   |
//! | `<workspace>` | absolute path to the workspace root              |
//!
//! Any other bracketed text is left alone.

mod bindings;
mod placeholder;

pub use bindings::Bindings;
pub use placeholder::Placeholder;

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z]+>").expect("token pattern is valid"));

/// Replace every occurrence of each bound placeholder in `template`.
///
/// Placeholders without a binding stay as literal text. A value that itself
/// contains a placeholder token may be rewritten again by a later binding,
/// so bound values must not contain tokens.
pub fn substitute(template: &str, bindings: &Bindings) -> String {
    bindings
        .iter()
        .fold(template.to_string(), |acc, (placeholder, value)| {
            acc.replace(placeholder.token(), value)
        })
}

/// Recognized placeholders used by `template`, in order of first appearance
pub fn placeholders_in(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    for token in TOKEN_PATTERN.find_iter(template) {
        if let Some(placeholder) = Placeholder::from_token(token.as_str()) {
            if !found.contains(&placeholder) {
                found.push(placeholder);
            }
        }
    }
    found
}

/// Recognized placeholders in `template` that `bindings` leaves unfilled
pub fn unbound_placeholders(template: &str, bindings: &Bindings) -> Vec<Placeholder> {
    placeholders_in(template)
        .into_iter()
        .filter(|placeholder| !bindings.is_bound(*placeholder))
        .collect()
}
