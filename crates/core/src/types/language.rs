use serde::{Deserialize, Serialize};
use std::fmt;

/// Language aliases folded onto a canonical key before any lookup
const LANGUAGE_ALIASES: &[(&str, &str)] = &[("objective-c", "c")];

/// A normalized language identifier used as a configuration key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    /// Normalize a raw identifier. Known aliases map onto their canonical
    /// key, everything else passes through unchanged.
    pub fn normalize(raw: &str) -> Self {
        let canonical = LANGUAGE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == raw)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(raw);
        Self(canonical.to_string())
    }

    /// Identifier of the active document, or the empty identifier when
    /// there is no document.
    pub fn from_document(language_id: Option<&str>) -> Self {
        Self::normalize(language_id.unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageId {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}
