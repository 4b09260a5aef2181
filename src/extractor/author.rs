//! Author display-name detection and matching.
//!
//! Display names on the host application carry emoji decorations and
//! irregular whitespace; comparisons run against a normalized form so an
//! author line like `Alice 🌟` still matches a rendered fragment `Alice`.

use crate::dom::{self, Selection};
use crate::patterns::{AUTHOR_SELECTOR, PICTOGRAPHS, WHITESPACE_RUN};

/// The quoted post's author display name, raw and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName {
    /// Display name as rendered, e.g. `Alice 🌟`.
    pub raw: String,

    /// Pictographs stripped, whitespace collapsed, e.g. `Alice`.
    pub normalized: String,
}

impl AuthorName {
    /// Whether a text fragment is this author's name line.
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        fragment == self.raw
            || fragment == self.normalized
            || normalize_display_name(fragment) == self.normalized
    }
}

/// Locate the author name container inside an article and build a matcher.
///
/// The name container renders as `Name / @handle / · / date`; the display
/// name is its first non-empty, non-handle line.
#[must_use]
pub(crate) fn detect(article: &Selection) -> Option<AuthorName> {
    let container = dom::first_match(article, AUTHOR_SELECTOR)?;
    let text = dom::text_content(&container);
    let raw = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('@'))?
        .to_string();
    let normalized = normalize_display_name(&raw);
    if normalized.is_empty() {
        // Pictograph-only display name; the raw form is still usable.
        return Some(AuthorName {
            normalized: raw.clone(),
            raw,
        });
    }
    Some(AuthorName { raw, normalized })
}

/// Strip pictographic code points and collapse whitespace runs.
#[must_use]
pub fn normalize_display_name(name: &str) -> String {
    let stripped = PICTOGRAPHS.replace_all(name, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), " ").to_string()
}
