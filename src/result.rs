//! Result types for quote extraction output.

use serde::Serialize;

/// Where the quoted source content was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The rendered post inside the reply dialog (the common popup case).
    #[default]
    ReplyDialog,

    /// The page's first rendered post, used when no dialog article yielded
    /// text. May not be the exact post being replied to.
    PageArticle,
}

/// Result of quote extraction from a page snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuoteResult {
    /// Normalized quote text, ready for insertion into the reply field.
    pub text: String,

    /// Author display name of the quoted post, as rendered.
    pub author: Option<String>,

    /// The media link retained as the trailing line, canonical form.
    pub media_link: Option<String>,

    /// Where the source content was found.
    pub provenance: Provenance,

    /// Non-fatal conditions encountered during extraction, such as:
    /// - The page-article fallback was used instead of the reply dialog
    /// - Extra media links were discovered and dropped
    pub warnings: Vec<String>,
}

/// Output of [`normalize_full`](crate::normalize::normalize_full).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// The normalized text.
    pub text: String,

    /// Every media link discovered, canonicalized, in first-seen order.
    /// The first entry is the one retained in `text`; the rest were
    /// dropped (a quote carries at most one attachment line).
    pub media_links: Vec<String>,
}
