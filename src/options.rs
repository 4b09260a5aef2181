//! Configuration options for quote extraction.
//!
//! The `Options` struct carries the boilerplate deny-list and the bounded
//! search depths used when probing the page snapshot. Selector and pattern
//! tables live in `patterns` and are not configurable.

/// Configuration options for quote extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use replyquote::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Extend the boilerplate deny-list without touching extraction logic
/// let mut options = Options::default();
/// options.boilerplate_labels.push("Traducir post".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Interface-generated labels to drop as whole lines, compared after
    /// trimming. Counters ("3 Likes") are matched by pattern and need no
    /// entry here.
    ///
    /// Default: `["Translate", "Translate post", "Show more", "Show this thread"]`
    pub boilerplate_labels: Vec<String>,

    /// Prefix marking reply-context lines ("Replying to @…"). Used both to
    /// recognize reply composers and to drop the marker line from
    /// extracted text.
    ///
    /// Default: `"Replying to"`
    pub reply_context_marker: String,

    /// Only offer extraction for fields that look like reply composers
    /// (as opposed to the main compose box).
    ///
    /// Default: `true`
    pub require_reply_context: bool,

    /// Minimum character count for a body-text fragment to survive the
    /// page-article fallback path.
    ///
    /// Default: `5`
    pub min_fallback_text_len: usize,

    /// How many ancestor levels to climb when probing whether a field sits
    /// in a reply context.
    ///
    /// Default: `15`
    pub max_reply_ancestor_depth: usize,

    /// How many ancestor levels to climb when searching for the writable
    /// field near a reply target.
    ///
    /// Default: `5`
    pub max_field_search_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            boilerplate_labels: vec![
                "Translate".to_string(),
                "Translate post".to_string(),
                "Show more".to_string(),
                "Show this thread".to_string(),
            ],
            reply_context_marker: "Replying to".to_string(),
            require_reply_context: true,
            min_fallback_text_len: 5,
            max_reply_ancestor_depth: 15,
            max_field_search_depth: 5,
        }
    }
}
