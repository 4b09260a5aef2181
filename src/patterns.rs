//! Compiled regex patterns and CSS selectors for quote extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`.
//! Selector strings mirror the host application's attribute conventions;
//! they are fixed tables, not configuration, and may need updating when
//! the host markup changes.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Media Link Patterns
// =============================================================================

/// Matches a media short link anywhere in a line, with or without scheme.
///
/// The path charset is alphanumeric only, so trailing punctuation never
/// becomes part of a match.
pub static MEDIA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://)?pic\.(?:x|twitter)\.com/[A-Za-z0-9]+")
        .expect("MEDIA_LINK regex")
});

/// Matches a line that is exactly a bare scheme prefix.
///
/// The host page sometimes wraps a link across two text nodes, leaving
/// `https://` alone on one line and the host path on the next.
pub static SCHEME_ONLY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://$").expect("SCHEME_ONLY_LINE regex"));

/// Matches a line that is exactly a media-host path (no scheme).
pub static MEDIA_PATH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^pic\.(?:x|twitter)\.com/[A-Za-z0-9]+$").expect("MEDIA_PATH_LINE regex")
});

// =============================================================================
// Boilerplate Line Patterns
// =============================================================================

/// Matches a line that is a bare handle, e.g. `@alice`.
pub static HANDLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]+$").expect("HANDLE_LINE regex"));

/// Matches UI counter lines, e.g. `3 Likes`, `1,200 Reposts`, `12.4K Views`.
pub static COUNTER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\d[\d,.]*\s*[KMB]?\s+(?:repl(?:y|ies)|repost(?:s)?|retweet(?:s)?|like(?:s)?|view(?:s)?|bookmark(?:s)?|quote(?:s)?)$",
    )
    .expect("COUNTER_LINE regex")
});

/// Matches relative-timestamp lines from the byline block, e.g. `2h`, `45m`.
pub static RELATIVE_TIME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[smhd]$").expect("RELATIVE_TIME_LINE regex"));

// =============================================================================
// Author Name Normalization Patterns
// =============================================================================

/// Matches pictographic code points and emoji joiners in display names.
///
/// `Emoji_Component` is deliberately not used: it covers ASCII digits,
/// `#` and `*`, which are legitimate name characters.
pub static PICTOGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\u{200D}\u{FE0F}]")
        .expect("PICTOGRAPHS regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches runs of two or more spaces left behind by substring removal.
pub static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"  +").expect("MULTI_SPACE regex"));

// =============================================================================
// CSS Selectors (host application attribute conventions)
// =============================================================================

/// Reply-field candidates, probed in order; the first selector that yields
/// plausible reply boxes wins.
pub const REPLY_FIELD_SELECTORS: &[&str] = &[
    "[data-testid='tweetTextarea_0']",
    "[contenteditable='true'][role='textbox']",
    "div[contenteditable='true'][data-testid^='tweetTextarea']",
];

/// Selector for dialog containers (popup reply composers live in one).
pub const DIALOG_SELECTOR: &str = "[role='dialog']";

/// Selector for the rendered-post container.
pub const ARTICLE_SELECTOR: &str = "article, [role='article']";

/// Selector for nodes tagged as post body text.
pub const BODY_TEXT_SELECTOR: &str = "[data-testid='tweetText']";

/// Text-bearing nodes: tagged body text plus generic language-tagged nodes
/// (catches headline-style content not tagged as body text).
pub const TEXT_BEARING_SELECTOR: &str = "[data-testid='tweetText'], [lang]";

/// Selector for the author name container inside a post.
pub const AUTHOR_SELECTOR: &str = "[data-testid='User-Name']";

/// Selector for the "Replying to @…" marker node.
pub const REPLYING_TO_SELECTOR: &str = "[data-testid='replyingToUsername']";

/// Selector for editable composer regions.
pub const EDITABLE_SELECTOR: &str = "[contenteditable='true']";

/// Selector for a dialog close control (reply popups carry one).
pub const CLOSE_CONTROL_SELECTOR: &str = "[aria-label='Close']";
