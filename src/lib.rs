//! # replyquote
//!
//! Reply-composer quote extraction for social web UIs.
//!
//! Given a snapshot of a page with an active reply composer, this library
//! locates the post being replied to, extracts its text while filtering
//! interface chrome (author bylines, counters, action labels, the user's
//! own draft), normalizes it (merging split media links, relocating a
//! single media link to the end), and prepares it for insertion into the
//! reply field in a way the host application registers as user input.
//!
//! ## Quick Start
//!
//! ```rust
//! use replyquote::extract_quote;
//!
//! let html = r#"<div role="dialog">
//!   <article>
//!     <div data-testid="User-Name">Alice</div>
//!     <div data-testid="tweetText">Hello world</div>
//!   </article>
//!   <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
//! </div>"#;
//!
//! let result = extract_quote(html)?;
//! assert_eq!(result.text, "Hello world");
//! assert_eq!(result.author.as_deref(), Some("Alice"));
//! # Ok::<(), replyquote::Error>(())
//! ```
//!
//! ## Pieces
//!
//! - **Extraction**: dialog-first source location with a page-article
//!   fallback; degrades to an error, never a panic, when host markup
//!   changes underneath it.
//! - **Normalization**: a pure string transform, usable on its own via
//!   [`normalize`].
//! - **Insertion**: the [`composer::ReplyField`] capability trait carries
//!   the native-command-then-fallback insertion contract to the live page.
//! - **Orchestration**: [`handler::handle_reply_click`] ties extraction,
//!   the review prompt, and insertion together with per-target
//!   idempotency from [`registry::TargetRegistry`].

mod error;
mod options;
mod pipeline;
mod result;

/// Tree-query capability adapter over the page snapshot.
pub mod dom;

/// Character encoding detection and transcoding for snapshots.
pub mod encoding;

/// Compiled regex patterns and host-application selector tables.
pub mod patterns;

/// Reply-target discovery and reconciliation.
pub mod scan;

/// Source-content extraction (dialog path, fallback, chrome filtering).
pub mod extractor;

/// Pure text normalization (link merge/extraction, blank-line policy).
pub mod normalize;

/// Media short-link recognition and canonical form.
pub mod media_links;

/// Insertion contract against the live reply field.
pub mod composer;

/// Per-reply-target processing state.
pub mod registry;

/// Click orchestration: extract, prompt, insert.
pub mod handler;

// Public API - re-exports
pub use composer::{InsertionMethod, ReplyField, SyntheticEvent};
pub use error::{Error, Result};
pub use handler::{ClickOutcome, UserNotice};
pub use normalize::{normalize, normalize_full};
pub use options::Options;
pub use registry::{TargetRegistry, TargetState};
pub use result::{Normalized, Provenance, QuoteResult};

/// Extracts the quoted post's text from a page snapshot using default
/// options.
///
/// # Arguments
///
/// * `html` - The page snapshot as a string slice
///
/// # Returns
///
/// Returns `Ok(QuoteResult)` when a reply composer and source content were
/// found. Returns an `Error` when no composer is active, or no source
/// content could be located for it.
///
/// # Example
///
/// ```rust
/// use replyquote::extract_quote;
///
/// let html = r#"<div role="dialog">
///   <article><div data-testid="tweetText">Original post</div></article>
///   <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
/// </div>"#;
/// let result = extract_quote(html)?;
/// assert_eq!(result.text, "Original post");
/// # Ok::<(), replyquote::Error>(())
/// ```
pub fn extract_quote(html: &str) -> Result<QuoteResult> {
    extract_quote_with_options(html, &Options::default())
}

/// Extracts the quoted post's text from a page snapshot with custom
/// options.
///
/// # Example
///
/// ```rust
/// use replyquote::{extract_quote_with_options, Options};
///
/// let html = r#"<div role="dialog">
///   <article><div data-testid="tweetText">Original post</div></article>
///   <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
/// </div>"#;
/// let mut options = Options::default();
/// options.boilerplate_labels.push("Promoted".to_string());
/// let result = extract_quote_with_options(html, &options)?;
/// assert_eq!(result.text, "Original post");
/// # Ok::<(), replyquote::Error>(())
/// ```
pub fn extract_quote_with_options(html: &str, options: &Options) -> Result<QuoteResult> {
    pipeline::extract_quote_impl(html, options)
}

/// Extracts the quoted post's text from snapshot bytes with automatic
/// encoding detection.
///
/// Saved pages may carry a legacy charset declared in a meta tag; the
/// bytes are transcoded to UTF-8 before extraction, replacing invalid
/// characters rather than erroring.
pub fn extract_quote_bytes(html: &[u8]) -> Result<QuoteResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_quote(&html_str)
}

/// Extracts the quoted post's text from snapshot bytes with custom options
/// and automatic encoding detection.
pub fn extract_quote_bytes_with_options(html: &[u8], options: &Options) -> Result<QuoteResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_quote_with_options(&html_str, options)
}
