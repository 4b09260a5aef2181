//! Error types for replyquote.
//!
//! This module defines the error types returned by quote-extraction
//! operations. Insertion-method failure is not represented here: the
//! composer recovers from it locally and it never crosses the API boundary.

/// Error type for quote-extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No active reply composer was found in the page snapshot.
    #[error("no active reply composer found")]
    NoReplyTarget,

    /// A reply target was found, but no source content could be located
    /// for it (neither in its dialog nor as the page's first post).
    #[error("no source content found for reply target")]
    NoSourceContent,

    /// Source text was obtained, but no writable field exists near the
    /// reply target to insert it into.
    #[error("no writable field found near the reply target")]
    InsertionTargetMissing,
}

/// Result type alias for quote-extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
