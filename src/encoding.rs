//! Character encoding detection and transcoding for page snapshots.
//!
//! Snapshots usually arrive as UTF-8, but saved pages may carry a legacy
//! charset declared in a meta tag. Detection looks at the declaration and
//! conversion is lossy, never failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` in the document head.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML snapshot.
///
/// Only the first 1024 bytes are examined; defaults to UTF-8 when no
/// declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(charset) = CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode an HTML snapshot to a UTF-8 string.
///
/// Invalid characters are replaced with the Unicode replacement character
/// rather than causing errors.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
