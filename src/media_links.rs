//! Media short-link recognition and canonicalization.
//!
//! A media link is a short URL pointing at an attached image or video,
//! recognized by a small fixed host table. Canonical form: scheme stripped,
//! trailing punctuation stripped, otherwise verbatim.

use url::Url;

use crate::patterns::{MEDIA_LINK, MEDIA_PATH_LINE};

/// Hosts recognized as media short links.
pub const MEDIA_HOSTS: &[&str] = &["pic.x.com", "pic.twitter.com"];

/// Trailing punctuation stripped from matched links.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Check whether a string is a media short link (with or without scheme).
///
/// Parses the candidate as a URL and compares its host against the fixed
/// media-host table, so near-miss hosts (`pic.x.com.evil.example`) are
/// rejected even when a substring matches.
#[must_use]
pub fn is_media_link(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    match Url::parse(&with_scheme) {
        Ok(url) => url
            .host_str()
            .is_some_and(|host| MEDIA_HOSTS.iter().any(|m| host.eq_ignore_ascii_case(m))),
        Err(_) => false,
    }
}

/// Check whether a trimmed line is exactly a media-host path (no scheme),
/// the second half of a link the host page wrapped across two text nodes.
#[must_use]
pub fn is_media_path_line(line: &str) -> bool {
    MEDIA_PATH_LINE.is_match(line) && is_media_link(line)
}

/// Canonicalize a matched media link: strip the scheme, strip trailing
/// punctuation, preserve the rest verbatim.
#[must_use]
pub fn canonicalize(link: &str) -> String {
    let trimmed = link.trim().trim_end_matches(TRAILING_PUNCTUATION);
    let without_scheme = trimmed
        .find("://")
        .filter(|pos| trimmed[..*pos].eq_ignore_ascii_case("http") || trimmed[..*pos].eq_ignore_ascii_case("https"))
        .map_or(trimmed, |pos| &trimmed[pos + 3..]);
    without_scheme.to_string()
}

/// Find every media link in a line, canonicalized, in match order.
#[must_use]
pub fn find_all(line: &str) -> Vec<String> {
    MEDIA_LINK
        .find_iter(line)
        .map(|m| canonicalize(m.as_str()))
        .collect()
}

/// Remove every media-link match from a line, leaving surrounding text.
#[must_use]
pub fn strip_all(line: &str) -> String {
    MEDIA_LINK.replace_all(line, "").to_string()
}
