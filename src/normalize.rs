//! Text normalization for extracted post content.
//!
//! Pure string transform, no DOM dependency. Two passes over the extracted
//! lines, in a fixed order:
//!
//! 1. **Merge** - repair links the host page wrapped across two text nodes
//!    (a bare `https://` line followed by a media-host path line).
//! 2. **Extract** - pull media links out of body lines, canonicalize and
//!    deduplicate them, then append a single trailing link line.
//!
//! Extraction must not run before the merge: neither half of a split link
//! matches the full link pattern on its own.

use crate::media_links;
use crate::patterns::{MULTI_SPACE, SCHEME_ONLY_LINE};
use crate::result::Normalized;

/// Normalize extracted post text into final user-ready text.
///
/// Merges split link fragments, deduplicates media links (keeping the
/// first seen as a single trailing line), drops blank-line noise while
/// preserving deliberate paragraph breaks, and trims the result.
///
/// # Example
///
/// ```rust
/// use replyquote::normalize;
///
/// let text = "Hello world\nhttps://\npic.x.com/xyz";
/// assert_eq!(normalize(text), "Hello world\npic.x.com/xyz");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_full(text).text
}

/// Normalize, also returning every media link discovered in match order.
///
/// The first entry of `media_links` is the one retained in the output;
/// the rest were deliberately dropped (one attachment line per quote).
#[must_use]
pub fn normalize_full(text: &str) -> Normalized {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let merged = merge_split_links(&unified);

    let mut links: Vec<String> = Vec::new();
    let mut body: Vec<String> = Vec::new();

    for line in &merged {
        let found = media_links::find_all(&line.text);
        let had_link = !found.is_empty();
        for link in found {
            if !links.contains(&link) {
                links.push(link);
            }
        }
        let cleaned = if had_link {
            MULTI_SPACE
                .replace_all(media_links::strip_all(&line.text).trim(), " ")
                .to_string()
        } else {
            line.text.trim().to_string()
        };

        if cleaned.is_empty() {
            // A line emptied by link-stripping is noise; an originally
            // blank line is a paragraph break, kept only between two
            // retained non-empty lines (trailing blanks are popped below).
            let separator_ok =
                line.originally_blank && body.last().is_some_and(|prev| !prev.is_empty());
            if separator_ok {
                body.push(String::new());
            }
        } else {
            body.push(cleaned);
        }
    }

    while body.last().is_some_and(String::is_empty) {
        body.pop();
    }

    if let Some(first) = links.first() {
        // Safety pass: body lines were already stripped, but scrub again so
        // the retained link can never appear twice.
        for line in &mut body {
            if line.contains(first.as_str()) {
                *line = MULTI_SPACE
                    .replace_all(line.replace(first.as_str(), "").trim(), " ")
                    .to_string();
            }
        }
        body.push(first.clone());
    }

    Normalized {
        text: body.join("\n").trim().to_string(),
        media_links: links,
    }
}

struct MergedLine {
    text: String,
    originally_blank: bool,
}

/// Merge pass: a line that trims to a bare scheme prefix followed by a
/// media-host path line collapses into one line holding the path.
fn merge_split_links(text: &str) -> Vec<MergedLine> {
    let raw: Vec<&str> = text.split('\n').collect();
    let mut merged = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        let trimmed = raw[i].trim();
        if SCHEME_ONLY_LINE.is_match(trimmed) {
            if let Some(next) = raw.get(i + 1) {
                let next_trimmed = next.trim();
                if media_links::is_media_path_line(next_trimmed) {
                    merged.push(MergedLine {
                        text: next_trimmed.to_string(),
                        originally_blank: false,
                    });
                    i += 2;
                    continue;
                }
            }
        }
        merged.push(MergedLine {
            text: raw[i].to_string(),
            originally_blank: trimmed.is_empty(),
        });
        i += 1;
    }

    merged
}
