//! Page-article fallback extraction.
//!
//! When the reply dialog yields nothing, quote the page's first rendered
//! post instead: its tagged body-text fragments above a minimum length,
//! deduplicated, joined in document order.

use std::collections::HashSet;

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::{ARTICLE_SELECTOR, BODY_TEXT_SELECTOR};

/// Extract body text from the page's first article, if any.
#[must_use]
pub(crate) fn first_article_text(doc: &Document, options: &Options) -> Option<String> {
    let article = dom::first_match_in(doc, ARTICLE_SELECTOR)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut parts: Vec<String> = Vec::new();

    for node in dom::each(&article.select(BODY_TEXT_SELECTOR)) {
        let raw = dom::text_content(&node).replace('\u{a0}', " ");
        let fragment = raw.trim();
        if fragment.chars().count() <= options.min_fallback_text_len {
            continue;
        }
        if !seen.insert(fragment.to_string()) {
            continue;
        }
        parts.push(fragment.to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
