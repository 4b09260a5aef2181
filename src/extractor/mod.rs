//! Source-content extraction.
//!
//! Given a reply-target container, locates the post being replied to and
//! produces its raw text with interface chrome removed: author lines,
//! counter labels, reply markers, and anything the user is currently
//! typing into an editable region.
//!
//! Primary path: the enclosing dialog's first article (popup composer).
//! Fallback: the page's first article. Absence of both degrades to
//! [`Error::NoSourceContent`](crate::Error::NoSourceContent), never a panic.

pub mod author;
pub mod boilerplate;
pub mod fallback;

use std::collections::HashSet;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{ARTICLE_SELECTOR, TEXT_BEARING_SELECTOR};
use crate::result::Provenance;

use author::AuthorName;

/// Raw extracted source content, before normalization.
#[derive(Debug, Clone)]
pub(crate) struct SourceText {
    /// Newline-joined surviving text fragments, in document order.
    pub text: String,

    /// The detected author of the quoted post, when the dialog path found one.
    pub author: Option<AuthorName>,

    /// Where the content came from.
    pub provenance: Provenance,
}

/// Extract the source content for a reply target.
pub(crate) fn extract_source(
    doc: &Document,
    reply_target: &Selection,
    options: &Options,
) -> Result<SourceText> {
    // Primary path: the enclosing dialog's rendered post.
    if let Some(dialog) = dom::closest(reply_target, is_dialog) {
        if let Some(article) = dom::first_match(&dialog, ARTICLE_SELECTOR) {
            let author = author::detect(&article);
            let combined = collect_text(&article, author.as_ref(), options);
            let combined = prepend_missing_headline(&article, combined, author.as_ref(), options);
            if !combined.is_empty() {
                return Ok(SourceText {
                    text: combined,
                    author,
                    provenance: Provenance::ReplyDialog,
                });
            }
        }
    }

    // Fallback: the page's first rendered post.
    if let Some(text) = fallback::first_article_text(doc, options) {
        return Ok(SourceText {
            text,
            author: None,
            provenance: Provenance::PageArticle,
        });
    }

    Err(Error::NoSourceContent)
}

fn is_dialog(sel: &Selection) -> bool {
    dom::get_attribute(sel, "role").as_deref() == Some("dialog")
}

fn is_editable(sel: &Selection) -> bool {
    dom::get_attribute(sel, "contenteditable").as_deref() == Some("true")
}

/// Collect text-bearing fragments from an article, in document order.
///
/// Skips fragments inside editable composer regions (the user's own draft),
/// empty fragments, author-name lines, boilerplate lines, and exact
/// duplicates after the first occurrence.
fn collect_text(article: &Selection, author: Option<&AuthorName>, options: &Options) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut parts: Vec<String> = Vec::new();

    for node in dom::each(&article.select(TEXT_BEARING_SELECTOR)) {
        if dom::has_ancestor(&node, is_editable) {
            continue;
        }
        let raw = dom::text_content(&node).replace('\u{a0}', " ");
        let fragment = raw.trim();
        if fragment.is_empty() {
            continue;
        }
        if author.is_some_and(|a| a.matches(fragment)) {
            continue;
        }
        if boilerplate::is_boilerplate_line(fragment, options) {
            continue;
        }
        if !seen.insert(fragment.to_string()) {
            continue;
        }
        parts.push(fragment.to_string());
    }

    parts.join("\n")
}

/// Recover a headline-style first line the tagged-node walk missed.
///
/// Looks at the article's whole rendered text for the first line that is
/// not chrome and not the author, and prepends it when the combined text
/// does not already carry it.
fn prepend_missing_headline(
    article: &Selection,
    combined: String,
    author: Option<&AuthorName>,
    options: &Options,
) -> String {
    let raw = dom::text_content(article).replace('\u{a0}', " ");
    let headline = raw.lines().map(str::trim).find(|line| {
        !line.is_empty()
            && !boilerplate::is_boilerplate_line(line, options)
            && !author.is_some_and(|a| a.matches(line))
    });

    match headline {
        Some(headline) if !combined.contains(headline) => {
            if combined.is_empty() {
                headline.to_string()
            } else {
                format!("{headline}\n{combined}")
            }
        }
        _ => combined,
    }
}
