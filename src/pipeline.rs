//! Page-level quote extraction.
//!
//! Orchestrates scan, extraction, and normalization over a parsed page
//! snapshot and shapes the structured result for the public entry points.

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor;
use crate::normalize;
use crate::options::Options;
use crate::result::{Provenance, QuoteResult};
use crate::scan;

/// Main entry point behind [`extract_quote`](crate::extract_quote).
pub(crate) fn extract_quote_impl(html: &str, options: &Options) -> Result<QuoteResult> {
    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Starting quote extraction (HTML length: {} chars)",
            html.len()
        );
    }

    let doc = dom::parse(html);

    let targets = scan::find_reply_targets(&doc, options);
    let Some(target) = targets.first() else {
        return Err(Error::NoReplyTarget);
    };
    if cfg!(debug_assertions) {
        eprintln!("DEBUG: Found {} reply target(s)", targets.len());
    }

    let source = extractor::extract_source(&doc, target, options)?;
    let normalized = normalize::normalize_full(&source.text);
    if normalized.text.is_empty() {
        return Err(Error::NoSourceContent);
    }

    let mut warnings = Vec::new();
    if source.provenance == Provenance::PageArticle {
        warnings.push("reply dialog yielded no text; quoted the page's first post".to_string());
    }
    if normalized.media_links.len() > 1 {
        warnings.push(format!(
            "{} media links found; keeping only the first",
            normalized.media_links.len()
        ));
    }

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Extraction complete: {} chars, {} warning(s)",
            normalized.text.len(),
            warnings.len()
        );
    }

    Ok(QuoteResult {
        text: normalized.text,
        author: source.author.map(|a| a.raw),
        media_link: normalized.media_links.first().cloned(),
        provenance: source.provenance,
        warnings,
    })
}
