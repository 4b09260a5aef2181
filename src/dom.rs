//! Tree-query capability adapter.
//!
//! Thin layer over `dom_query` exposing exactly the capabilities the
//! extraction pipeline needs: attribute lookup, ancestor walks, first-match
//! queries, and per-node text. Extraction logic goes through this module
//! rather than binding to `dom_query` directly, so it can be exercised
//! against synthetic snapshots parsed from strings.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML page snapshot into a queryable document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Walk up from `sel` (inclusive) and return the nearest selection matching
/// the predicate, like the DOM `closest()` call.
#[must_use]
pub fn closest<'a>(
    sel: &Selection<'a>,
    pred: impl Fn(&Selection<'a>) -> bool,
) -> Option<Selection<'a>> {
    let mut current = sel.clone();
    while current.exists() {
        if pred(&current) {
            return Some(current);
        }
        current = current.parent();
    }
    None
}

/// Check whether any strict ancestor of `sel` matches the predicate.
#[must_use]
pub fn has_ancestor<'a>(sel: &Selection<'a>, pred: impl Fn(&Selection<'a>) -> bool) -> bool {
    let parent = sel.parent();
    if !parent.exists() {
        return false;
    }
    closest(&parent, pred).is_some()
}

// === Querying ===

/// First descendant matching the selector, or `None`.
#[must_use]
pub fn first_match<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    if found.exists() {
        Some(found)
    } else {
        None
    }
}

/// First element in the document matching the selector, or `None`.
#[must_use]
pub fn first_match_in<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let found = doc.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// Expand a multi-node selection into one single-node selection per match,
/// in document order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_includes_self() {
        let doc = parse(r#"<div role="dialog"><p id="x">text</p></div>"#);
        let dialog = doc.select("[role='dialog']");
        let found = closest(&dialog, |s| {
            get_attribute(s, "role").as_deref() == Some("dialog")
        });
        assert!(found.is_some());
    }

    #[test]
    fn closest_walks_ancestors() {
        let doc = parse(r#"<div role="dialog"><section><p id="x">text</p></section></div>"#);
        let p = doc.select("#x");
        let found = closest(&p, |s| get_attribute(s, "role").as_deref() == Some("dialog"));
        assert_eq!(tag_name(&found.unwrap()).as_deref(), Some("div"));
    }

    #[test]
    fn closest_returns_none_without_match() {
        let doc = parse("<div><p id='x'>text</p></div>");
        let p = doc.select("#x");
        assert!(closest(&p, |s| get_attribute(s, "role").is_some()).is_none());
    }

    #[test]
    fn has_ancestor_excludes_self() {
        let doc = parse(r#"<div contenteditable="true"><span id="inner">x</span></div>"#);
        let editable = doc.select("[contenteditable='true']");
        let inner = doc.select("#inner");

        let is_editable =
            |s: &Selection| get_attribute(s, "contenteditable").as_deref() == Some("true");
        assert!(has_ancestor(&inner, is_editable));
        assert!(!has_ancestor(&editable, is_editable));
    }

    #[test]
    fn first_match_returns_none_when_absent() {
        let doc = parse("<div><p>text</p></div>");
        let div = doc.select("div");
        assert!(first_match(&div, "article").is_none());
        assert!(first_match(&div, "p").is_some());
    }

    #[test]
    fn each_preserves_document_order() {
        let doc = parse("<div><p>1</p><p>2</p><p>3</p></div>");
        let parts = each(&doc.select("p"));
        assert_eq!(parts.len(), 3);
        let texts: Vec<String> = parts.iter().map(|s| text_content(s).to_string()).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }
}
