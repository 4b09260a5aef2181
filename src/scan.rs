//! Reply-target discovery.
//!
//! Probes the page snapshot with an ordered list of reply-field selectors
//! and filters candidates to genuine reply composers, so the main compose
//! box is never offered quote extraction. Also locates the writable field
//! for a reply target and provides the level-triggered reconciliation
//! helper run after each page-structure change notification.

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{
    CLOSE_CONTROL_SELECTOR, EDITABLE_SELECTOR, REPLYING_TO_SELECTOR, REPLY_FIELD_SELECTORS,
};
use crate::registry::{TargetRegistry, TargetState};
use dom_query::NodeId;

/// A reply target paired with its registry key.
#[derive(Debug)]
pub struct ReplyTarget<'a> {
    /// Node identity of the target, used as the registry key.
    pub key: NodeId,

    /// The reply-target container in the snapshot.
    pub selection: Selection<'a>,
}

/// Find all reply-target containers in the snapshot.
///
/// Selectors are probed in order; the first one that yields candidates
/// surviving the reply-context filter wins. Returns an empty vector when
/// the page has no active reply composer.
#[must_use]
pub fn find_reply_targets<'a>(doc: &'a Document, options: &Options) -> Vec<Selection<'a>> {
    for selector in REPLY_FIELD_SELECTORS {
        let candidates = dom::each(&doc.select(selector));
        if candidates.is_empty() {
            continue;
        }
        let reply_boxes: Vec<Selection<'a>> = candidates
            .into_iter()
            .filter(|field| !options.require_reply_context || is_reply_context(field, options))
            .collect();
        if !reply_boxes.is_empty() {
            return reply_boxes;
        }
    }
    Vec::new()
}

/// Whether a composer field sits in a reply context rather than being the
/// page's main compose box.
#[must_use]
pub fn is_reply_context(field: &Selection, options: &Options) -> bool {
    // Bounded ancestor walk looking for reply markers.
    let mut current = field.parent();
    for _ in 0..options.max_reply_ancestor_depth {
        if !current.exists() {
            break;
        }
        if current.select(REPLYING_TO_SELECTOR).exists() {
            return true;
        }
        if dom::get_attribute(&current, "aria-labelledby").as_deref() == Some("modal-header") {
            return true;
        }
        if dom::text_content(&current).contains(options.reply_context_marker.as_str()) {
            return true;
        }
        current = current.parent();
    }

    // Popup composers live in a dialog.
    if dom::closest(field, |s| {
        dom::get_attribute(s, "role").as_deref() == Some("dialog")
    })
    .is_some()
    {
        return true;
    }

    // A grouped composer with a close control nearby is a reply popup too.
    if let Some(group) = dom::closest(field, |s| {
        dom::get_attribute(s, "role").as_deref() == Some("group")
    }) {
        if group.select(CLOSE_CONTROL_SELECTOR).exists() {
            return true;
        }
    }

    false
}

/// Locate the writable rich-text field for a reply target.
///
/// Search order: the target itself if editable, then editable descendants,
/// then editable fields under a bounded number of ancestors.
#[must_use]
pub fn find_editable_field<'a>(
    reply_target: &Selection<'a>,
    options: &Options,
) -> Option<Selection<'a>> {
    if dom::get_attribute(reply_target, "contenteditable").as_deref() == Some("true") {
        return Some(reply_target.clone());
    }

    if let Some(found) = dom::first_match(reply_target, EDITABLE_SELECTOR) {
        return Some(found);
    }

    let mut parent = reply_target.parent();
    for _ in 0..options.max_field_search_depth {
        if !parent.exists() {
            break;
        }
        if let Some(found) = dom::first_match(&parent, EDITABLE_SELECTOR) {
            return Some(found);
        }
        parent = parent.parent();
    }

    None
}

/// Level-triggered reconciliation: after a page-structure change, return
/// every current reply target keyed by node identity, registering unseen
/// ones as idle.
///
/// The extraction pipeline itself is stateless per call; this is the only
/// place the structural-mutation loop touches shared state.
#[must_use]
pub fn reconcile<'a>(
    doc: &'a Document,
    registry: &mut TargetRegistry<NodeId>,
    options: &Options,
) -> Vec<ReplyTarget<'a>> {
    find_reply_targets(doc, options)
        .into_iter()
        .filter_map(|selection| {
            let key = node_key(&selection)?;
            if registry.state(key) == TargetState::Idle {
                registry.finish(key);
            }
            Some(ReplyTarget { key, selection })
        })
        .collect()
}

/// Node identity of a single-node selection.
#[must_use]
pub fn node_key(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}
