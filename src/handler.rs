//! Click orchestration.
//!
//! Ties the pipeline together for one button click: idempotency guard,
//! extraction, normalization, the blocking review prompt, and insertion.
//! Every failure becomes a user-visible notice or a recovered fallback;
//! nothing propagates into host-page code, and the idempotency marker is
//! reset on every exit path so a later click can retry.

use std::hash::Hash;
use std::time::Duration;

use crate::composer::{self, InsertionMethod, ReplyField};
use crate::dom::{Document, Selection};
use crate::extractor;
use crate::normalize;
use crate::options::Options;
use crate::registry::TargetRegistry;
use crate::scan;

/// Notice shown when no source content could be located.
pub const SOURCE_NOT_FOUND_NOTICE: &str = "Could not find the text of the post being replied to.";

/// Notice shown when no writable field exists near the reply target.
pub const FIELD_NOT_FOUND_NOTICE: &str = "Could not find the reply text field.";

/// Fixed deferral between prompt dismissal and insertion, giving the host
/// time to restore focus. A scheduling workaround, not concurrency.
pub const FOCUS_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Blocking user acknowledgment, shown before insertion.
///
/// Shows the normalized text as a review step, or an error string as the
/// explicit signal of extraction failure. `acknowledge` returns once the
/// user has dismissed the prompt.
pub trait UserNotice {
    /// Show a blocking message and wait for dismissal.
    fn acknowledge(&mut self, message: &str);
}

/// Outcome of handling one button click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The normalized quote was inserted into the reply field.
    Inserted {
        /// Which insertion path succeeded.
        method: InsertionMethod,
        /// The text that was inserted.
        text: String,
    },

    /// A click for this target is already in flight; this one was ignored.
    AlreadyProcessing,

    /// No source content was located; the user was notified.
    SourceNotFound,

    /// No writable field was located near the reply target; the user was
    /// notified.
    FieldMissing,
}

/// Handle a click on the quote button of one reply target.
///
/// `key` identifies the target in the registry (its node identity for
/// snapshot-backed targets). `field` is the host's live handle to the
/// writable field belonging to this target.
pub fn handle_reply_click<K, F, N>(
    doc: &Document,
    reply_target: &Selection,
    key: K,
    registry: &mut TargetRegistry<K>,
    field: &mut F,
    notice: &mut N,
    options: &Options,
) -> ClickOutcome
where
    K: Eq + Hash + Copy,
    F: ReplyField + ?Sized,
    N: UserNotice + ?Sized,
{
    if !registry.begin(key) {
        return ClickOutcome::AlreadyProcessing;
    }
    let outcome = run_click(doc, reply_target, field, notice, options);
    registry.finish(key);
    outcome
}

fn run_click<F, N>(
    doc: &Document,
    reply_target: &Selection,
    field: &mut F,
    notice: &mut N,
    options: &Options,
) -> ClickOutcome
where
    F: ReplyField + ?Sized,
    N: UserNotice + ?Sized,
{
    let Ok(source) = extractor::extract_source(doc, reply_target, options) else {
        notice.acknowledge(SOURCE_NOT_FOUND_NOTICE);
        return ClickOutcome::SourceNotFound;
    };
    let text = normalize::normalize(&source.text);
    if text.is_empty() {
        notice.acknowledge(SOURCE_NOT_FOUND_NOTICE);
        return ClickOutcome::SourceNotFound;
    }

    if scan::find_editable_field(reply_target, options).is_none() {
        notice.acknowledge(FIELD_NOT_FOUND_NOTICE);
        return ClickOutcome::FieldMissing;
    }

    // Activate the field before the blocking prompt so dismissal restores
    // focus to it, then let the host settle before inserting.
    field.focus();
    notice.acknowledge(&text);
    field.settle(FOCUS_SETTLE_DELAY);

    let method = composer::insert_text(field, &text);
    ClickOutcome::Inserted { method, text }
}
