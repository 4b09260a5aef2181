//! Text insertion into the reply field.
//!
//! The writable rich-text field is a live object owned by the host page;
//! this module talks to it through the [`ReplyField`] capability trait so
//! the insertion contract can be exercised against a fake field in tests.
//!
//! Contract: focus first, try the native insert-text command, and when the
//! host reports it unsupported or failed, fall back to direct content
//! replacement followed by synthetic input-notification events carrying
//! the inserted text and an `insertText` type tag. Both paths leave the
//! caret at the end of the inserted content and the field focused.

use std::time::Duration;

use serde::Serialize;

/// A synthetic DOM-style event dispatched at the reply field so the host
/// application's reactive framework registers the change as user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticEvent {
    /// Event name: `beforeinput`, `input`, or `change`.
    pub name: String,

    /// Whether the event bubbles.
    pub bubbles: bool,

    /// Whether the event is cancelable.
    pub cancelable: bool,

    /// Insertion-type classification, `insertText` for typed payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    /// The inserted text payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl SyntheticEvent {
    /// A plain bubbling notification event with no payload.
    #[must_use]
    pub fn bubbling(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bubbles: true,
            cancelable: false,
            input_type: None,
            data: None,
        }
    }

    /// A bubbling, cancelable event tagged `insertText` and carrying the
    /// inserted text.
    #[must_use]
    pub fn text_insertion(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            bubbles: true,
            cancelable: true,
            input_type: Some("insertText".to_string()),
            data: Some(text.to_string()),
        }
    }
}

/// How the text ended up in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionMethod {
    /// The host's native insert-text command succeeded.
    NativeCommand,

    /// Direct content replacement plus synthetic events was used.
    DirectReplacement,
}

/// Capability handle to the live writable reply field.
///
/// Implemented by the host bridge; a test double suffices for exercising
/// the pipeline. No method may throw into the caller.
pub trait ReplyField {
    /// Give the field input focus.
    fn focus(&mut self);

    /// Select the field's entire current content.
    fn select_all(&mut self);

    /// Attempt the host's native insert-text command over the current
    /// selection. Returns `false` when unsupported or failed.
    fn insert_text_command(&mut self, text: &str) -> bool;

    /// Replace the field's content directly, bypassing the command layer.
    fn replace_content(&mut self, text: &str);

    /// Collapse the selection to a caret at the end of the content.
    fn collapse_to_end(&mut self);

    /// Dispatch a synthetic event at the field.
    fn dispatch(&mut self, event: &SyntheticEvent);

    /// Scroll the field so the end of the content is visible.
    fn scroll_to_end(&mut self) {}

    /// Wait for the host to settle after a blocking prompt dismissal, so
    /// restored focus is effective before insertion. Hosts typically
    /// schedule; the default is an immediate no-op.
    fn settle(&mut self, _delay: Duration) {}
}

/// Insert text into the field per the insertion contract.
///
/// Never fails: an unsupported or failing native command is recovered
/// locally via the fallback path, and the chosen path is reported back.
pub fn insert_text<F: ReplyField + ?Sized>(field: &mut F, text: &str) -> InsertionMethod {
    field.focus();
    field.select_all();

    if field.insert_text_command(text) {
        field.collapse_to_end();
        field.focus();
        field.scroll_to_end();
        return InsertionMethod::NativeCommand;
    }

    field.replace_content(text);
    field.collapse_to_end();
    field.dispatch(&SyntheticEvent::bubbling("input"));
    field.dispatch(&SyntheticEvent::bubbling("change"));
    field.dispatch(&SyntheticEvent::text_insertion("beforeinput", text));
    field.dispatch(&SyntheticEvent::text_insertion("input", text));
    field.focus();
    field.scroll_to_end();
    InsertionMethod::DirectReplacement
}
