use std::time::Duration;

use replyquote::dom;
use replyquote::handler::{
    handle_reply_click, FIELD_NOT_FOUND_NOTICE, FOCUS_SETTLE_DELAY, SOURCE_NOT_FOUND_NOTICE,
};
use replyquote::scan;
use replyquote::{
    ClickOutcome, InsertionMethod, Options, ReplyField, SyntheticEvent, TargetRegistry,
    TargetState, UserNotice,
};

const REPLY_DIALOG: &str = r#"
<div role="dialog">
    <article>
        <div data-testid="User-Name">Alice</div>
        <div data-testid="tweetText">Hello world</div>
        <span lang="en">https://</span>
        <span lang="en">pic.x.com/xyz</span>
    </article>
    <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
</div>
"#;

#[derive(Default)]
struct RecordingField {
    native_supported: bool,
    content: String,
    focused: bool,
    caret_at_end: bool,
    settled_for: Option<Duration>,
    events: Vec<SyntheticEvent>,
}

impl ReplyField for RecordingField {
    fn focus(&mut self) {
        self.focused = true;
    }
    fn select_all(&mut self) {}
    fn insert_text_command(&mut self, text: &str) -> bool {
        if self.native_supported {
            self.content = text.to_string();
        }
        self.native_supported
    }
    fn replace_content(&mut self, text: &str) {
        self.content = text.to_string();
    }
    fn collapse_to_end(&mut self) {
        self.caret_at_end = true;
    }
    fn dispatch(&mut self, event: &SyntheticEvent) {
        self.events.push(event.clone());
    }
    fn settle(&mut self, delay: Duration) {
        self.settled_for = Some(delay);
    }
}

#[derive(Default)]
struct RecordingNotice {
    messages: Vec<String>,
}

impl UserNotice for RecordingNotice {
    fn acknowledge(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[test]
fn click_inserts_normalized_quote_via_native_command() {
    let doc = dom::parse(REPLY_DIALOG);
    let options = Options::default();
    let targets = scan::find_reply_targets(&doc, &options);
    assert_eq!(targets.len(), 1);
    let key = scan::node_key(&targets[0]).expect("target has a node");

    let mut registry = TargetRegistry::new();
    let mut field = RecordingField {
        native_supported: true,
        ..RecordingField::default()
    };
    let mut notice = RecordingNotice::default();

    let outcome = handle_reply_click(
        &doc,
        &targets[0],
        key,
        &mut registry,
        &mut field,
        &mut notice,
        &options,
    );

    let expected = "Hello world\npic.x.com/xyz";
    assert_eq!(
        outcome,
        ClickOutcome::Inserted {
            method: InsertionMethod::NativeCommand,
            text: expected.to_string(),
        }
    );
    assert_eq!(field.content, expected);
    assert!(field.focused);
    assert!(field.caret_at_end);
    assert!(field.events.is_empty());

    // Review prompt showed the same text that was inserted.
    assert_eq!(notice.messages, vec![expected.to_string()]);
    // The post-prompt settle deferral was delivered.
    assert_eq!(field.settled_for, Some(FOCUS_SETTLE_DELAY));
    // The idempotency marker is reset for the next click.
    assert_eq!(registry.state(key), TargetState::Idle);
}

#[test]
fn fallback_path_dispatches_input_notification_events() {
    let doc = dom::parse(REPLY_DIALOG);
    let options = Options::default();
    let targets = scan::find_reply_targets(&doc, &options);
    let key = scan::node_key(&targets[0]).expect("target has a node");

    let mut registry = TargetRegistry::new();
    let mut field = RecordingField::default();
    let mut notice = RecordingNotice::default();

    let outcome = handle_reply_click(
        &doc,
        &targets[0],
        key,
        &mut registry,
        &mut field,
        &mut notice,
        &options,
    );

    assert!(matches!(
        outcome,
        ClickOutcome::Inserted {
            method: InsertionMethod::DirectReplacement,
            ..
        }
    ));

    let names: Vec<&str> = field.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["input", "change", "beforeinput", "input"]);
    let payloads: Vec<&SyntheticEvent> = field
        .events
        .iter()
        .filter(|e| e.input_type.as_deref() == Some("insertText"))
        .collect();
    assert_eq!(payloads.len(), 2);
    for event in payloads {
        assert_eq!(event.data.as_deref(), Some("Hello world\npic.x.com/xyz"));
    }
    assert!(field.caret_at_end);
    assert!(field.focused);
}

#[test]
fn second_click_during_processing_is_ignored() {
    let doc = dom::parse(REPLY_DIALOG);
    let options = Options::default();
    let targets = scan::find_reply_targets(&doc, &options);
    let key = scan::node_key(&targets[0]).expect("target has a node");

    let mut registry = TargetRegistry::new();
    let mut field = RecordingField::default();
    let mut notice = RecordingNotice::default();

    assert!(registry.begin(key));
    let outcome = handle_reply_click(
        &doc,
        &targets[0],
        key,
        &mut registry,
        &mut field,
        &mut notice,
        &options,
    );
    assert_eq!(outcome, ClickOutcome::AlreadyProcessing);
    assert!(field.content.is_empty());
    assert!(notice.messages.is_empty());
}

#[test]
fn extraction_failure_shows_error_notice_instead_of_text() {
    let html = r#"<div>
        <span>Replying to @ghost</span>
        <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
    </div>"#;
    let doc = dom::parse(html);
    let options = Options::default();
    let targets = scan::find_reply_targets(&doc, &options);
    let key = scan::node_key(&targets[0]).expect("target has a node");

    let mut registry = TargetRegistry::new();
    let mut field = RecordingField::default();
    let mut notice = RecordingNotice::default();

    let outcome = handle_reply_click(
        &doc,
        &targets[0],
        key,
        &mut registry,
        &mut field,
        &mut notice,
        &options,
    );
    assert_eq!(outcome, ClickOutcome::SourceNotFound);
    assert_eq!(notice.messages, vec![SOURCE_NOT_FOUND_NOTICE.to_string()]);
    assert!(field.content.is_empty());
    assert_eq!(registry.state(key), TargetState::Idle);
}

#[test]
fn missing_editable_field_shows_distinct_notice() {
    let html = r#"<div role="dialog">
        <article><div data-testid="tweetText">Original post text</div></article>
        <p id="anchor">plain anchor</p>
    </div>"#;
    let doc = dom::parse(html);
    let options = Options::default();
    let anchor = doc.select("#anchor");
    let key = scan::node_key(&anchor).expect("anchor has a node");

    let mut registry = TargetRegistry::new();
    let mut field = RecordingField::default();
    let mut notice = RecordingNotice::default();

    let outcome = handle_reply_click(
        &doc,
        &anchor,
        key,
        &mut registry,
        &mut field,
        &mut notice,
        &options,
    );
    assert_eq!(outcome, ClickOutcome::FieldMissing);
    assert_eq!(notice.messages, vec![FIELD_NOT_FOUND_NOTICE.to_string()]);
    assert_eq!(registry.state(key), TargetState::Idle);
}

#[test]
fn reconcile_offers_every_current_target_once() {
    let html = r#"
    <div role="dialog">
        <article><div data-testid="tweetText">Post one text</div></article>
        <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
    </div>"#;
    let doc = dom::parse(html);
    let options = Options::default();
    let mut registry = TargetRegistry::new();

    let first = scan::reconcile(&doc, &mut registry, &options);
    assert_eq!(first.len(), 1);

    // Re-running after a "mutation" re-offers the same target under the
    // same key; nothing is duplicated or lost.
    let second = scan::reconcile(&doc, &mut registry, &options);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].key, second[0].key);
    assert_eq!(registry.len(), 1);
}
