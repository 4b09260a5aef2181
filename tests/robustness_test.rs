use replyquote::{extract_quote, extract_quote_bytes, Error};

#[test]
fn extract_does_not_panic_on_empty_input() {
    assert!(matches!(extract_quote(""), Err(Error::NoReplyTarget)));
}

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = "<div role='dialog'><article><div data-testid='tweetText'>text<div>more";
    // The snapshot parser repairs what it can; absence of a composer is the
    // expected outcome, a panic never is.
    assert!(matches!(extract_quote(html), Err(Error::NoReplyTarget)));
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    let html = "<p><div role='textbox' contenteditable='true'></p></div>";
    let result = extract_quote(html);
    assert!(matches!(
        result,
        Err(Error::NoReplyTarget | Error::NoSourceContent)
    ));
}

#[test]
fn extract_recovers_from_missing_closing_tags() {
    let html = r#"<div role="dialog">
        <article><div data-testid="tweetText">content survives
        <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox">"#;
    match extract_quote(html) {
        Ok(result) => assert!(result.text.contains("content survives")),
        Err(Error::NoReplyTarget | Error::NoSourceContent) => {}
        Err(err) => panic!("unexpected error: {err:?}"),
    }
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let html = "<div role=\"dialog><div contenteditable=true role=textbox>";
    let _ = extract_quote(html);
}

#[test]
fn extract_does_not_panic_on_incomplete_entities() {
    let html = r#"<div role="dialog">
        <article><div data-testid="tweetText">&amp text &lt</div></article>
        <div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>
    </div>"#;
    match extract_quote(html) {
        Ok(result) => assert!(result.text.contains("text")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_deeply_nested_reply_target() {
    let mut html = String::from(r#"<div role="dialog"><article>
        <div data-testid="tweetText">Deep post</div></article>"#);
    for _ in 0..30 {
        html.push_str("<div>");
    }
    html.push_str(r#"<div data-testid="tweetTextarea_0" contenteditable="true" role="textbox"></div>"#);
    for _ in 0..30 {
        html.push_str("</div>");
    }
    html.push_str("</div>");

    // The reply-context probe is depth-bounded, but the dialog check walks
    // all the way up, so the target still qualifies.
    let result = extract_quote(&html).expect("expected Ok(_)");
    assert_eq!(result.text, "Deep post");
}

#[test]
fn extract_bytes_does_not_panic_on_invalid_utf8() {
    let html = b"<div role=\"dialog\">\xFF\xFE<article>\
        <div data-testid=\"tweetText\">Still works</div></article>\
        <div data-testid=\"tweetTextarea_0\" contenteditable=\"true\" role=\"textbox\"></div></div>";
    match extract_quote_bytes(html) {
        Ok(result) => assert!(result.text.contains("Still works")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn whitespace_and_nbsp_are_cleaned() {
    let html = "<div role=\"dialog\"><article>\
        <div data-testid=\"tweetText\">  Hello\u{a0}world  </div></article>\
        <div data-testid=\"tweetTextarea_0\" contenteditable=\"true\" role=\"textbox\"></div></div>";
    let result = extract_quote(html).expect("expected Ok(_)");
    assert_eq!(result.text, "Hello world");
}
