//! Simple CLI that reads a page snapshot from stdin and outputs the
//! extracted quote as JSON to stdout.

use replyquote::extract_quote_bytes;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    text: String,
    author: Option<String>,
    media_link: Option<String>,
    provenance: Option<replyquote::Provenance>,
    warnings: Vec<String>,
    error: Option<String>,
}

fn main() {
    // Read the snapshot from stdin
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    // Extract with default options
    let output = match extract_quote_bytes(&html) {
        Ok(r) => Output {
            text: r.text,
            author: r.author,
            media_link: r.media_link,
            provenance: Some(r.provenance),
            warnings: r.warnings,
            error: None,
        },
        Err(e) => Output {
            text: String::new(),
            author: None,
            media_link: None,
            provenance: None,
            warnings: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
