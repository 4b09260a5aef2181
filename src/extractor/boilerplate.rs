//! Boilerplate line classification.
//!
//! Interface-generated lines (reply markers, handles, counters, action
//! labels) are not post content. Labels come from the configurable
//! deny-list in [`Options`]; counters and handles are shape-based.

use crate::options::Options;
use crate::patterns::{COUNTER_LINE, HANDLE_LINE, RELATIVE_TIME_LINE};

/// Whether a trimmed line is interface chrome rather than post content.
#[must_use]
pub fn is_boilerplate_line(line: &str, options: &Options) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with(options.reply_context_marker.as_str())
        || trimmed.starts_with('·')
        || HANDLE_LINE.is_match(trimmed)
        || COUNTER_LINE.is_match(trimmed)
        || RELATIVE_TIME_LINE.is_match(trimmed)
        || options.boilerplate_labels.iter().any(|label| label == trimmed)
}
