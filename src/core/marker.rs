//! # Completion Marker Protocol
//!
//! Tasks display as `<marker><space><description>` where the marker is one
//! of two fixed 3-character tokens. Completion itself is stored as a boolean
//! on [`crate::core::store::Task`]; the marker is synthesized at render time
//! only. These helpers are the whole protocol: constants, render-time
//! synthesis, a parser for display-form strings, and the pure prefix-swap
//! transform for strings that already carry a marker.

/// Marker for a task that still needs doing.
pub const INCOMPLETE_MARKER: &str = "[ ]";

/// Marker for a completed task.
pub const COMPLETE_MARKER: &str = "[x]";

/// The marker rendered for a task's completion state.
pub fn marker_for(done: bool) -> &'static str {
    if done { COMPLETE_MARKER } else { INCOMPLETE_MARKER }
}

/// Parse a display-form task string (`"[x] write docs"`) into its completion
/// flag and bare description.
///
/// Returns `None` unless the string starts with a recognized marker followed
/// by a single space. A marker appearing later in the description is just
/// text and is left alone.
pub fn parse(s: &str) -> Option<(bool, &str)> {
    for (marker, done) in [(COMPLETE_MARKER, true), (INCOMPLETE_MARKER, false)] {
        if let Some(rest) = s.strip_prefix(marker) {
            if let Some(description) = rest.strip_prefix(' ') {
                return Some((done, description));
            }
        }
    }
    None
}

/// Swap the marker prefixing `s` with its opposite.
///
/// Only the first occurrence is replaced; the rest of the string, including
/// any marker-shaped substrings inside the description, is untouched.
/// Strings that do not start with a recognized marker come back unchanged.
pub fn toggle_marker(s: &str) -> String {
    if s.starts_with(COMPLETE_MARKER) {
        s.replacen(COMPLETE_MARKER, INCOMPLETE_MARKER, 1)
    } else if s.starts_with(INCOMPLETE_MARKER) {
        s.replacen(INCOMPLETE_MARKER, COMPLETE_MARKER, 1)
    } else {
        s.to_string()
    }
}
