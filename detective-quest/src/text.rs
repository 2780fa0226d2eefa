//! Bounded-length owned strings.
//!
//! Every piece of text that enters the game (room names, clues, suspects,
//! the final accusation) has a fixed maximum length. Longer input is
//! truncated, never rejected.

pub const MAX_ROOM_NAME: usize = 49;
pub const MAX_CLUE: usize = 119;
pub const MAX_SUSPECT: usize = 39;
pub const MAX_ACCUSATION: usize = MAX_SUSPECT;

/// Copies `text` into an owned string of at most `max` bytes.
///
/// The cut never lands inside a UTF-8 sequence: if byte `max` falls in the
/// middle of a character, that whole character is dropped.
pub fn bounded(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    tracing::debug!(original_len = text.len(), kept = end, "truncating text");
    text[..end].to_string()
}

/// Like [`bounded`], but maps an empty result to `None`.
pub fn bounded_optional(text: Option<&str>, max: usize) -> Option<String> {
    text.map(|t| bounded(t, max)).filter(|t| !t.is_empty())
}
