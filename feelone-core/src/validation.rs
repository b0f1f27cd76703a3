//! Input validation gate for the feelings entry box.

/// Entries must have strictly more than this many characters after trimming.
pub const MIN_INPUT_CHARS: usize = 10;

/// Whether `text` is long enough to submit.
///
/// Length is counted in characters, not bytes, after trimming surrounding
/// whitespace.
pub fn can_proceed(text: &str) -> bool {
    text.trim().chars().count() > MIN_INPUT_CHARS
}
