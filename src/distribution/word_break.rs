/*!
 * Word-break search and break-character classification.
 *
 * Offsets are character offsets into the text, not byte offsets.
 */

use unicode_general_category::{get_general_category, GeneralCategory};

/// Whether `ch` is a safe place to cut text.
///
/// Closing, dash, final-quote and other punctuation count, as do other symbols
/// and line, paragraph and space separators.
pub fn is_break_character(ch: char) -> bool {
    is_punctuation(ch) || matches!(get_general_category(ch), GeneralCategory::SpaceSeparator)
}

/// Same classes as [`is_break_character`] minus the space separator.
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::ClosePunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::LineSeparator
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::OtherSymbol
            | GeneralCategory::ParagraphSeparator
    )
}

/// Find a break point near `target` so a cut does not land mid-word.
///
/// Returns the full length when the text is too short to split around
/// `target`. Otherwise probes `target + i` then `target - i` for growing `i`,
/// and falls back to `target` itself when no break character turns up.
pub fn find_closest_word_break(text: &str, target: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    closest_break_in(&chars, target)
}

pub(crate) fn closest_break_in(chars: &[char], target: usize) -> usize {
    let len = chars.len();
    if len <= target + 2 || len <= 2 || len <= target.saturating_sub(2) {
        return len;
    }
    if is_break_character(chars[target]) {
        return target;
    }
    for i in 1..target {
        if target + i >= len {
            return len;
        }
        if is_break_character(chars[target + i]) {
            return target + i;
        }
        if is_break_character(chars[target - i]) {
            return target - i;
        }
    }
    target
}

/// Split `text` at a character offset, clamped to the end of the text.
pub(crate) fn split_at_char(text: &str, offset: usize) -> (&str, &str) {
    let byte_index = text
        .char_indices()
        .nth(offset)
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    text.split_at(byte_index)
}
