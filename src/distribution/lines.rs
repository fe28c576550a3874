/*!
 * Display-line helpers for redistributed pieces.
 */

use super::word_break::{closest_break_in, split_at_char};

/// Number of display lines in `content`: 0 for empty text, otherwise one more
/// than the number of newlines.
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    1 + content.matches('\n').count()
}

/// Re-wrap `text` into at most `lines` display lines of similar length.
///
/// Existing line breaks are folded into spaces, each line is cut at the word
/// break closest to the average line length and trimmed, and the last line
/// takes whatever is left. Empty lines are dropped.
pub fn reflow_lines(text: &str, lines: usize) -> String {
    if text.is_empty() || lines == 0 {
        return String::new();
    }
    if lines == 1 {
        return text.to_string();
    }

    let average = text.chars().count() / lines;
    let mut rest = text;
    let mut wrapped = Vec::with_capacity(lines);

    for line in 0..lines {
        let piece = if line + 1 == lines {
            rest
        } else {
            let chars: Vec<char> = rest.chars().collect();
            let (head, tail) = split_at_char(rest, closest_break_in(&chars, average));
            rest = tail;
            head
        };

        let folded = piece.replace("\r\n", " ").replace('\n', " ");
        let trimmed = folded.trim();
        if !trimmed.is_empty() {
            wrapped.push(trimmed.to_string());
        }
    }

    wrapped.join("\n")
}
