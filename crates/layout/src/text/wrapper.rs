use crate::algorithms::pagination::EPSILON;
use crate::fonts::FontSpec;

/// Greedy word wrap of one paragraph (no `\n` inside).
///
/// Words are joined by single spaces. A word wider than `max_width` on its own
/// is broken between characters; its last piece stays open so following words
/// can share the line. A blank paragraph produces one empty line.
pub fn break_lines(paragraph: &str, max_width: f32, font: &FontSpec, lines: &mut Vec<String>) {
    let space = font.char_width(' ');
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in paragraph.split_whitespace() {
        let word_width = font.text_width(word);

        if !current.is_empty() {
            if current_width + space + word_width <= max_width + EPSILON {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_width <= max_width + EPSILON {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut pieces = break_word(word, max_width, font);
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = font.text_width(&last);
                current = last;
            }
        }
    }

    lines.push(current);
}

/// Splits a word into pieces no wider than `max_width`, at least one char each.
fn break_word(word: &str, max_width: f32, font: &FontSpec) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0.0;

    for ch in word.chars() {
        let w = font.char_width(ch);
        if !piece.is_empty() && piece_width + w > max_width + EPSILON {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0.0;
        }
        piece.push(ch);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_word_makes_progress_at_zero_width() {
        let font = FontSpec::courier(10.0);
        assert_eq!(break_word("abc", 0.0, &font), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_blank_paragraph_is_one_empty_line() {
        let mut lines = Vec::new();
        break_lines("   ", 100.0, &FontSpec::default(), &mut lines);
        assert_eq!(lines, vec![String::new()]);
    }
}
