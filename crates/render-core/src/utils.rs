/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a standard font using WinAnsiEncoding.
///
/// Latin-1 maps directly; common typographic punctuation maps to its
/// WinAnsi slot. Anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            '\u{0080}'..='\u{009F}' => b'?',
            c if (c as u32) <= 0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(100.0, 842.0), 742.0);
    }

    #[test]
    fn test_to_win_ansi() {
        assert_eq!(to_win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("Sep \u{2013} Now"), b"Sep \x96 Now".to_vec());
        assert_eq!(to_win_ansi("\u{2713}"), b"?".to_vec());
    }
}
