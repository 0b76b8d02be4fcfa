//! Character-level Unicode classification for Tifinagh text.

/// The labialization mark (U+2D6F). Follows a consonant to form clusters
/// such as ⴳⵯ (gw) and ⴽⵯ (kw).
pub const LABIALIZATION_MARK: char = '\u{2D6F}';

/// Check the full Tifinagh block (U+2D30..U+2D7F). This includes a few
/// unassigned codepoints (U+2D68..U+2D6E, U+2D71..U+2D7E); the block-level
/// check is kept because custom tables may map newly assigned letters.
pub fn is_tifinagh(c: char) -> bool {
    ('\u{2D30}'..='\u{2D7F}').contains(&c)
}

pub fn is_labialization_mark(c: char) -> bool {
    c == LABIALIZATION_MARK
}

/// True if `s` contains at least one Tifinagh character.
#[cfg(test)]
pub fn contains_tifinagh(s: &str) -> bool {
    s.chars().any(is_tifinagh)
}

/// Check if a string is usable as a glyph key: non-empty and made only of
/// Tifinagh characters.
pub fn is_tifinagh_glyph(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tifinagh)
}
