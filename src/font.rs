//! Glyph lookup for the fixed 5x7 font
//!
//! The rendering engine never touches font data directly; it goes through
//! the [`GlyphTable`] trait so tests can substitute a synthetic font. The
//! built-in [`Font5x7`] covers printable ASCII (0x20-0x7E).
//!
//! Glyphs are stored column-major: 5 bytes per character, one byte per
//! pixel column, least significant bit at the top. This matches the
//! controller's page format, so a glyph blits as-is with no repacking.

/// First printable ASCII code covered by the font
pub const FIRST_PRINTABLE: u8 = 0x20;

/// Last printable ASCII code covered by the font
pub const LAST_PRINTABLE: u8 = 0x7E;

/// Pixel columns per glyph (excluding the spacing column)
pub const GLYPH_WIDTH: usize = 5;

/// Read-only lookup of column patterns for printable ASCII
///
/// Implementations must return a pattern for every byte in
/// 0x20-0x7E; callers sanitize out-of-range bytes before lookup.
pub trait GlyphTable {
    /// Column pattern for a printable ASCII byte
    fn glyph(&self, c: u8) -> [u8; GLYPH_WIDTH];
}

/// Substitute unprintable bytes with a space before glyph lookup
///
/// Keeps table access in range for any input byte.
pub fn sanitize(c: u8) -> u8 {
    if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&c) {
        c
    } else {
        b' '
    }
}

/// Built-in 5x7 ASCII font
///
/// Covers 0x20-0x7E. Out-of-range bytes fall back to the space glyph; the
/// driver sanitizes before lookup so the fallback is defensive only.
#[derive(Clone, Copy, Debug, Default)]
pub struct Font5x7;

impl GlyphTable for Font5x7 {
    fn glyph(&self, c: u8) -> [u8; GLYPH_WIDTH] {
        let index = usize::from(sanitize(c) - FIRST_PRINTABLE);
        FONT_5X7[index]
    }
}

/// Column patterns for ASCII 0x20-0x7E, in code order
const FONT_5X7: [[u8; GLYPH_WIDTH]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x02, 0x01, 0x02, 0x04, 0x02], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert_eq!(Font5x7.glyph(b' '), [0x00; 5]);
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(Font5x7.glyph(b'H'), [0x7F, 0x08, 0x08, 0x08, 0x7F]);
        assert_eq!(Font5x7.glyph(b'0'), [0x3E, 0x51, 0x49, 0x45, 0x3E]);
    }

    #[test]
    fn test_sanitize_passes_printable_range() {
        for c in FIRST_PRINTABLE..=LAST_PRINTABLE {
            assert_eq!(sanitize(c), c);
        }
    }

    #[test]
    fn test_sanitize_substitutes_space() {
        assert_eq!(sanitize(0x00), b' ');
        assert_eq!(sanitize(0x1F), b' ');
        assert_eq!(sanitize(0x7F), b' ');
        assert_eq!(sanitize(0xFF), b' ');
        assert_eq!(sanitize(b'\n'), b' ');
    }

    #[test]
    fn test_unprintable_lookup_matches_space() {
        assert_eq!(Font5x7.glyph(0x01), Font5x7.glyph(b' '));
        assert_eq!(Font5x7.glyph(0xC0), Font5x7.glyph(b' '));
    }

    #[test]
    fn test_table_covers_whole_printable_range() {
        assert_eq!(FONT_5X7.len(), usize::from(LAST_PRINTABLE - FIRST_PRINTABLE) + 1);
    }

    #[test]
    fn test_glyphs_fit_seven_rows() {
        // LSB-top, 7 rows used: bit 7 must stay clear everywhere.
        for glyph in &FONT_5X7 {
            for column in glyph {
                assert_eq!(column & 0x80, 0);
            }
        }
    }
}
