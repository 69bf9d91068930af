//! Character constants for the dot canvas.

/// First code point of the Unicode braille block (no dots raised).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot bits of a braille glyph, indexed as `[row][column]` in its 2x4 grid.
pub const BRAILLE_DOTS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Braille glyph for a set of raised dot bits.
pub fn braille(bits: u8) -> char {
    char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_glyphs() {
        assert_eq!(braille(0), '⠀');
        assert_eq!(braille(0x01), '⠁');
        assert_eq!(braille(0xff), '⣿');
        assert_eq!(braille(BRAILLE_DOTS[3][0] | BRAILLE_DOTS[3][1]), '⣀');
    }
}
