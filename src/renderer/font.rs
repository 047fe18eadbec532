//! 5x7 pixel font
//!
//! HUD and overlay text expands into the same flat-colored quads as the
//! sprites, one cell per set bit. Uppercase letters, digits, and a
//! little punctuation; anything else renders as a blank advance.

use super::shapes::rect;
use super::vertex::Vertex;

/// Glyph cell grid
pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal advance in cells (glyph plus one cell of spacing)
const ADVANCE: f32 = 6.0;

/// Bit rows for a glyph, leftmost pixel in the highest of 5 bits
#[rustfmt::skip]
fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Draw `text` with its top-left at (x, y); `cell` is the world size of
/// one font cell
pub fn draw_text(text: &str, x: f32, y: f32, cell: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch.to_ascii_uppercase()) {
            for (r, row) in rows.iter().enumerate() {
                for c in 0..GLYPH_WIDTH {
                    if (row >> (GLYPH_WIDTH - 1 - c)) & 1 == 1 {
                        rect(
                            pen_x + c as f32 * cell,
                            y + r as f32 * cell,
                            cell,
                            cell,
                            color,
                            out,
                        );
                    }
                }
            }
        }
        pen_x += ADVANCE * cell;
    }
}

/// Width of `text` in world units at the given cell size
pub fn text_width(text: &str, cell: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    (text.chars().count() as f32 * ADVANCE - 1.0) * cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2.0), 0.0);
        // One glyph: 5 cells wide
        assert_eq!(text_width("A", 2.0), 10.0);
        // Two glyphs: 5 + 1 gap + 5 cells
        assert_eq!(text_width("AB", 2.0), 22.0);
    }

    #[test]
    fn test_needed_glyphs_exist() {
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-:".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_glyph_fills_full_cell_grid() {
        // 'L' reaches the top row, the bottom row, and both edge columns
        let mut out = Vec::new();
        draw_text("L", 0.0, 0.0, 1.0, [1.0; 4], &mut out);
        let max_x = out.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = out.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, GLYPH_WIDTH as f32);
        assert_eq!(max_y, GLYPH_HEIGHT as f32);
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        draw_text("SCORE", 0.0, 0.0, 2.0, [1.0; 4], &mut upper);
        draw_text("score", 0.0, 0.0, 2.0, [1.0; 4], &mut lower);
        assert_eq!(upper.len(), lower.len());
    }

    #[test]
    fn test_unknown_chars_render_blank() {
        let mut out = Vec::new();
        draw_text("~~~", 0.0, 0.0, 2.0, [1.0; 4], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_space_advances_without_quads() {
        let mut with_space = Vec::new();
        let mut without = Vec::new();
        draw_text("A A", 0.0, 0.0, 2.0, [1.0; 4], &mut with_space);
        draw_text("AA", 0.0, 0.0, 2.0, [1.0; 4], &mut without);
        assert_eq!(with_space.len(), without.len());
        // The trailing glyph sits one advance further over
        let max_x = |vs: &[Vertex]| {
            vs.iter()
                .map(|v| v.position[0])
                .fold(f32::MIN, f32::max)
        };
        assert!(max_x(&with_space) > max_x(&without));
    }
}
