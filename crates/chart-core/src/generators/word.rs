//! Pixel-art word shapes
//!
//! Each word is drawn with a five-row bitmap font; every lit cell becomes one
//! randomly lettered record.

use crate::constants::{LETTERS, WORD_CELL_MM, WORD_FONT_SIZE_PT, WORD_VERTICAL_LIFT_MM};
use crate::types::{Orientation, PositionedCharacter};
use rand::Rng;

const GLYPH_ROWS: usize = 5;

pub const DEFAULT_TOP_WORD: &str = "HELLO";
pub const DEFAULT_BOTTOM_WORD: &str = "WORLD";

/// Bitmap rows for a supported character, `'1'` marking a lit cell
fn glyph_pattern(c: char) -> [&'static str; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        'H' => ["101", "101", "111", "101", "101"],
        'E' => ["111", "100", "111", "100", "111"],
        'L' => ["100", "100", "100", "100", "111"],
        'O' => ["111", "101", "101", "101", "111"],
        'W' => ["10001", "10001", "10101", "10101", "11011"],
        'R' => ["111", "101", "110", "101", "101"],
        'D' => ["110", "101", "101", "101", "110"],
        '!' => ["1", "1", "1", "0", "1"],
        _ => ["00", "00", "00", "00", "00"],
    }
}

/// Whether `c` has its own bitmap; anything else renders as a space
pub fn is_supported_glyph(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'H' | 'E' | 'L' | 'O' | 'W' | 'R' | 'D' | '!' | ' '
    )
}

/// Concatenate the bitmaps of `word`, with one blank column after every
/// character except a literal space. Unsupported characters draw blank but
/// keep their gap.
fn word_bitmap(word: &str) -> [Vec<bool>; GLYPH_ROWS] {
    let mut rows: [Vec<bool>; GLYPH_ROWS] = Default::default();
    for c in word.chars() {
        let pattern = glyph_pattern(c);
        let spaced = c != ' ';
        for (row, bits) in rows.iter_mut().zip(pattern) {
            row.extend(bits.chars().map(|b| b == '1'));
            if spaced {
                row.push(false);
            }
        }
    }
    rows
}

/// Width of a rendered word in millimetres
pub fn word_width_mm(word: &str) -> f32 {
    word_bitmap(word)[0].len() as f32 * WORD_CELL_MM
}

/// Lay out `top` and `bottom` as pixel-art words centred horizontally.
///
/// The top word starts at a quarter of the page height and the bottom word at
/// three quarters, both lifted by a fixed amount.
pub fn generate_word_shape<R: Rng>(
    top: &str,
    bottom: &str,
    orientation: Orientation,
    rng: &mut R,
) -> Vec<PositionedCharacter> {
    let (cx, cy) = orientation.geometry().center();
    let alphabet: Vec<char> = LETTERS.chars().collect();
    let mut letters = Vec::new();

    let rows = [
        (top, cy / 2.0 - WORD_VERTICAL_LIFT_MM),
        (bottom, cy + cy / 2.0 - WORD_VERTICAL_LIFT_MM),
    ];

    for (word, y) in rows {
        let bitmap = word_bitmap(word);
        let start_x = cx - word_width_mm(word) / 2.0;

        for (row, cells) in bitmap.iter().enumerate() {
            for (col, _) in cells.iter().enumerate().filter(|(_, lit)| **lit) {
                let glyph = alphabet[rng.random_range(0..alphabet.len())];
                letters.push(PositionedCharacter::new(
                    letters.len() as u32,
                    glyph,
                    start_x + col as f32 * WORD_CELL_MM,
                    y + row as f32 * WORD_CELL_MM,
                    WORD_FONT_SIZE_PT,
                ));
            }
        }
    }

    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lit_cells(word: &str) -> usize {
        word_bitmap(word).iter().flatten().filter(|b| **b).count()
    }

    #[test]
    fn hello_world_cell_counts() {
        // H=11 E=11 L=7 L=7 O=12
        assert_eq!(lit_cells("HELLO"), 48);
        // W=14 O=12 R=11 L=7 D=10
        assert_eq!(lit_cells("WORLD"), 54);

        let mut rng = StdRng::seed_from_u64(11);
        let letters = generate_word_shape("HELLO", "WORLD", Orientation::Landscape, &mut rng);
        assert_eq!(letters.len(), 102);
        assert!(letters.iter().all(|l| l.glyph.is_ascii_uppercase()));
        assert!(letters.iter().all(|l| l.font_size == WORD_FONT_SIZE_PT));
        let ids: Vec<u32> = letters.iter().map(|l| l.id).collect();
        assert_eq!(ids, (0..102).collect::<Vec<_>>());
    }

    #[test]
    fn words_are_centred() {
        // HELLO: 4 + 4 + 4 + 4 + 4 columns = 20 cells = 160 mm
        assert_eq!(word_width_mm("HELLO"), 160.0);

        let mut rng = StdRng::seed_from_u64(2);
        let letters = generate_word_shape("HELLO", "", Orientation::Landscape, &mut rng);
        let min_x = letters.iter().map(|l| l.x).fold(f32::MAX, f32::min);
        assert_eq!(min_x, 148.5 - 80.0);
        assert_eq!(letters[0].y, 52.5 - 20.0);
    }

    #[test]
    fn bottom_word_row_offset() {
        let mut rng = StdRng::seed_from_u64(2);
        let letters = generate_word_shape("", "L", Orientation::Landscape, &mut rng);
        assert_eq!(letters.len(), 7);
        let top = letters.iter().map(|l| l.y).fold(f32::MAX, f32::min);
        let bottom = letters.iter().map(|l| l.y).fold(f32::MIN, f32::max);
        assert_eq!(top, 105.0 + 52.5 - 20.0);
        assert_eq!(bottom - top, 4.0 * WORD_CELL_MM);
    }

    #[test]
    fn lowercase_folds_and_unknown_is_blank() {
        assert_eq!(lit_cells("hello"), lit_cells("HELLO"));
        assert_eq!(lit_cells("Q"), 0);
        assert_eq!(word_width_mm(" "), 2.0 * WORD_CELL_MM);
        // Unknown glyphs keep the trailing gap column, real spaces do not
        assert_eq!(word_width_mm("Q"), 3.0 * WORD_CELL_MM);
        assert_eq!(word_width_mm("H?I"), word_width_mm("H") + 2.0 * word_width_mm("Q"));
    }

    #[test]
    fn same_seed_same_letters() {
        let a = generate_word_shape("HI", "WORLD", Orientation::Portrait, &mut StdRng::seed_from_u64(8));
        let b = generate_word_shape("HI", "WORLD", Orientation::Portrait, &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
    }
}
