//! Uniform row/column grid

use crate::constants::{GRID_FONT_SIZE_PT, GRID_MARGIN_MM, LETTERS};
use crate::types::{Orientation, PositionedCharacter};

/// Place `rows * cols` glyphs evenly inside the grid margin.
///
/// Glyphs cycle through the alphabet (`index mod 26`). A single row or column
/// collapses that axis onto the margin line.
pub fn generate_grid(rows: usize, cols: usize, orientation: Orientation) -> Vec<PositionedCharacter> {
    let geometry = orientation.geometry();
    let alphabet: Vec<char> = LETTERS.chars().collect();

    let step = |extent: f32, count: usize| {
        if count > 1 {
            (extent - GRID_MARGIN_MM * 2.0) / (count - 1) as f32
        } else {
            0.0
        }
    };
    let step_x = step(geometry.width_mm, cols);
    let step_y = step(geometry.height_mm, rows);

    let mut letters = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let index = letters.len();
            letters.push(PositionedCharacter::new(
                index as u32,
                alphabet[index % alphabet.len()],
                GRID_MARGIN_MM + c as f32 * step_x,
                GRID_MARGIN_MM + r as f32 * step_y,
                GRID_FONT_SIZE_PT,
            ));
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn standard_grid_corners() {
        let letters = generate_grid(4, 7, Orientation::Landscape);
        assert_eq!(letters.len(), 28);

        let first = &letters[0];
        assert_eq!(first.glyph, 'A');
        assert!(approx(first.x, 20.0) && approx(first.y, 20.0));
        assert_eq!(first.font_size, 12.0);

        let last = &letters[27];
        assert_eq!(last.glyph, 'B');
        assert!(approx(last.x, 277.0), "x = {}", last.x);
        assert!(approx(last.y, 190.0), "y = {}", last.y);
    }

    #[test]
    fn ids_are_contiguous() {
        let letters = generate_grid(5, 9, Orientation::Portrait);
        let ids: Vec<u32> = letters.iter().map(|l| l.id).collect();
        assert_eq!(ids, (0..45).collect::<Vec<_>>());
    }

    #[test]
    fn positions_stay_inside_margins() {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let geometry = orientation.geometry();
            for letter in generate_grid(20, 30, orientation) {
                assert!(letter.x >= GRID_MARGIN_MM - 1e-3);
                assert!(letter.x <= geometry.width_mm - GRID_MARGIN_MM + 1e-3);
                assert!(letter.y >= GRID_MARGIN_MM - 1e-3);
                assert!(letter.y <= geometry.height_mm - GRID_MARGIN_MM + 1e-3);
            }
        }
    }

    #[test]
    fn single_row_and_column_collapse() {
        let row = generate_grid(1, 5, Orientation::Landscape);
        assert_eq!(row.len(), 5);
        assert!(row.iter().all(|l| l.y == GRID_MARGIN_MM));
        assert!(row.iter().all(|l| l.x.is_finite()));

        let col = generate_grid(6, 1, Orientation::Landscape);
        assert!(col.iter().all(|l| l.x == GRID_MARGIN_MM));

        let single = generate_grid(1, 1, Orientation::Landscape);
        assert_eq!(single.len(), 1);
        assert_eq!((single[0].x, single[0].y), (GRID_MARGIN_MM, GRID_MARGIN_MM));
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(generate_grid(0, 7, Orientation::Landscape).is_empty());
        assert!(generate_grid(4, 0, Orientation::Landscape).is_empty());
    }
}
