//! Radial X-pattern diagnostic chart
//!
//! Four diagonals run from the page corners towards the centre, shrinking as
//! they go, with a small four-glyph cluster around the centre itself.

use crate::types::{Orientation, PositionedCharacter};

/// One step along a diagonal: offset from centre (mm) and glyph size (pt)
#[derive(Debug, Clone, Copy)]
struct DiagonalStep {
    dx: f32,
    dy: f32,
    size: f32,
}

/// Outer-most step first
const DIAGONAL_STEPS: [DiagonalStep; 6] = [
    DiagonalStep { dx: 110.0, dy: 75.0, size: 90.0 },
    DiagonalStep { dx: 85.0, dy: 55.0, size: 65.0 },
    DiagonalStep { dx: 65.0, dy: 40.0, size: 48.0 },
    DiagonalStep { dx: 48.0, dy: 28.0, size: 36.0 },
    DiagonalStep { dx: 35.0, dy: 18.0, size: 24.0 },
    DiagonalStep { dx: 24.0, dy: 10.0, size: 16.0 },
];

/// Glyphs per quadrant with the quadrant's sign on each axis
const DIAGONALS: [([char; 6], f32, f32); 4] = [
    (['N', 'L', 'V', 'Z', 'K', 'T'], -1.0, -1.0),
    (['Y', 'N', 'T', 'K', 'M', 'A'], 1.0, -1.0),
    (['U', 'T', 'Y', 'A', 'F', 'S'], -1.0, 1.0),
    (['K', 'A', 'X', 'E', 'N', 'P'], 1.0, 1.0),
];

const CENTER_CLUSTER: [(char, f32, f32); 4] = [
    ('L', -1.0, -1.0),
    ('H', 1.0, -1.0),
    ('Y', -1.0, 1.0),
    ('E', 1.0, 1.0),
];

const CENTER_OFFSET_MM: f32 = 7.0;
const CENTER_FONT_SIZE_PT: f32 = 14.0;

/// Number of records [`generate_radial`] always produces
pub const RADIAL_RECORD_COUNT: usize = DIAGONALS.len() * DIAGONAL_STEPS.len() + CENTER_CLUSTER.len();

/// Build the 28-glyph X pattern around the page centre.
///
/// Offsets are fixed; in portrait the outer diagonal steps extend past the
/// narrower page edge.
pub fn generate_radial(orientation: Orientation) -> Vec<PositionedCharacter> {
    let (cx, cy) = orientation.geometry().center();
    let mut letters = Vec::with_capacity(RADIAL_RECORD_COUNT);

    for (chars, qx, qy) in DIAGONALS {
        for (glyph, step) in chars.into_iter().zip(DIAGONAL_STEPS) {
            letters.push(PositionedCharacter::new(
                letters.len() as u32,
                glyph,
                cx + step.dx * qx,
                cy + step.dy * qy,
                step.size,
            ));
        }
    }

    for (glyph, qx, qy) in CENTER_CLUSTER {
        letters.push(PositionedCharacter::new(
            letters.len() as u32,
            glyph,
            cx + CENTER_OFFSET_MM * qx,
            cy + CENTER_OFFSET_MM * qy,
            CENTER_FONT_SIZE_PT,
        ));
    }

    letters
}
