//! Hard-coded chart variants
//!
//! Each variant is a static table of `(char, x mm, y mm, size pt)` drawn on a
//! landscape page and emitted in table order.

use crate::types::PositionedCharacter;

type LiteralEntry = (char, f32, f32, f32);

/// A named, fixed set of positioned glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralChart {
    pub name: &'static str,
    entries: &'static [LiteralEntry],
}

impl LiteralChart {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn letters(&self) -> Vec<PositionedCharacter> {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, &(glyph, x, y, size))| PositionedCharacter::new(id as u32, glyph, x, y, size))
            .collect()
    }
}

/// Two columns hugging the left and right edges for horizontal saccades
const SACCADE_COLUMNS: &[LiteralEntry] = &[
    ('E', 25.0, 30.0, 24.0),
    ('K', 272.0, 30.0, 24.0),
    ('T', 25.0, 60.0, 24.0),
    ('A', 272.0, 60.0, 24.0),
    ('M', 25.0, 90.0, 24.0),
    ('R', 272.0, 90.0, 24.0),
    ('Z', 25.0, 120.0, 24.0),
    ('H', 272.0, 120.0, 24.0),
    ('C', 25.0, 150.0, 24.0),
    ('N', 272.0, 150.0, 24.0),
    ('P', 25.0, 180.0, 24.0),
    ('F', 272.0, 180.0, 24.0),
];

/// Rows shrinking from top to bottom, centred on the page
const ACUITY_LADDER: &[LiteralEntry] = &[
    ('E', 148.5, 30.0, 72.0),
    ('F', 133.5, 70.0, 48.0),
    ('P', 163.5, 70.0, 48.0),
    ('T', 123.5, 100.0, 36.0),
    ('O', 148.5, 100.0, 36.0),
    ('Z', 173.5, 100.0, 36.0),
    ('L', 118.5, 125.0, 24.0),
    ('P', 138.5, 125.0, 24.0),
    ('E', 158.5, 125.0, 24.0),
    ('D', 178.5, 125.0, 24.0),
    ('P', 116.5, 145.0, 18.0),
    ('E', 132.5, 145.0, 18.0),
    ('C', 148.5, 145.0, 18.0),
    ('F', 164.5, 145.0, 18.0),
    ('D', 180.5, 145.0, 18.0),
    ('E', 118.5, 162.0, 14.0),
    ('D', 130.5, 162.0, 14.0),
    ('F', 142.5, 162.0, 14.0),
    ('C', 154.5, 162.0, 14.0),
    ('Z', 166.5, 162.0, 14.0),
    ('P', 178.5, 162.0, 14.0),
    ('F', 121.5, 177.0, 10.0),
    ('E', 130.5, 177.0, 10.0),
    ('L', 139.5, 177.0, 10.0),
    ('O', 148.5, 177.0, 10.0),
    ('P', 157.5, 177.0, 10.0),
    ('Z', 166.5, 177.0, 10.0),
    ('D', 175.5, 177.0, 10.0),
];

pub const LITERAL_CHARTS: [LiteralChart; 2] = [
    LiteralChart {
        name: "Saccade Columns",
        entries: SACCADE_COLUMNS,
    },
    LiteralChart {
        name: "Acuity Ladder",
        entries: ACUITY_LADDER,
    },
];

/// Look a variant up by name, ignoring case
pub fn find_literal_chart(name: &str) -> Option<LiteralChart> {
    LITERAL_CHARTS
        .into_iter()
        .find(|chart| chart.name.eq_ignore_ascii_case(name.trim()))
}
