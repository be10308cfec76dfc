//! Pattern generators
//!
//! Every generator returns records with zero-based, contiguous ids in
//! emission order and touches no external state.

mod grid;
mod literal;
mod radial;
mod word;

pub use grid::*;
pub use literal::*;
pub use radial::*;
pub use word::*;

use crate::types::{Orientation, PositionedCharacter};
use rand::Rng;

/// A pattern that can seed a layout
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPattern {
    Grid { rows: usize, cols: usize },
    Radial,
    Word { top: String, bottom: String },
    Literal(LiteralChart),
}

impl ChartPattern {
    pub fn generate<R: Rng>(&self, orientation: Orientation, rng: &mut R) -> Vec<PositionedCharacter> {
        match self {
            ChartPattern::Grid { rows, cols } => generate_grid(*rows, *cols, orientation),
            ChartPattern::Radial => generate_radial(orientation),
            ChartPattern::Word { top, bottom } => generate_word_shape(top, bottom, orientation, rng),
            ChartPattern::Literal(chart) => chart.letters(),
        }
    }
}
