//! Shared constants for chart layout
//!
//! Page sizes, generator parameters, editor limits and storage keys live here
//! so that generators, the editor and the exporter agree on them.

// =============================================================================
// Page Dimensions
// =============================================================================

/// A4 landscape width (mm); portrait uses the transpose
pub const LANDSCAPE_WIDTH_MM: f32 = 297.0;

/// A4 landscape height (mm)
pub const LANDSCAPE_HEIGHT_MM: f32 = 210.0;

/// Points per millimetre (1 inch = 72 points = 25.4 mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// CSS reference pixels per millimetre (96 dpi)
pub const CSS_PX_PER_MM: f32 = 96.0 / 25.4;

#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Character Pool
// =============================================================================

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DIGITS: &str = "0123456789";

// =============================================================================
// Generators
// =============================================================================

/// Margin kept free on every side by the grid generator (mm)
pub const GRID_MARGIN_MM: f32 = 20.0;

/// Font size of every grid glyph (pt)
pub const GRID_FONT_SIZE_PT: f32 = 12.0;

pub const DEFAULT_GRID_ROWS: usize = 4;

pub const DEFAULT_GRID_COLS: usize = 7;

/// Size of one pixel-font cell in the word generator (mm)
pub const WORD_CELL_MM: f32 = 8.0;

/// Glyph size used for word-shape cells (pt)
pub const WORD_FONT_SIZE_PT: f32 = 10.0;

/// Lift applied to both word rows (mm)
pub const WORD_VERTICAL_LIFT_MM: f32 = 20.0;

// =============================================================================
// Editor Limits
// =============================================================================

pub const MIN_FONT_SIZE_PT: f32 = 8.0;

pub const MAX_FONT_SIZE_PT: f32 = 120.0;

pub const MIN_COPIES: usize = 1;

pub const MAX_COPIES: usize = 30;

pub const MAX_GRID_ROWS: usize = 20;

pub const MAX_GRID_COLS: usize = 30;

// =============================================================================
// Fixation Point
// =============================================================================

/// Diameter of the fixation ring (mm)
pub const FIXATION_DIAMETER_MM: f32 = 4.0;

/// Stroke of the fixation ring (mm)
pub const FIXATION_STROKE_MM: f32 = 0.5;

pub const FIXATION_OPACITY: f32 = 0.5;

// =============================================================================
// Storage
// =============================================================================

/// Key under which the preset array is persisted
pub const STORAGE_KEY: &str = "visionTrainerPresets";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "vision-charts";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Prefix of exported PDF file names
pub const PRODUCT_TAG: &str = "vision-trainer-patterns";
