use crate::constants::{
    LANDSCAPE_HEIGHT_MM, LANDSCAPE_WIDTH_MM, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Cannot generate {required} unique characters. Pool only has {available} characters")]
    InsufficientPool { required: usize, available: usize },
    #[error("Preset name cannot be empty")]
    EmptyPresetName,
    #[error("A preset named '{0}' already exists")]
    DuplicatePresetName(String),
    #[error("Preset '{0}' is built in and cannot be deleted")]
    BuiltInPreset(String),
    #[error("No preset named '{0}'")]
    PresetNotFound(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
    #[error("Invalid CSV layout: {0}")]
    InvalidCsv(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ChartError>;

/// Page orientation of an A4 sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }

    pub fn geometry(self) -> PageGeometry {
        PageGeometry::for_orientation(self)
    }
}

/// Physical page size in millimetres, derived from the orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageGeometry {
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Self {
                width_mm: LANDSCAPE_WIDTH_MM,
                height_mm: LANDSCAPE_HEIGHT_MM,
            },
            Orientation::Portrait => Self {
                width_mm: LANDSCAPE_HEIGHT_MM,
                height_mm: LANDSCAPE_WIDTH_MM,
            },
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width_mm / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height_mm / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    /// Clamp a point to the page rectangle
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(0.0, self.width_mm), y.clamp(0.0, self.height_mm))
    }
}

/// One placed glyph on the chart.
///
/// Coordinates are the glyph centre in millimetres from the top-left corner
/// of the page; the font size is in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedCharacter {
    pub id: u32,
    #[serde(rename = "char")]
    pub glyph: char,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

impl PositionedCharacter {
    pub fn new(id: u32, glyph: char, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            id,
            glyph,
            x,
            y,
            font_size,
        }
    }
}

/// Single-field edit applied to a record by id
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LetterField {
    Char(char),
    X(f32),
    Y(f32),
    FontSize(f32),
}

impl LetterField {
    pub(crate) fn apply(self, letter: &mut PositionedCharacter) {
        match self {
            LetterField::Char(c) => letter.glyph = c,
            LetterField::X(x) => letter.x = x,
            LetterField::Y(y) => letter.y = y,
            LetterField::FontSize(size) => {
                letter.font_size = size.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT)
            }
        }
    }
}

/// Rows and columns a grid layout was generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

/// sRGB colour persisted as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }

        // Shorthand #RGB expands each nibble
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// The fixed list of selectable font stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::SansSerif,
        FontFamily::Serif,
        FontFamily::Monospace,
    ];

    /// CSS font stack, also the persisted value
    pub fn css_value(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Arial, Helvetica, sans-serif",
            FontFamily::Serif => "'Times New Roman', Times, serif",
            FontFamily::Monospace => "'Courier New', Courier, monospace",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans Serif (Clean)",
            FontFamily::Serif => "Serif (Classic)",
            FontFamily::Monospace => "Monospace (Technical)",
        }
    }

    /// Generic family keyword understood by font databases
    pub fn generic_name(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

impl From<String> for FontFamily {
    fn from(value: String) -> Self {
        FontFamily::ALL
            .into_iter()
            .find(|family| {
                family.css_value() == value
                    || family.generic_name().eq_ignore_ascii_case(value.trim())
            })
            .unwrap_or_else(|| {
                log::warn!("Unknown font family '{}', using sans-serif", value);
                FontFamily::SansSerif
            })
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        family.css_value().to_string()
    }
}

/// Colours and font applied to the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    pub bg_color: HexColor,
    pub text_color: HexColor,
    #[serde(default)]
    pub font_family: FontFamily,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            bg_color: HexColor::WHITE,
            text_color: HexColor::BLACK,
            font_family: FontFamily::SansSerif,
        }
    }
}
