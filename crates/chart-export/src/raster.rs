//! Offscreen rasterization of page SVGs

use crate::types::{ExportError, Result};
use chart_core::PageGeometry;
use chart_core::constants::CSS_PX_PER_MM;
use image::RgbaImage;
use std::sync::Arc;

/// Turns a page SVG into pixels
pub trait PageRenderer: Send + Sync {
    fn render(&self, svg: &str, geometry: PageGeometry, scale: f32) -> Result<RgbaImage>;
}

/// Pixel size of a page at 96 dpi times `scale`
pub fn raster_size(geometry: PageGeometry, scale: f32) -> (u32, u32) {
    let px = |mm: f32| ((mm * CSS_PX_PER_MM * scale).round() as u32).max(1);
    (px(geometry.width_mm), px(geometry.height_mm))
}

/// resvg-backed renderer sharing one font database across pages
#[derive(Clone)]
pub struct ResvgRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ResvgRenderer {
    /// Renderer using the fonts installed on this machine
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} system font faces", db.len());
        Self { fontdb: Arc::new(db) }
    }

    /// Renderer with no fonts at all; glyphs are skipped
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Add a font file and use it for the generic families that have no
    /// installed face
    pub fn with_font_data(data: Vec<u8>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        db.load_font_data(data);

        let family_name = db
            .faces()
            .last()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
        if let Some(name) = family_name {
            db.set_sans_serif_family(name.clone());
            db.set_serif_family(name.clone());
            db.set_monospace_family(name);
        }
        Self { fontdb: Arc::new(db) }
    }
}

impl Default for ResvgRenderer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}

impl PageRenderer for ResvgRenderer {
    fn render(&self, svg: &str, geometry: PageGeometry, scale: f32) -> Result<RgbaImage> {
        let mut opt = usvg::Options::default();
        opt.fontdb = self.fontdb.clone();

        let tree = usvg::Tree::from_str(svg, &opt)
            .map_err(|e| ExportError::Render(format!("SVG parse error: {e}")))?;

        let (width, height) = raster_size(geometry, scale);
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ExportError::Render(format!("Cannot allocate {width}x{height} pixmap")))?;

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap_to_image(&pixmap)
    }
}

/// Demultiply tiny-skia's premultiplied pixels into a straight RGBA buffer
fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| ExportError::Render("Pixel buffer size mismatch".into()))
}
