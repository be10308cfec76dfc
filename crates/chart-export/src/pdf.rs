use crate::types::Result;
use chart_core::PageGeometry;
use ::image::{DynamicImage, RgbaImage};
use printpdf::*;

pub const DOCUMENT_TITLE: &str = "Vision Trainer Patterns";

/// Builds a multi-page PDF with one full-bleed raster image per page
pub struct PdfAssembler {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    geometry: PageGeometry,
}

impl PdfAssembler {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            doc: PdfDocument::new(DOCUMENT_TITLE),
            pages: Vec::new(),
            geometry,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append `image` as a page sized to the physical page
    pub fn append(&mut self, image: &RgbaImage) {
        let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        let (width, height) = rgb.dimensions();

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = self.doc.add_image(&raw);

        // Stretch the image over the page width whatever its pixel count
        let dpi = width as f32 / (self.geometry.width_mm / 25.4);
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                dpi: Some(dpi),
                ..Default::default()
            },
        }];

        self.pages.push(PdfPage::new(
            Mm(self.geometry.width_mm),
            Mm(self.geometry.height_mm),
            ops,
        ));
    }

    /// Assemble a whole document from rasterized pages
    pub fn from_pages(geometry: PageGeometry, images: &[RgbaImage]) -> Result<Vec<u8>> {
        let mut assembler = Self::new(geometry);
        for image in images {
            assembler.append(image);
        }
        assembler.finish()
    }

    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.doc.pages = self.pages;

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("PDF warning: {:?}", warning);
        }

        Ok(bytes)
    }
}
