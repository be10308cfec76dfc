//! Multi-page export
//!
//! Pages are rasterized one after another off the async runtime, reporting
//! progress per page. The PDF document is not `Send`, so it is assembled in a
//! single blocking task once every page is ready. Any failure aborts the
//! whole document.

use crate::options::ExportOptions;
use crate::pdf::PdfAssembler;
use crate::raster::PageRenderer;
use crate::svg::build_page_svg;
use crate::types::Result;
use chart_core::constants::PRODUCT_TAG;
use chart_core::{PositionedCharacter, regenerate};
use chrono::NaiveDate;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A finished PDF and the letters drawn on each of its pages
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub page_count: usize,
    pub pages: Vec<Vec<PositionedCharacter>>,
}

/// `vision-trainer-patterns_<N>pages_<YYYY-MM-DD>.pdf`
pub fn export_filename(copies: usize, date: NaiveDate) -> String {
    format!("{}_{}pages_{}.pdf", PRODUCT_TAG, copies, date.format("%Y-%m-%d"))
}

/// Letters for page `index`: the base layout on the first page, a fresh
/// regeneration afterwards, falling back to the base when regeneration fails.
pub fn page_letters<R: Rng>(
    base: &[PositionedCharacter],
    index: usize,
    options: &ExportOptions,
    rng: &mut R,
) -> Vec<PositionedCharacter> {
    if index == 0 {
        return base.to_vec();
    }
    match regenerate(base, options.include_digits, options.allow_duplicates, rng) {
        Ok(letters) => letters,
        Err(e) => {
            log::warn!("Page {} keeps the base letters: {}", index + 1, e);
            base.to_vec()
        }
    }
}

/// Letters for every copy, in page order
pub fn page_layouts<R: Rng>(
    base: &[PositionedCharacter],
    options: &ExportOptions,
    rng: &mut R,
) -> Vec<Vec<PositionedCharacter>> {
    (0..options.copies)
        .map(|index| page_letters(base, index, options, rng))
        .collect()
}

/// Render `options.copies` pages into one PDF.
///
/// `on_progress(done, total)` is called after each page is rasterized.
pub async fn export_document<R, F>(
    base: &[PositionedCharacter],
    options: &ExportOptions,
    renderer: Arc<dyn PageRenderer>,
    rng: &mut R,
    mut on_progress: F,
) -> Result<ExportedDocument>
where
    R: Rng + Send,
    F: FnMut(usize, usize) + Send,
{
    options.validate()?;

    let total = options.copies;
    let geometry = options.geometry();
    let mut images = Vec::with_capacity(total);
    let mut pages = Vec::with_capacity(total);

    log::info!("Exporting {} page(s), {} letters each", total, base.len());

    for index in 0..total {
        let letters = page_letters(base, index, options, rng);
        let svg = build_page_svg(&letters, &options.page_settings, geometry, options.show_fixation);

        let renderer = renderer.clone();
        let scale = options.scale;
        let image = tokio::task::spawn_blocking(move || renderer.render(&svg, geometry, scale)).await??;

        images.push(image);
        pages.push(letters);
        on_progress(index + 1, total);
    }

    let bytes =
        tokio::task::spawn_blocking(move || PdfAssembler::from_pages(geometry, &images)).await??;

    Ok(ExportedDocument {
        bytes,
        filename: export_filename(total, chrono::Local::now().date_naive()),
        page_count: total,
        pages,
    })
}

/// Write the document into `dir` under its own filename
pub async fn save_document(document: &ExportedDocument, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&document.filename);
    tokio::fs::write(&path, &document.bytes).await?;
    log::info!("Saved {} ({} bytes)", path.display(), document.bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            export_filename(3, date),
            "vision-trainer-patterns_3pages_2024-03-07.pdf"
        );
    }
}
