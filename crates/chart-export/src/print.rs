//! Print-ready HTML
//!
//! One sheet per copy with a page break between sheets and exact colours, so
//! a browser print dialog reproduces the PDF pages.

use crate::pdf::DOCUMENT_TITLE;
use crate::svg::build_page_svg;
use chart_core::{Orientation, PageSettings, PositionedCharacter};
use std::fmt::Write;

pub fn build_print_document(
    pages: &[Vec<PositionedCharacter>],
    settings: &PageSettings,
    orientation: Orientation,
    show_fixation: bool,
) -> String {
    let geometry = orientation.geometry();
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
@page {{ size: A4 {orientation}; margin: 0; }}
* {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}
html, body {{ margin: 0; padding: 0; }}
.sheet {{ width: {w}mm; height: {h}mm; overflow: hidden; page-break-after: always; break-after: page; }}
.sheet:last-child {{ page-break-after: auto; break-after: auto; }}
.sheet svg {{ display: block; width: {w}mm; height: {h}mm; }}
</style>
</head>
<body style="background: {bg};">
"#,
        title = DOCUMENT_TITLE,
        orientation = orientation.name(),
        w = geometry.width_mm,
        h = geometry.height_mm,
        bg = settings.bg_color,
    );

    for letters in pages {
        html.push_str("<section class=\"sheet\">\n");
        html.push_str(&build_page_svg(letters, settings, geometry, show_fixation));
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::generators::generate_grid;

    #[test]
    fn one_sheet_per_page() {
        let page = generate_grid(2, 2, Orientation::Portrait);
        let html = build_print_document(
            &[page.clone(), page.clone(), page],
            &PageSettings::default(),
            Orientation::Portrait,
            true,
        );

        assert_eq!(html.matches("<section class=\"sheet\">").count(), 3);
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains("size: A4 portrait"));
        assert!(html.contains("print-color-adjust: exact"));
        assert!(html.contains("width: 210mm; height: 297mm"));
    }
}
