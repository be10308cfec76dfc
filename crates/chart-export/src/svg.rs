//! SVG description of one chart page
//!
//! The viewBox is in millimetres so glyph coordinates are used as-is. The
//! same markup feeds the rasterizer and the print document.

use chart_core::constants::{FIXATION_DIAMETER_MM, FIXATION_OPACITY, FIXATION_STROKE_MM, pt_to_mm};
use chart_core::{PageGeometry, PageSettings, PositionedCharacter};
use std::fmt::Write;

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Background, optional fixation ring and every glyph, bold and centred on
/// its coordinate.
pub fn build_page_svg(
    letters: &[PositionedCharacter],
    settings: &PageSettings,
    geometry: PageGeometry,
    show_fixation: bool,
) -> String {
    let (w, h) = (geometry.width_mm, geometry.height_mm);
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        settings.bg_color
    );

    if show_fixation {
        let (cx, cy) = geometry.center();
        let _ = writeln!(
            svg,
            r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
            FIXATION_DIAMETER_MM / 2.0,
            settings.text_color,
            FIXATION_STROKE_MM,
            FIXATION_OPACITY
        );
    }

    let _ = writeln!(
        svg,
        r#"<g fill="{}" font-family="{}" font-weight="bold" text-anchor="middle" dominant-baseline="central">"#,
        settings.text_color,
        escape_xml(settings.font_family.css_value())
    );
    for letter in letters {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="{}">{}</text>"#,
            letter.x,
            letter.y,
            pt_to_mm(letter.font_size),
            escape_xml(&letter.glyph.to_string())
        );
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{HexColor, Orientation};

    #[test]
    fn page_markup() {
        let settings = PageSettings {
            bg_color: HexColor::new(0x11, 0x22, 0x33),
            ..Default::default()
        };
        let letters = vec![PositionedCharacter::new(0, '&', 10.0, 20.0, 72.0)];
        let svg = build_page_svg(&letters, &settings, Orientation::Landscape.geometry(), false);

        assert!(svg.contains(r#"viewBox="0 0 297 210""#));
        assert!(svg.contains(r##"fill="#112233""##));
        assert!(svg.contains(r#"<text x="10" y="20" font-size="25.4"#));
        assert!(svg.contains(">&amp;</text>"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn quoted_font_stack_is_escaped() {
        let settings = PageSettings {
            font_family: chart_core::FontFamily::Serif,
            ..Default::default()
        };
        let svg = build_page_svg(&[], &settings, Orientation::Landscape.geometry(), false);
        assert!(svg.contains("font-family=\"&apos;Times New Roman&apos;, Times, serif\""));
    }

    #[test]
    fn fixation_ring_at_centre() {
        let svg = build_page_svg(&[], &PageSettings::default(), Orientation::Portrait.geometry(), true);
        assert!(svg.contains(r##"<circle cx="105" cy="148.5" r="2" fill="none" stroke="#000000" stroke-width="0.5" opacity="0.5"/>"##));
    }
}
