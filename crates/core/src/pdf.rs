//! PDF serialization of a report layout

use std::io::BufWriter;

use base64::{Engine, engine::general_purpose::STANDARD};
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfLayerReference};

use crate::error::ReportError;
use crate::layout::{FontWeight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, ReportLayout};
use crate::report::ReportFields;

const LAYER_NAME: &str = "Layer 1";

/// Write a layout to PDF bytes using the built-in Helvetica faces
pub fn render_pdf(layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(
        &layout.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(format!("font error: {e}")))?;

    let mut layers: Vec<PdfLayerReference> = vec![doc.get_page(page1).get_layer(layer1)];
    for _ in 1..layout.page_count {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for line in &layout.lines {
        let layer = layers
            .get(line.page)
            .ok_or_else(|| ReportError::Render(format!("line placed on missing page {}", line.page)))?;
        let font = match line.weight {
            FontWeight::Regular => &regular,
            FontWeight::Bold => &bold,
        };
        let text = encodable_text(&line.text)?;
        layer.use_text(text, line.size_pt, Mm(line.x_mm), Mm(line.y_mm), font);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Render(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Render(format!("buffer error: {e}")))
}

/// Map `text` onto the Latin-1 range the built-in fonts can encode.
///
/// Typographic punctuation is folded to its ASCII form and other whitespace
/// becomes a space. Any other character outside Latin-1 is an error; the
/// fonts would drop it from the page.
fn encodable_text(text: &str) -> Result<String, ReportError> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => out.push(c),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            c if c.is_whitespace() => out.push(' '),
            other => {
                return Err(ReportError::Render(format!(
                    "character '{other}' (U+{:04X}) cannot be encoded with the built-in fonts",
                    other as u32
                )));
            }
        }
    }
    Ok(out)
}

/// Lay out, render and base64-encode a fall report
pub fn render_report(fields: &ReportFields) -> Result<String, ReportError> {
    let layout = ReportLayout::fall_report(fields);
    let bytes = render_pdf(&layout)?;
    Ok(STANDARD.encode(bytes))
}
