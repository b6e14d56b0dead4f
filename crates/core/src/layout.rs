//! Fixed page layout for the fall report
//!
//! The layout is computed separately from PDF serialization so the placed
//! text can be inspected directly. Coordinates are millimetres in PDF space
//! (origin bottom-left, `y` is the text baseline).

use crate::report::ReportFields;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
/// Distance from the page bottom at which a new page is started
pub const BOTTOM_MARGIN_MM: f32 = 20.0;
pub const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
pub const ROW_HEIGHT_MM: f32 = 10.0;

pub const TITLE: &str = "Patient Fall Report";
pub const TITLE_SIZE_PT: f32 = 16.0;
pub const BODY_SIZE_PT: f32 = 12.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Zero-based page index
    pub page: usize,
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub weight: FontWeight,
}

/// All text of a report, in render order
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub title: String,
    pub page_count: usize,
    pub lines: Vec<TextLine>,
}

impl ReportLayout {
    /// Lay out a fall report: centered title, the patient block,
    /// place of fall, then the wrapped nurse notes.
    pub fn fall_report(fields: &ReportFields) -> Self {
        let mut cursor = Cursor::new();

        cursor.centered(TITLE, TITLE_SIZE_PT, FontWeight::Bold);

        for line in [
            format!("Patient Name: {}", fields.patient_name),
            format!("Patient ID: {}", fields.patient_id),
            format!("Gender: {}", fields.gender),
            format!("Birth Date: {}", fields.birth_date),
            format!("Place Of Fall: {}", fields.place_of_fall),
        ] {
            cursor.left(line, BODY_SIZE_PT, FontWeight::Regular);
        }

        let notes = format!("Nurse Notes: {}", fields.nurse_notes);
        for line in wrap_text(&notes, CONTENT_WIDTH_MM, BODY_SIZE_PT, FontWeight::Regular) {
            cursor.left(line, BODY_SIZE_PT, FontWeight::Regular);
        }

        Self {
            title: TITLE.to_string(),
            page_count: cursor.page + 1,
            lines: cursor.lines,
        }
    }

    /// Text of every line, in order
    pub fn text(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// Row cursor, top-down, with automatic page breaks
struct Cursor {
    page: usize,
    /// Distance of the next row's top edge from the page top
    top_mm: f32,
    lines: Vec<TextLine>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            page: 0,
            top_mm: MARGIN_MM,
            lines: Vec::new(),
        }
    }

    fn left(&mut self, text: impl Into<String>, size_pt: f32, weight: FontWeight) {
        self.place(text.into(), MARGIN_MM, size_pt, weight);
    }

    fn centered(&mut self, text: &str, size_pt: f32, weight: FontWeight) {
        let width = text_width_mm(text, size_pt, weight);
        let x = MARGIN_MM + ((CONTENT_WIDTH_MM - width) / 2.0).max(0.0);
        self.place(text.to_string(), x, size_pt, weight);
    }

    fn place(&mut self, text: String, x_mm: f32, size_pt: f32, weight: FontWeight) {
        if self.top_mm + ROW_HEIGHT_MM > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
            self.page += 1;
            self.top_mm = MARGIN_MM;
        }

        // Vertically centre the glyphs in the row
        let baseline_from_top = self.top_mm + ROW_HEIGHT_MM / 2.0 + 0.3 * size_pt * MM_PER_PT;
        self.lines.push(TextLine {
            page: self.page,
            text,
            x_mm,
            y_mm: PAGE_HEIGHT_MM - baseline_from_top,
            size_pt,
            weight,
        });
        self.top_mm += ROW_HEIGHT_MM;
    }
}

/// Greedy word wrap by rendered width. Explicit newlines start a new line;
/// a word wider than the line is broken between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, size_pt, weight) <= max_width_mm;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                current.push(ch);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
        lines.push(current);
    }

    lines
}

/// Rendered width of `text` in the built-in Helvetica faces
pub fn text_width_mm(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA_WIDTHS,
        FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    let units: u32 = text
        .chars()
        .map(|c| match c as u32 {
            code @ 32..=126 => u32::from(table[(code - 32) as usize]),
            _ => DEFAULT_GLYPH_WIDTH,
        })
        .sum();

    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

const DEFAULT_GLYPH_WIDTH: u32 = 556;

// Glyph advance widths (1/1000 em) for ASCII 32..=126, from the standard AFM metrics.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];
