use std::io::{self, Write};

use pdf_lite::{LayoutEngine, LayoutParams, PdfDocument};

use crate::content;

pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

const MARGIN_X: f64 = 54.0;
const MARGIN_TOP: f64 = 54.0;
const MARGIN_BOTTOM: f64 = 54.0;

const TITLE_SIZE: f64 = 18.0;
const TITLE_ADVANCE: f64 = 22.0;
const HEADING_SIZE: f64 = 12.0;
const HEADING_ADVANCE: f64 = 16.0;
const BODY_SIZE: f64 = 11.0;
const LEADING: f64 = 14.0;
const SECTION_GAP: f64 = 4.0;

fn layout_params() -> LayoutParams {
    LayoutParams {
        page_height: PAGE_HEIGHT,
        margin_x: MARGIN_X,
        margin_top: MARGIN_TOP,
        margin_bottom: MARGIN_BOTTOM,
        title_size: TITLE_SIZE,
        title_advance: TITLE_ADVANCE,
        heading_size: HEADING_SIZE,
        heading_advance: HEADING_ADVANCE,
        body_size: BODY_SIZE,
        leading: LEADING,
        section_gap: SECTION_GAP,
        bullet_wrap_chars: content::MAX_CHARS_BULLET,
    }
}

/// Render the one-page summary report into the given writer.
pub fn render<W: Write>(writer: W) -> io::Result<W> {
    let mut doc = PdfDocument::new(writer)?;
    doc.begin_page(PAGE_WIDTH, PAGE_HEIGHT);

    let placements =
        LayoutEngine::new(layout_params()).lay_out(&content::sections());
    for placement in &placements {
        doc.place(placement);
    }

    doc.end_page()?;
    doc.end_document()
}
