//! PDF writer: one A4 page per brand, rendered from the shared row grid.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::layout::{report_rows, Cell};
use crate::{BrandReport, ExportError};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const LABEL_COLUMN_MM: f32 = 90.0;
const BODY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 13.0;

pub(crate) fn write_document(reports: &[BrandReport]) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Comparación de marcas",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "contenido",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut page = first_page;
    let mut layer = first_layer;
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "contenido");
            page = next_page;
            layer = next_layer;
        }
        render_page(&doc, page, layer, report, &regular, &bold);
    }

    Ok(doc.save_to_bytes()?)
}

fn render_page(
    doc: &PdfDocumentReference,
    page: printpdf::PdfPageIndex,
    layer: printpdf::PdfLayerIndex,
    report: &BrandReport,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for row in report_rows(report) {
        if y < MARGIN_MM {
            // Overflowing rankings are clipped; ten entries per table fit.
            break;
        }
        if row.is_empty() {
            y -= LINE_HEIGHT_MM / 2.0;
            continue;
        }
        let is_heading = row.len() == 1;
        let (font, size) = if is_heading {
            (bold, HEADING_SIZE)
        } else {
            (regular, BODY_SIZE)
        };
        let mut x = MARGIN_MM;
        for cell in &row {
            match cell {
                Cell::Text(text) => layer.use_text(text.clone(), size, Mm(x), Mm(y), font),
                Cell::Number(value) => {
                    layer.use_text(format_number(*value), size, Mm(x), Mm(y), font);
                }
                Cell::Empty => {}
            }
            x += LABEL_COLUMN_MM;
        }
        y -= LINE_HEIGHT_MM;
    }
}

/// Whole amounts print without a fraction, everything else with two digits.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
