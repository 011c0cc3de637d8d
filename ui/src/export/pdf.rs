//! Single-page A4 table rendered with the PDF builtin Helvetica faces.
//!
//! Builtin fonts only cover Latin text, so labels here are the fixed English
//! ones regardless of the UI language.

use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Rgb};
use time::{macros::format_description, OffsetDateTime};

use super::{ExportError, ExportTable, TABLE_HEADER};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 14.0;
const VALUE_COLUMN_X: f32 = 110.0;
const ROW_HEIGHT: f32 = 9.0;

pub fn render_pdf(table: &ExportTable, generated_at: OffsetDateTime) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(&table.title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ExportError::Render(err.to_string()))?;

    let canvas = doc.get_page(page).get_layer(layer);

    // Title block
    let mut y = PAGE_H - 20.0;
    canvas.use_text(&table.title, 18.0, Mm(MARGIN), Mm(y), &bold);
    y -= 8.0;
    canvas.set_fill_color(muted());
    canvas.use_text(
        format!("Campaign type: {}", table.campaign_type),
        10.0,
        Mm(MARGIN),
        Mm(y),
        &regular,
    );
    y -= 5.0;
    canvas.use_text(
        format!("Generated {}", format_generated_at(generated_at)),
        10.0,
        Mm(MARGIN),
        Mm(y),
        &regular,
    );
    canvas.set_fill_color(ink());

    // Header row
    y -= 14.0;
    canvas.use_text(TABLE_HEADER.0, 12.0, Mm(MARGIN), Mm(y), &bold);
    canvas.use_text(TABLE_HEADER.1, 12.0, Mm(VALUE_COLUMN_X), Mm(y), &bold);
    canvas.set_outline_thickness(0.8);
    canvas.add_line(rule(y - 3.0));

    // Body
    canvas.set_outline_thickness(0.3);
    for (label, value) in &table.rows {
        y -= ROW_HEIGHT;
        canvas.use_text(label.as_str(), 11.0, Mm(MARGIN), Mm(y), &regular);
        canvas.use_text(value.as_str(), 11.0, Mm(VALUE_COLUMN_X), Mm(y), &regular);
        canvas.add_line(rule(y - 3.0));
    }

    doc.save_to_bytes()
        .map_err(|err| ExportError::Render(err.to_string()))
}

fn rule(y: f32) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_W - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    }
}

fn ink() -> Color {
    Color::Rgb(Rgb::new(0.1, 0.1, 0.12, None))
}

fn muted() -> Color {
    Color::Rgb(Rgb::new(0.42, 0.45, 0.5, None))
}

fn format_generated_at(at: OffsetDateTime) -> String {
    at.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute] UTC"
    ))
    .unwrap_or_else(|_| at.unix_timestamp().to_string())
}
