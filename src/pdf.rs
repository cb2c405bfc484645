//! Receipt PDF rendering: a single page the width of 58mm thermal paper,
//! tall enough for the composed text lines, with the shop heading centered
//! above the same body the preview shows.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tempfile::NamedTempFile;

use crate::config::ShopProfile;
use crate::error::BillError;
use crate::format;
use crate::metrics;
use crate::model::Bill;

pub const PAGE_WIDTH_MM: f32 = 58.0;
const LINE_HEIGHT_MM: f32 = 5.08; // 0.2 in per text line
const MARGIN_MM: f32 = 25.4; // 1 in of extra page height
const BODY_LEFT_MM: f32 = 2.54; // 0.1 in from the left edge

const HEADING_SIZE_PT: f32 = 12.0;
const SUBHEADING_SIZE_PT: f32 = 10.0;
const BODY_SIZE_PT: f32 = 8.0;

/// Output file name for a bill: repeated exports for the same customer and
/// phone overwrite the previous receipt on purpose.
pub fn file_name(bill: &Bill) -> String {
    format!("{}_{}.pdf", bill.customer_name, bill.phone_number)
}

fn draw_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size_pt: f32,
    y_mm: f32,
) {
    let width_mm = metrics::pt_to_mm(metrics::bold_text_width_pt(text, size_pt));
    let x = (PAGE_WIDTH_MM - width_mm) / 2.0;
    layer.use_text(text, size_pt, Mm(x), Mm(y_mm), font);
}

/// Renders `bill` into `<customer>_<phone>.pdf` under `out_dir` and returns
/// the final path. Refused while the identity is invalid; on any failure the
/// target path is left untouched because the document is written to a
/// temporary file first and renamed into place.
pub fn export(
    bill: &Bill,
    profile: &ShopProfile,
    out_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, BillError> {
    let lines = format::document_lines(bill, &profile.footer, now)?;
    let page_height = lines.len() as f32 * LINE_HEIGHT_MM + MARGIN_MM;

    let (doc, page, layer) = PdfDocument::new(
        "Bill",
        Mm(PAGE_WIDTH_MM),
        Mm(page_height),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    // Shop heading, three centered bold lines from the top of the page.
    draw_centered(&layer, &bold, &profile.name, HEADING_SIZE_PT, page_height - LINE_HEIGHT_MM);
    draw_centered(
        &layer,
        &bold,
        &profile.address,
        SUBHEADING_SIZE_PT,
        page_height - 2.0 * LINE_HEIGHT_MM,
    );
    draw_centered(
        &layer,
        &bold,
        &profile.phone,
        SUBHEADING_SIZE_PT,
        page_height - 3.0 * LINE_HEIGHT_MM,
    );

    // Body follows the heading block, one composed line per PDF line.
    let mut y = page_height - 4.0 * LINE_HEIGHT_MM;
    for line in &lines {
        layer.use_text(line.as_str(), BODY_SIZE_PT, Mm(BODY_LEFT_MM), Mm(y), &regular);
        y -= LINE_HEIGHT_MM;
    }

    let path = out_dir.join(file_name(bill));
    let tmp = NamedTempFile::new_in(out_dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        doc.save(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(&path).map_err(|e| BillError::Io(e.error))?;
    log::info!("exported receipt to {}", path.display());
    Ok(path)
}

/// Convenience wrapper used by tests and callers that want plain bytes
/// without touching the filesystem.
pub fn render_to_bytes(
    bill: &Bill,
    profile: &ShopProfile,
    now: DateTime<Local>,
) -> Result<Vec<u8>, BillError> {
    let dir = tempfile::tempdir()?;
    let path = export(bill, profile, dir.path(), now)?;
    Ok(std::fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()
    }

    fn sample_bill() -> Bill {
        let mut bill = Bill::new("Ravi", "9999999999");
        bill.add_item("Rice", 2, 50.0).unwrap();
        bill
    }

    #[test]
    fn file_name_is_customer_and_phone() {
        assert_eq!(file_name(&sample_bill()), "Ravi_9999999999.pdf");
    }

    #[test]
    fn export_refused_without_identity() {
        let dir = tempfile::tempdir().unwrap();
        let bill = Bill::new("", "");
        let err = export(&bill, &ShopProfile::default(), dir.path(), fixed_now()).unwrap_err();
        assert!(err.is_validation());
        // Refusal must not leave any file behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_writes_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = export(&sample_bill(), &ShopProfile::default(), dir.path(), fixed_now())
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 4);
    }

    #[test]
    fn render_to_bytes_matches_pdf_header() {
        let bytes =
            render_to_bytes(&sample_bill(), &ShopProfile::default(), fixed_now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
