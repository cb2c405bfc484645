//! Advance widths for the built-in Helvetica-Bold face, used to center the
//! shop heading lines on the narrow receipt page. Values are the standard
//! AFM metrics in thousandths of an em, covering printable ASCII.

const FIRST_CHAR: usize = 0x20;

/// Widths for ' ' (0x20) through '~' (0x7E).
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Characters outside the table (rare in shop signage) fall back to the
// digit/lowercase width so centering stays close enough.
const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    let code = c as usize;
    if (FIRST_CHAR..FIRST_CHAR + HELVETICA_BOLD_WIDTHS.len()).contains(&code) {
        HELVETICA_BOLD_WIDTHS[code - FIRST_CHAR]
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in points at the given font size.
pub fn bold_text_width_pt(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * font_size
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / 72.0
}
