//! Text measurement for the PDF standard Helvetica faces.
//!
//! Built-in PDF fonts are not embedded, so widths come from the Adobe AFM
//! tables (units of 1/1000 em) for printable ASCII. Anything outside that
//! range is measured as a digit.

use crate::layout::{FontWeight, PT_TO_MM};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.15;

/// Width used for characters missing from the tables.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & '
    278, 278, 355, 556, 556, 889, 667, 191,
    // ( ) * + , - . /
    333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n-z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // space ! " # $ % & '
    278, 333, 474, 556, 556, 889, 722, 238,
    // ( ) * + , - . /
    333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n-z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

fn glyph_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let code = ch as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, weight: FontWeight, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, weight))).sum();
    f64::from(units) / 1000.0 * size_pt * PT_TO_MM
}

/// Distance between consecutive baselines, in millimetres.
pub fn line_height_mm(size_pt: f64) -> f64 {
    size_pt * LINE_HEIGHT_FACTOR * PT_TO_MM
}

/// Height of a block of `line_count` lines, in millimetres.
pub fn block_height_mm(line_count: usize, size_pt: f64) -> f64 {
    line_count as f64 * line_height_mm(size_pt)
}

/// Greedy word wrap to `max_width_mm`.
///
/// Each `\n` starts a new line, so `"a\n\nb"` keeps its blank separator line.
/// A single word wider than the limit is placed on its own line unbroken.
pub fn wrap_text(text: &str, weight: FontWeight, size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate_width =
                text_width_mm(&current, weight, size_pt) + text_width_mm(" ", weight, size_pt)
                    + text_width_mm(word, weight, size_pt);
            if candidate_width > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}
