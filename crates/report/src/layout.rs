//! Page model for the report: primitive draw operations on A4 pages.
//!
//! Coordinates are millimetres from the top-left corner, font sizes are
//! points. Alignment is resolved when text is added, so every [`DrawOp::Text`]
//! holds the position of its first glyph.

use crate::fonts::text_width_mm;

/// A4 width in millimetres.
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 height in millimetres.
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Millimetres per typographic point.
pub const PT_TO_MM: f64 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f64,
    pub weight: FontWeight,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(size_pt: f64, weight: FontWeight, color: Rgb) -> Self {
        Self {
            size_pt,
            weight,
            color,
        }
    }
}

/// Horizontal anchoring of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rectangle; `(x, y)` is the top-left corner.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
    },
    /// Straight stroke between two points.
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
        width: f64,
    },
    /// Filled circle.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Rgb,
    },
    /// A single line of text with its baseline starting at `(x, y)`.
    ///
    /// `rotation_deg` turns the run counter-clockwise around that point.
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
        rotation_deg: f64,
    },
}

impl DrawOp {
    fn coordinates(&self) -> Vec<f64> {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => vec![*x, *y, *width, *height],
            Self::Line { from, to, width, .. } => vec![from.0, from.1, to.0, to.1, *width],
            Self::Circle { cx, cy, radius, .. } => vec![*cx, *cy, *radius],
            Self::Text { x, y, rotation_deg, .. } => vec![*x, *y, *rotation_deg],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text content of every run on the page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The complete report as a list of pages. Always has at least one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLayout {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append an operation to the current (last) page.
    pub fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Append an operation to a specific page.
    pub fn push_to(&mut self, page_index: usize, op: DrawOp) {
        if let Some(page) = self.pages.get_mut(page_index) {
            page.ops.push(op);
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgb) {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64) {
        self.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, fill: Rgb) {
        self.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            fill,
        });
    }

    /// Add a horizontal text run anchored at `x` per `align`.
    pub fn text(&mut self, text: impl Into<String>, x: f64, y: f64, style: TextStyle, align: Align) {
        let op = aligned_text(text.into(), x, y, style, align);
        self.push(op);
    }

    /// Like [`ReportLayout::text`], but onto a specific page.
    pub fn text_on(
        &mut self,
        page_index: usize,
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: TextStyle,
        align: Align,
    ) {
        let op = aligned_text(text.into(), x, y, style, align);
        self.push_to(page_index, op);
    }

    /// Add a text run rotated 90° counter-clockwise, centred on `(x, y)`.
    pub fn vertical_text(&mut self, text: impl Into<String>, x: f64, y: f64, style: TextStyle) {
        let text = text.into();
        let width = text_width_mm(&text, style.weight, style.size_pt);
        self.push(DrawOp::Text {
            x,
            // Reading upwards, so the run starts below the centre.
            y: y + width / 2.0,
            text,
            style,
            rotation_deg: 90.0,
        });
    }

    /// Every operation on every page.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flat_map(|page| page.ops.iter())
    }

    /// `true` when no operation carries a `NaN` or infinite coordinate.
    pub fn is_finite(&self) -> bool {
        self.ops()
            .all(|op| op.coordinates().iter().all(|v| v.is_finite()))
    }
}

fn aligned_text(text: String, x: f64, y: f64, style: TextStyle, align: Align) -> DrawOp {
    let width = text_width_mm(&text, style.weight, style.size_pt);
    let left = match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    };
    DrawOp::Text {
        x: left,
        y,
        text,
        style,
        rotation_deg: 0.0,
    }
}
