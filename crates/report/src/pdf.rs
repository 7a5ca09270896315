//! `printpdf` backend: turns a [`ReportLayout`] into PDF bytes.
//!
//! Layout coordinates are top-left based, PDF user space is bottom-left
//! based, so every `y` is flipped against the page height here.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::utils::calculate_points_for_circle;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Pt, Rect, TextMatrix,
};

use crate::error::ReportError;
use crate::layout::{DrawOp, FontWeight, ReportLayout, Rgb, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PT_TO_MM};

const LAYER_NAME: &str = "Report";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Serialize `layout` as a PDF document titled `title`.
pub fn write_pdf(layout: &ReportLayout, title: &str) -> Result<Vec<u8>, ReportError> {
    let width = Mm(PAGE_WIDTH_MM as f32);
    let height = Mm(PAGE_HEIGHT_MM as f32);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        for op in &page.ops {
            draw(&layer, op, &fonts);
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw(layer: &PdfLayerReference, op: &DrawOp, fonts: &Fonts) {
    match op {
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            if *width <= 0.0 || *height <= 0.0 {
                return;
            }
            layer.set_fill_color(color(*fill));
            let rect = Rect::new(
                mm(*x),
                mm(flip(*y + *height)),
                mm(*x + *width),
                mm(flip(*y)),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(rect);
        }
        DrawOp::Line {
            from,
            to,
            color: stroke,
            width,
        } => {
            layer.set_outline_color(color(*stroke));
            layer.set_outline_thickness((*width / PT_TO_MM) as f32);
            layer.add_line(Line {
                points: vec![(point(*from), false), (point(*to), false)],
                is_closed: false,
            });
        }
        DrawOp::Circle {
            cx,
            cy,
            radius,
            fill,
        } => {
            layer.set_fill_color(color(*fill));
            let ring = calculate_points_for_circle(mm(*radius), mm(*cx), mm(flip(*cy)));
            layer.add_polygon(Polygon {
                rings: vec![ring],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
        DrawOp::Text {
            x,
            y,
            text,
            style,
            rotation_deg,
        } => {
            let font = fonts.get(style.weight);
            let size = style.size_pt as f32;
            layer.set_fill_color(color(style.color));
            if *rotation_deg == 0.0 {
                layer.use_text(text.as_str(), size, mm(*x), mm(flip(*y)), font);
            } else {
                layer.begin_text_section();
                layer.set_font(font, size);
                layer.set_text_matrix(TextMatrix::TranslateRotate(
                    Pt::from(mm(*x)),
                    Pt::from(mm(flip(*y))),
                    *rotation_deg as f32,
                ));
                layer.write_text(text.as_str(), font);
                layer.end_text_section();
            }
        }
    }
}

fn flip(y: f64) -> f64 {
    PAGE_HEIGHT_MM - y
}

fn mm(value: f64) -> Mm {
    Mm(value as f32)
}

fn point((x, y): (f64, f64)) -> Point {
    Point::new(mm(x), mm(flip(y)))
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(err: printpdf::Error) -> ReportError {
    ReportError::Pdf(format!("{err:?}"))
}
