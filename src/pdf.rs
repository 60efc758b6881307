use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point, Rgb,
};

use crate::canvas::{self, approx_text_width, Align, Document, Primitive};
use crate::error::{ReportError, Result};

fn pdf_err(e: impl std::fmt::Debug) -> ReportError {
    ReportError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("PDF serialization failed: {e:?}"),
    ))
}

fn fill(color: canvas::Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
}

impl PdfWriter {
    fn new(title: &str) -> Result<(Self, PdfLayerReference)> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(canvas::PAGE_W),
            Mm(canvas::PAGE_H),
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;
        let layer = doc.get_page(page).get_layer(layer);
        let writer = Self {
            doc,
            font,
            font_bold,
        };
        Ok((writer, layer))
    }

    fn add_page(&self, page: &canvas::Page) -> PdfLayerReference {
        let (page, layer) = self.doc.add_page(Mm(page.width), Mm(page.height), "Layer 1");
        self.doc.get_page(page).get_layer(layer)
    }

    fn draw(&self, layer: &PdfLayerReference, page: &canvas::Page, primitive: &Primitive) {
        // canvas y runs down from the top edge, PDF y runs up from the bottom
        let flip = |y: f32| page.height - y;
        match primitive {
            Primitive::FillRect { rect, color } => {
                layer.set_fill_color(fill(*color));
                let shape = printpdf::Rect::new(
                    Mm(rect.x),
                    Mm(flip(rect.y + rect.h)),
                    Mm(rect.x + rect.w),
                    Mm(flip(rect.y)),
                )
                .with_mode(PaintMode::Fill);
                layer.add_rect(shape);
            }
            Primitive::Text { text, x, y, style } => {
                let font = if style.bold { &self.font_bold } else { &self.font };
                let width = approx_text_width(text, style.size);
                let left = match style.align {
                    Align::Left => *x,
                    Align::Center => x - width / 2.0,
                    Align::Right => x - width,
                };
                layer.set_fill_color(fill(style.color));
                layer.use_text(text.as_str(), style.size, Mm(left), Mm(flip(*y)), font);
            }
            Primitive::HLine {
                x1,
                x2,
                y,
                thickness,
                color,
            } => {
                layer.set_outline_color(fill(*color));
                layer.set_outline_thickness(*thickness);
                let line = Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(flip(*y))), false),
                        (Point::new(Mm(*x2), Mm(flip(*y))), false),
                    ],
                    is_closed: false,
                };
                layer.add_line(line);
            }
        }
    }

    fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc.save(&mut buf).map_err(pdf_err)?;
        buf.into_inner().map_err(|e| pdf_err(e.error()))
    }
}

pub fn render(doc: &Document) -> Result<Vec<u8>> {
    let (writer, first_layer) = PdfWriter::new(&doc.title)?;
    let mut layer = first_layer;
    for (i, page) in doc.pages.iter().enumerate() {
        if i > 0 {
            layer = writer.add_page(page);
        }
        for primitive in &page.primitives {
            writer.draw(&layer, page, primitive);
        }
    }
    let bytes = writer.to_bytes()?;
    log::info!("rendered {} page(s), {} bytes", doc.page_count(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BlockKind, Canvas, Rect, TextStyle, SLATE_800};

    #[test]
    fn test_render_produces_pdf() {
        let mut c = Canvas::new("Orçamento");
        let at = c.reserve(BlockKind::Title, 20.0);
        let rect = Rect {
            x: at.x,
            y: at.y,
            w: 50.0,
            h: 10.0,
        };
        c.draw_filled_rect(rect, SLATE_800);
        c.draw_text("hello", at.x, at.y + 5.0, TextStyle::new(10.0, SLATE_800));
        c.draw_hline(at.x, at.x + 50.0, at.y + 15.0, 0.3, SLATE_800);
        let bytes = render(&c.finish()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_multi_page() {
        let mut c = Canvas::new("t");
        for _ in 0..40 {
            let at = c.reserve(BlockKind::TableRow, 10.0);
            c.draw_text("row", at.x, at.y + 6.0, TextStyle::new(9.0, SLATE_800));
        }
        let doc = c.finish();
        assert!(doc.page_count() > 1);
        let bytes = render(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
