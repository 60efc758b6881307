use crate::canvas::*;

const BOX_PAD: f32 = 2.0;
const BOX_LINE_H: f32 = 7.0;
const CAPTION_H: f32 = 8.0;
const SECTION_GAP: f32 = 5.0;
const CONDITION_LINE_H: f32 = 5.0;

/// One line inside a content box.
#[derive(Debug, Clone)]
pub struct BoxLine {
    pub text: String,
    pub bold: bool,
}

impl BoxLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxStyle {
    pub fill: Color,
    pub text: Color,
}

pub const INFO_BOX: BoxStyle = BoxStyle {
    fill: SLATE_50,
    text: SLATE_800,
};
pub const TOTALS_BOX: BoxStyle = BoxStyle {
    fill: BRAND_GREEN,
    text: WHITE,
};

pub fn box_height(caption: bool, lines: usize) -> f32 {
    let caption_h = if caption { CAPTION_H } else { 0.0 };
    caption_h + 2.0 * BOX_PAD + lines as f32 * BOX_LINE_H + SECTION_GAP
}

/// Full-bleed brand bar at the top of the first page.
pub fn header(canvas: &mut Canvas, fill: Color, brand: &str, subtitle: &str) {
    let at = canvas.reserve(BlockKind::Header, 44.0);
    let bar = Rect {
        x: 0.0,
        y: at.y,
        w: PAGE_W,
        h: 40.0,
    };
    canvas.draw_filled_rect(bar, fill);
    canvas.draw_text(brand, MARGIN, at.y + 25.0, TextStyle::new(20.0, WHITE).bold());
    canvas.draw_text(subtitle, MARGIN, at.y + 35.0, TextStyle::new(12.0, WHITE));
}

/// Issue date on the left, validity statement flush right.
pub fn issue_line(canvas: &mut Canvas, left: &str, right: &str) {
    let at = canvas.reserve(BlockKind::IssueDate, 10.0);
    let style = TextStyle::new(10.0, SLATE_500);
    canvas.draw_text(left, at.x, at.y + 6.0, style);
    canvas.draw_text(right, at.x + at.width, at.y + 6.0, style.align(Align::Right));
}

pub fn banner(canvas: &mut Canvas, kind: BlockKind, caption: &str, fill: Color) {
    let at = canvas.reserve(kind, 22.0);
    let rect = Rect {
        x: at.x - 5.0,
        y: at.y + 1.0,
        w: at.width + 10.0,
        h: 18.0,
    };
    canvas.draw_filled_rect(rect, fill);
    let style = TextStyle::new(16.0, WHITE).bold().align(Align::Center);
    canvas.draw_text(caption, PAGE_W / 2.0, at.y + 12.5, style);
}

/// A filled box of label/value lines, optionally headed by a caption.
/// Caption and box are reserved together.
pub fn content_box(
    canvas: &mut Canvas,
    kind: BlockKind,
    caption: Option<&str>,
    lines: &[BoxLine],
    style: BoxStyle,
) {
    let at = canvas.reserve(kind, box_height(caption.is_some(), lines.len()));
    let mut top = at.y;
    if let Some(caption) = caption {
        canvas.draw_text(caption, at.x, top + 6.0, TextStyle::new(14.0, SLATE_800).bold());
        top += CAPTION_H;
    }

    let rect = Rect {
        x: at.x - 2.0,
        y: top,
        w: at.width + 4.0,
        h: 2.0 * BOX_PAD + lines.len() as f32 * BOX_LINE_H,
    };
    canvas.draw_filled_rect(rect, style.fill);

    for (i, line) in lines.iter().enumerate() {
        let mut text_style = TextStyle::new(11.0, style.text);
        if line.bold {
            text_style = text_style.bold();
        }
        let baseline = top + BOX_PAD + 5.0 + i as f32 * BOX_LINE_H;
        canvas.draw_text(&line.text, at.x + 5.0, baseline, text_style);
    }
}

/// Heading followed by loose text lines. Each line is placed on its own,
/// so a long list may continue on the next page, but the heading never
/// ends a page without its first line.
pub fn text_lines(canvas: &mut Canvas, heading: &str, lines: &[&str]) {
    let follower = if lines.is_empty() { 0.0 } else { CONDITION_LINE_H };
    let at = canvas.reserve_keeping(BlockKind::ConditionsHeading, 10.0, follower);
    canvas.draw_text(heading, at.x, at.y + 7.0, TextStyle::new(12.0, SLATE_800).bold());

    let style = TextStyle::new(9.0, SLATE_500);
    for line in lines {
        let at = canvas.reserve(BlockKind::ConditionLine, CONDITION_LINE_H);
        canvas.draw_text(line, at.x, at.y + 3.8, style);
    }
}

/// Footer on whatever page is current, pinned to the bottom edge. Up to
/// two lines on each side; the right column is flush right.
pub fn footer(canvas: &mut Canvas, left: &[&str], right: &[&str]) {
    let at = canvas.place_fixed(BlockKind::Footer, PAGE_H - 27.0, 20.0);
    canvas.draw_hline(at.x, at.x + at.width, PAGE_H - 25.0, 0.3, SLATE_400);
    let style = TextStyle::new(8.0, SLATE_500);
    let baselines = [PAGE_H - 15.0, PAGE_H - 10.0];
    for (line, y) in left.iter().zip(baselines) {
        canvas.draw_text(line, at.x, y, style);
    }
    let right_x = at.x + at.width;
    for (line, y) in right.iter().zip(baselines) {
        canvas.draw_text(line, right_x, y, style.align(Align::Right));
    }
}
