use crate::canvas::*;
use crate::fmt::money;
use crate::models::LineItem;

pub const ROW_H: f32 = 8.0;
const CAPTION_H: f32 = 8.0;
const CELL_PAD: f32 = 3.0;
const TRAILING_GAP: f32 = 5.0;

pub struct Column {
    pub label: &'static str,
    /// Share of the content width.
    pub fraction: f32,
    pub align: Align,
}

pub const ITEM_COLUMNS: [Column; 4] = [
    Column {
        label: "Item/Serviço",
        fraction: 0.45,
        align: Align::Left,
    },
    Column {
        label: "Qtd",
        fraction: 0.15,
        align: Align::Right,
    },
    Column {
        label: "Valor Unit.",
        fraction: 0.20,
        align: Align::Right,
    },
    Column {
        label: "Total",
        fraction: 0.20,
        align: Align::Right,
    },
];

/// Text anchor for each column, honouring its alignment.
fn anchors(cols: &[Column], x0: f32, width: f32) -> Vec<f32> {
    let mut x = x0;
    cols.iter()
        .map(|col| {
            let w = col.fraction * width;
            let anchor = match col.align {
                Align::Left => x + CELL_PAD,
                Align::Center => x + w / 2.0,
                Align::Right => x + w - CELL_PAD,
            };
            x += w;
            anchor
        })
        .collect()
}

fn draw_cells<S: AsRef<str>>(
    canvas: &mut Canvas,
    cols: &[Column],
    anchors: &[f32],
    values: &[S],
    baseline: f32,
    style: TextStyle,
) {
    for ((value, x), col) in values.iter().zip(anchors).zip(cols) {
        canvas.draw_text(value.as_ref(), *x, baseline, style.align(col.align));
    }
}

fn row_rect(at: &Placement, top: f32) -> Rect {
    Rect {
        x: at.x - 2.0,
        y: top,
        w: at.width + 4.0,
        h: ROW_H,
    }
}

/// Render a captioned table with zebra-striped rows. Nothing is drawn when
/// `rows` is empty.
///
/// The caption and column header share one block. When rows spill onto a
/// new page the header is not repeated there.
pub fn render_table(canvas: &mut Canvas, caption: &str, cols: &[Column], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let at = canvas.reserve(BlockKind::TableHeader, CAPTION_H + ROW_H);
    let xs = anchors(cols, at.x, at.width);
    canvas.draw_text(caption, at.x, at.y + 6.0, TextStyle::new(14.0, SLATE_800).bold());
    let header_top = at.y + CAPTION_H;
    canvas.draw_filled_rect(row_rect(&at, header_top), SLATE_800);
    let labels: Vec<&str> = cols.iter().map(|c| c.label).collect();
    let header_style = TextStyle::new(10.0, WHITE).bold();
    draw_cells(canvas, cols, &xs, labels.as_slice(), header_top + 5.5, header_style);

    let cell_style = TextStyle::new(9.0, SLATE_800);
    for (i, row) in rows.iter().enumerate() {
        let at = canvas.reserve(BlockKind::TableRow, ROW_H);
        if i % 2 == 0 {
            canvas.draw_filled_rect(row_rect(&at, at.y), SLATE_50);
        }
        draw_cells(canvas, cols, &xs, row.as_slice(), at.y + 5.5, cell_style);
    }

    canvas.skip(TRAILING_GAP);
}

fn item_row(item: &LineItem) -> Vec<String> {
    let name = if item.service_name.trim().is_empty() {
        "Serviço".to_string()
    } else {
        item.service_name.clone()
    };
    vec![
        name,
        item.quantity.to_string(),
        money(item.unit_price),
        money(item.total_price),
    ]
}

/// Render the line-item table. Nothing is drawn for an empty slice.
pub fn render_items(canvas: &mut Canvas, caption: &str, items: &[LineItem]) {
    let rows: Vec<Vec<String>> = items.iter().map(item_row).collect();
    render_table(canvas, caption, &ITEM_COLUMNS, &rows);
}
