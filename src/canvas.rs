//! Page geometry, the layout cursor and the recorded draw primitives.
//!
//! All coordinates are millimetres measured from the top-left corner of the
//! page. Text positions are baselines. The PDF serializer flips the y axis.

// A4 dimensions (mm)
pub const PAGE_W: f32 = 210.0;
pub const PAGE_H: f32 = 297.0;
pub const MARGIN: f32 = 20.0;
/// No reserved block may extend below this line; the strip underneath is
/// kept free for the footer.
pub const BREAK_Y: f32 = 250.0;

pub fn content_width() -> f32 {
    PAGE_W - 2.0 * MARGIN
}

/// Rough Helvetica advance width, good enough for right/centre alignment.
pub fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.18
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BRAND_GREEN: Color = Color::rgb(34, 197, 94);
pub const BRAND_BLUE: Color = Color::rgb(59, 130, 246);
pub const SLATE_50: Color = Color::rgb(248, 250, 252);
pub const SLATE_200: Color = Color::rgb(229, 231, 235);
pub const SLATE_400: Color = Color::rgb(148, 163, 184);
pub const SLATE_500: Color = Color::rgb(100, 116, 139);
pub const SLATE_800: Color = Color::rgb(30, 41, 59);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            bold: false,
            color,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// `x` is the anchor for `style.align`: left edge, centre or right edge.
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    HLine {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Color,
    },
}

impl Primitive {
    /// Vertical extent (top, bottom) used to check block containment.
    pub fn vertical_extent(&self) -> (f32, f32) {
        match self {
            Primitive::FillRect { rect, .. } => (rect.y, rect.y + rect.h),
            Primitive::Text { y, .. } => (*y, *y),
            Primitive::HLine { y, .. } => (*y, *y),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    IssueDate,
    Title,
    ClientInfo,
    ProductionInfo,
    TableHeader,
    TableRow,
    Totals,
    ConditionsHeading,
    ConditionLine,
    Kpis,
    StatusBreakdown,
    Footer,
}

/// A reserved vertical band on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub top: f32,
    pub height: f32,
}

impl Block {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, top: f32, bottom: f32) -> bool {
        top >= self.top && bottom <= self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub primitives: Vec<Primitive>,
    pub blocks: Vec<Block>,
}

impl Page {
    fn blank() -> Self {
        Self {
            width: PAGE_W,
            height: PAGE_H,
            margin: MARGIN,
            primitives: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(Primitive::text)
    }

    pub fn count_blocks(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }
}

/// The finished, immutable document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn count_blocks(&self, kind: BlockKind) -> usize {
        self.pages.iter().map(|p| p.count_blocks(kind)).sum()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|p| p.texts())
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page_index: usize,
    pub y: f32,
}

/// Where a reserved block landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Owns the pages of a document under construction and the layout cursor.
/// One canvas per generation call; nothing here is shared.
pub struct Canvas {
    title: String,
    done: Vec<Page>,
    current: Page,
    y: f32,
}

impl Canvas {
    /// The first page starts at the top edge so the header can bleed.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            done: Vec::new(),
            current: Page::blank(),
            y: 0.0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            page_index: self.done.len(),
            y: self.y,
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::replace(&mut self.current, Page::blank());
        self.done.push(finished);
        self.y = MARGIN;
        log::debug!("page break: starting page {}", self.done.len() + 1);
    }

    /// Claim `height` mm for one atomic block, breaking to a new page first
    /// if the block would cross `BREAK_Y`. A page that holds no block yet is
    /// never abandoned, so an oversized block cannot produce blank pages.
    pub fn reserve(&mut self, kind: BlockKind, height: f32) -> Placement {
        self.reserve_keeping(kind, height, 0.0)
    }

    /// Like `reserve`, but the block only stays on the current page if
    /// another `next` mm fit below it. Only `height` is claimed; the
    /// follower reserves its own block afterwards.
    pub fn reserve_keeping(&mut self, kind: BlockKind, height: f32, next: f32) -> Placement {
        if self.y + height + next > BREAK_Y && !self.current.blocks.is_empty() {
            self.new_page();
        }
        let top = self.y;
        self.current.blocks.push(Block { kind, top, height });
        self.y += height;
        Placement {
            page: self.done.len(),
            x: MARGIN,
            y: top,
            width: content_width(),
        }
    }

    /// Leave vertical space between sections. Never breaks; the next
    /// `reserve` decides whether the following block still fits.
    pub fn skip(&mut self, height: f32) {
        self.y += height;
    }

    /// Record a block at a fixed position on the current page. The cursor
    /// does not move and no page break is considered.
    pub fn place_fixed(&mut self, kind: BlockKind, top: f32, height: f32) -> Placement {
        self.current.blocks.push(Block { kind, top, height });
        Placement {
            page: self.done.len(),
            x: MARGIN,
            y: top,
            width: content_width(),
        }
    }

    pub fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.current.primitives.push(Primitive::FillRect { rect, color });
    }

    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.current.primitives.push(Primitive::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    pub fn draw_hline(&mut self, x1: f32, x2: f32, y: f32, thickness: f32, color: Color) {
        self.current.primitives.push(Primitive::HLine {
            x1,
            x2,
            y,
            thickness,
            color,
        });
    }

    pub fn finish(mut self) -> Document {
        self.done.push(self.current);
        Document {
            title: self.title,
            pages: self.done,
        }
    }
}
