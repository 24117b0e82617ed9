//! Right-click context menu, drawn inside the window with the 5x7 font.

use crate::draw::{self, GLYPH_H};
use crate::types::{FrameBuffer, Point, Rect, Size};

const ROW_H: i32 = GLYPH_H + 7;
const PAD_X: i32 = 8;

const BG: u32 = 0x00_20_20_20;
const HOVER: u32 = 0x00_3A_50_80;
const FRAME: u32 = 0x00_80_80_80;
const TEXT: u32 = 0x00_F0_F0_F0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Close,
    Maximize,
    Draw,
    ClearDrawing,
}

impl MenuItem {
    pub const ORDER: [MenuItem; 4] =
        [MenuItem::Close, MenuItem::Maximize, MenuItem::Draw, MenuItem::ClearDrawing];

    fn default_label(self) -> &'static str {
        match self {
            MenuItem::Close => "Close",
            MenuItem::Maximize => "Maximize",
            MenuItem::Draw => "Draw",
            MenuItem::ClearDrawing => "Clear Drawing",
        }
    }
}

pub struct ContextMenu {
    labels: [&'static str; 4],
    /// Screen placement while open.
    rect: Option<Rect>,
    hovered: Option<usize>,
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            labels: MenuItem::ORDER.map(MenuItem::default_label),
            rect: None,
            hovered: None,
        }
    }

    pub fn label(&self, item: MenuItem) -> &'static str {
        self.labels[index_of(item)]
    }

    pub fn set_label(&mut self, item: MenuItem, label: &'static str) {
        self.labels[index_of(item)] = label;
    }

    pub fn is_open(&self) -> bool {
        self.rect.is_some()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn hovered(&self) -> Option<MenuItem> {
        self.hovered.map(|i| MenuItem::ORDER[i])
    }

    fn size(&self) -> Size {
        let text = self.labels.iter().map(|l| draw::text_width(l)).max().unwrap_or(0);
        Size::new(text + 2 * PAD_X, self.labels.len() as i32 * ROW_H + 2)
    }

    /// Open with the top-left corner at `anchor`, shifted so it stays inside `window`.
    pub fn open_at(&mut self, anchor: Point, window: Size) {
        let size = self.size();
        let x = anchor.x.min(window.width - size.width).max(0);
        let y = anchor.y.min(window.height - size.height).max(0);
        self.rect = Some(Rect::from_origin(Point::new(x, y), size));
        self.hovered = None;
    }

    pub fn close(&mut self) {
        self.rect = None;
        self.hovered = None;
    }

    /// Item under `p`, if the menu is open and `p` is on a row.
    pub fn item_at(&self, p: Point) -> Option<MenuItem> {
        let rect = self.rect?;
        if !rect.contains(p) {
            return None;
        }
        let row = (p.y - rect.top - 1) / ROW_H;
        MenuItem::ORDER.get(usize::try_from(row).ok()?).copied()
    }

    /// Track the pointer for row highlighting. Returns true when the highlight changed.
    pub fn hover(&mut self, p: Point) -> bool {
        let now = self.item_at(p).map(index_of);
        let changed = now != self.hovered;
        self.hovered = now;
        changed
    }

    pub fn render(&self, fb: &mut FrameBuffer) {
        let Some(rect) = self.rect else { return };
        draw::fill_rect(fb, rect.left, rect.top, rect.width(), rect.height(), BG);
        for (i, label) in self.labels.iter().enumerate() {
            let row_top = rect.top + 1 + i as i32 * ROW_H;
            if self.hovered == Some(i) {
                draw::fill_rect(fb, rect.left + 1, row_top, rect.width() - 2, ROW_H, HOVER);
            }
            draw::draw_text_5x7(fb, rect.left + PAD_X, row_top + (ROW_H - GLYPH_H) / 2, label, TEXT);
        }
        draw::stroke_rect(fb, rect.left, rect.top, rect.width(), rect.height(), FRAME);
    }
}

fn index_of(item: MenuItem) -> usize {
    match item {
        MenuItem::Close => 0,
        MenuItem::Maximize => 1,
        MenuItem::Draw => 2,
        MenuItem::ClearDrawing => 3,
    }
}
