// Core types shared by the hit-tester, the resize maths and the renderer.

/// A point in window client pixels (or image pixels after scaling).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the same margin.
    pub fn with_margin(self, margin: i32) -> Self {
        Self::new(self.width + margin, self.height + margin)
    }
}

/// Edge-based rectangle, laid out like a Win32 `RECT` so the message hook can
/// hand its proposal straight over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle anchored at `origin` with the given size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.width, origin.y + size.height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Half-open containment: left/top inclusive, right/bottom exclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// Software pixel buffer; what ends up on screen and what strokes paint into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // pixels per row
    pub height: usize,     // rows
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB
}

impl FrameBuffer {
    /// A buffer filled with a single colour.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Pixel at (x, y), or None when outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}
