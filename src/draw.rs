// Software drawing into a FrameBuffer.
// Used for two things:
// 1) Pen strokes painted straight into the image surface.
// 2) The context menu overlay (boxes + a tiny 5x7 bitmap font).

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Square pen tip of `width` pixels, centred on (cx,cy) (biased up-left for even widths).
fn stamp(fb: &mut FrameBuffer, cx: i32, cy: i32, width: i32, color: u32) {
    let lo = -(width - 1) / 2 - (width - 1) % 2;
    let hi = lo + width;
    for dy in lo..hi {
        for dx in lo..hi {
            put_pixel(fb, cx + dx, cy + dy, color);
        }
    }
}

/// Draw a line between (x0,y0) and (x1,y1) using Bresenham, stamping a pen
/// of `width` pixels at every step. Both endpoints are painted.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(fb, x0, y0, width.max(1), color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Solid rectangle with its top-left at (x,y), clipped to the buffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y.max(0)..(y + h).min(fb.height as i32) {
        for xx in x.max(0)..(x + w).min(fb.width as i32) {
            fb.pixels[yy as usize * fb.width + xx as usize] = color;
        }
    }
}

/// One-pixel outline.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    fill_rect(fb, x, y, w, 1, color);
    fill_rect(fb, x, y + h - 1, w, 1, color);
    fill_rect(fb, x, y, 1, h, color);
    fill_rect(fb, x + w - 1, y, 1, h, color);
}

/* ---------- 5x7 bitmap font (letters used by the menu labels) ---------- */

pub const GLYPH_W: i32 = 5;
pub const GLYPH_H: i32 = 7;
/// Horizontal advance per character (glyph + 1px spacing).
pub const ADVANCE: i32 = GLYPH_W + 1;

/// 5x7 glyph for a limited character set, matched case-insensitively.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        _ => None,
    }
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += ADVANCE;
    }
}

/// Pixel width `draw_text_5x7` uses for `text`.
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { n * ADVANCE - 1 }
}
