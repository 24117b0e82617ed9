// Classifies a client-area point into the nine regions of a borderless frame.
// The border bands make the window resizable without any visible chrome; the
// interior behaves like a title bar.

use crate::types::{Point, Size};

/// Where a point sits on the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    Top,
    TopRight,
    Left,
    Caption,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::TopLeft,
        Region::Top,
        Region::TopRight,
        Region::Left,
        Region::Caption,
        Region::Right,
        Region::BottomLeft,
        Region::Bottom,
        Region::BottomRight,
    ];

    /// Win32 `WM_NCHITTEST` result code (HTCAPTION, HTLEFT, ...).
    pub fn ht_code(self) -> isize {
        match self {
            Region::Caption => 2,
            Region::Left => 10,
            Region::Right => 11,
            Region::Top => 12,
            Region::TopLeft => 13,
            Region::TopRight => 14,
            Region::Bottom => 15,
            Region::BottomLeft => 16,
            Region::BottomRight => 17,
        }
    }

    /// True for the eight regions that resize instead of move.
    pub fn is_border(self) -> bool {
        self != Region::Caption
    }
}

/// Position of one coordinate within its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Band {
    Low,
    Middle,
    High,
}

// [0, border] | (border, len - border) | [len - border, len]
fn band(v: i32, len: i32, border: i32) -> Band {
    if v <= border {
        Band::Low
    } else if v < len - border {
        Band::Middle
    } else {
        Band::High
    }
}

/// Classify `point` (client coordinates) for a window of `size` with a resize
/// margin of `border` pixels.
pub fn classify(point: Point, size: Size, border: i32) -> Region {
    let col = band(point.x, size.width, border);
    let row = band(point.y, size.height, border);
    match (row, col) {
        (Band::Low, Band::Low) => Region::TopLeft,
        (Band::Low, Band::Middle) => Region::Top,
        (Band::Low, Band::High) => Region::TopRight,
        (Band::Middle, Band::Low) => Region::Left,
        (Band::Middle, Band::Middle) => Region::Caption,
        (Band::Middle, Band::High) => Region::Right,
        (Band::High, Band::Low) => Region::BottomLeft,
        (Band::High, Band::Middle) => Region::Bottom,
        (Band::High, Band::High) => Region::BottomRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: i32 = 3;
    const SIZE: Size = Size::new(103, 83);

    #[test]
    fn interior_is_caption() {
        for y in (B + 1)..(SIZE.height - B) {
            for x in (B + 1)..(SIZE.width - B) {
                assert_eq!(classify(Point::new(x, y), SIZE, B), Region::Caption, "({x},{y})");
            }
        }
    }

    #[test]
    fn corner_bands_win_over_edges() {
        for d in 0..=B {
            assert_eq!(classify(Point::new(d, B - d), SIZE, B), Region::TopLeft);
            assert_eq!(classify(Point::new(SIZE.width - d, d), SIZE, B), Region::TopRight);
            assert_eq!(classify(Point::new(d, SIZE.height - d), SIZE, B), Region::BottomLeft);
            assert_eq!(
                classify(Point::new(SIZE.width - d, SIZE.height - B + d), SIZE, B),
                Region::BottomRight
            );
        }
    }

    #[test]
    fn edges_between_corners() {
        assert_eq!(classify(Point::new(50, 0), SIZE, B), Region::Top);
        assert_eq!(classify(Point::new(50, SIZE.height - 1), SIZE, B), Region::Bottom);
        assert_eq!(classify(Point::new(0, 40), SIZE, B), Region::Left);
        assert_eq!(classify(Point::new(SIZE.width - 1, 40), SIZE, B), Region::Right);
    }

    #[test]
    fn band_edges_are_inclusive_on_the_border_side() {
        assert_eq!(classify(Point::new(B, 40), SIZE, B), Region::Left);
        assert_eq!(classify(Point::new(B + 1, 40), SIZE, B), Region::Caption);
        assert_eq!(classify(Point::new(SIZE.width - B - 1, 40), SIZE, B), Region::Caption);
        assert_eq!(classify(Point::new(SIZE.width - B, 40), SIZE, B), Region::Right);
    }

    #[test]
    fn codes_are_distinct() {
        let mut codes: Vec<isize> = Region::ALL.iter().map(|r| r.ht_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 9);
        assert_eq!(Region::Caption.ht_code(), 2);
        assert_eq!(Region::BottomRight.ht_code(), 17);
        assert_eq!(Region::ALL.iter().filter(|r| r.is_border()).count(), 8);
    }
}
