// Freehand pen state: idle until the left button goes down in draw mode,
// then every mouse move yields one segment from the previous point.

use crate::types::{Point, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing { last: Point },
}

#[derive(Debug, Default)]
pub struct Stroke {
    state: StrokeState,
}

impl Stroke {
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Pen down at `at` (client coordinates).
    pub fn begin(&mut self, at: Point) {
        self.state = StrokeState::Drawing { last: at };
    }

    /// Pointer moved to `to`. Returns the segment to paint, if a stroke is active.
    pub fn advance(&mut self, to: Point) -> Option<(Point, Point)> {
        match self.state {
            StrokeState::Drawing { last } => {
                self.state = StrokeState::Drawing { last: to };
                Some((last, to))
            }
            StrokeState::Idle => None,
        }
    }

    /// Pen up.
    pub fn end(&mut self) {
        self.state = StrokeState::Idle;
    }
}

/// Map a client point to image pixels, assuming the image (plus border) is
/// stretched over the whole window: `image = client * (image_dim + border) / window_dim`.
pub fn scale_point(p: Point, image: Size, border: i32, window: Size) -> Point {
    let w = window.width.max(1);
    let h = window.height.max(1);
    Point::new(
        p.x * (image.width + border) / w,
        p.y * (image.height + border) / h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_paint_while_down() {
        let mut s = Stroke::default();
        assert_eq!(s.advance(Point::new(5, 5)), None);

        s.begin(Point::new(1, 1));
        assert_eq!(s.advance(Point::new(4, 2)), Some((Point::new(1, 1), Point::new(4, 2))));
        assert_eq!(s.advance(Point::new(6, 8)), Some((Point::new(4, 2), Point::new(6, 8))));

        s.end();
        assert!(!s.is_drawing());
        assert_eq!(s.advance(Point::new(9, 9)), None);
    }

    #[test]
    fn starting_at_origin_still_draws() {
        let mut s = Stroke::default();
        s.begin(Point::new(0, 0));
        assert!(s.is_drawing());
        assert!(s.advance(Point::new(3, 3)).is_some());
    }

    #[test]
    fn scaling_is_identity_at_natural_size() {
        let image = Size::new(100, 50);
        let window = image.with_margin(3);
        for p in [Point::new(0, 0), Point::new(42, 17), Point::new(99, 49)] {
            assert_eq!(scale_point(p, image, 3, window), p);
        }
    }

    #[test]
    fn scaling_follows_window_stretch() {
        let image = Size::new(100, 100);
        // Window at twice the natural frame size.
        let window = Size::new(206, 206);
        assert_eq!(scale_point(Point::new(100, 50), image, 3, window), Point::new(50, 25));
        assert_eq!(scale_point(Point::new(205, 205), image, 3, window), Point::new(102, 102));
    }

    #[test]
    fn zero_sized_window_does_not_divide_by_zero() {
        let p = scale_point(Point::new(3, 3), Size::new(10, 10), 3, Size::new(0, 0));
        assert_eq!(p, Point::new(39, 39));
    }
}
