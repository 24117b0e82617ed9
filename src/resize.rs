// Aspect-locked resize: keeps the frame's proportions equal to the image's
// (image plus border on both axes) while the user drags an edge.

use crate::types::{Rect, Size};

/// Width / height ratio the frame is locked to.
pub fn frame_aspect(image: Size, border: i32) -> f64 {
    f64::from(image.width + border) / f64::from(image.height + border)
}

/// Correct a proposed frame rectangle so it keeps the image's aspect ratio.
///
/// The dimension that changed relative to `current` drives the other one.
/// Width wins when both changed, so corner drags follow horizontal motion.
/// The top-left corner never moves; results are truncated toward zero.
pub fn adjust_resize_rect(proposed: Rect, current: Size, image: Size, border: i32) -> Rect {
    let mut rc = proposed;
    if rc.width() != current.width {
        let ratio = frame_aspect(image, border);
        rc.bottom = rc.top + (f64::from(rc.width()) / ratio) as i32;
    } else if rc.height() != current.height {
        let inverse = f64::from(image.height + border) / f64::from(image.width + border);
        rc.right = rc.left + (f64::from(rc.height()) / inverse) as i32;
    }
    rc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    const IMAGE: Size = Size::new(800, 600);
    const B: i32 = 3;

    fn current() -> Size {
        IMAGE.with_margin(B)
    }

    #[test]
    fn width_drives_height() {
        let proposed = Rect::new(0, 0, 400, current().height);
        let rc = adjust_resize_rect(proposed, current(), IMAGE, B);
        assert_eq!(rc.width(), 400);
        // 400 / (803 / 603) = 300.37
        assert_eq!(rc.height(), 300);
        let got = f64::from(rc.width()) / f64::from(rc.height());
        assert!((got - frame_aspect(IMAGE, B)).abs() < 0.01);
    }

    #[test]
    fn height_drives_width() {
        let proposed = Rect::new(10, 20, 10 + current().width, 20 + 300);
        let rc = adjust_resize_rect(proposed, current(), IMAGE, B);
        assert_eq!(rc.height(), 300);
        // 300 / (603 / 803) = 399.5
        assert_eq!(rc.width(), 399);
        assert_eq!((rc.left, rc.top), (10, 20));
    }

    #[test]
    fn unchanged_proposal_is_left_alone() {
        let proposed = Rect::from_origin(Point::new(5, 5), current());
        assert_eq!(adjust_resize_rect(proposed, current(), IMAGE, B), proposed);
    }

    #[test]
    fn corner_drag_follows_width() {
        // Both axes changed: height is discarded and recomputed from width.
        let proposed = Rect::new(0, 0, 500, 100);
        let rc = adjust_resize_rect(proposed, current(), IMAGE, B);
        assert_eq!(rc.width(), 500);
        assert_eq!(rc.height(), (500.0 / frame_aspect(IMAGE, B)) as i32);
    }

    #[test]
    fn left_edge_drag_keeps_top_anchor() {
        // Dragging the left edge moves `left`; the corrected rect grows down from `top`.
        let proposed = Rect::new(-100, 50, current().width, 50 + current().height);
        let rc = adjust_resize_rect(proposed, current(), IMAGE, B);
        assert_eq!(rc.top, 50);
        assert_eq!(rc.left, -100);
        assert_eq!(rc.height(), (f64::from(rc.width()) / frame_aspect(IMAGE, B)) as i32);
    }

    #[test]
    fn correction_is_stable() {
        let first = adjust_resize_rect(Rect::new(0, 0, 640, 603), current(), IMAGE, B);
        let again = adjust_resize_rect(first, first.size(), IMAGE, B);
        assert_eq!(first, again);
    }
}
