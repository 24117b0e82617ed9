//! The two window-manager questions a borderless frame has to answer itself.
//!
//! A platform message hook (see `platform`) or the portable winit host asks a
//! [`NativeHook`] where a point is and how to correct a resize proposal.

use crate::hit_test::{self, Region};
use crate::resize;
use crate::types::{Point, Rect, Size};

pub trait NativeHook {
    /// Region under `point`, in client coordinates.
    fn classify_hit_test(&self, point: Point) -> Region;

    /// Aspect-corrected version of a proposed frame rectangle.
    fn adjust_resize_rect(&self, proposed: Rect) -> Rect;
}

/// Snapshot of everything the hook maths needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub border: i32,
    /// Current window size.
    pub window: Size,
    /// Size of the loaded image; `None` until a decode succeeded.
    pub image: Option<Size>,
}

impl FrameGeometry {
    pub fn new(border: i32, window: Size) -> Self {
        Self { border, window, image: None }
    }
}

impl NativeHook for FrameGeometry {
    fn classify_hit_test(&self, point: Point) -> Region {
        hit_test::classify(point, self.window, self.border)
    }

    fn adjust_resize_rect(&self, proposed: Rect) -> Rect {
        match self.image {
            Some(image) => resize::adjust_resize_rect(proposed, self.window, image, self.border),
            None => proposed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_no_correction() {
        let geo = FrameGeometry::new(3, Size::new(200, 100));
        let proposed = Rect::new(0, 0, 300, 100);
        assert_eq!(geo.adjust_resize_rect(proposed), proposed);
    }

    #[test]
    fn delegates_to_classifier_and_resize() {
        let mut geo = FrameGeometry::new(3, Size::new(103, 103));
        geo.image = Some(Size::new(100, 100));
        assert_eq!(geo.classify_hit_test(Point::new(50, 50)), Region::Caption);
        assert_eq!(geo.classify_hit_test(Point::new(102, 50)), Region::Right);
        let rc = geo.adjust_resize_rect(Rect::new(0, 0, 153, 103));
        assert_eq!(rc.size(), Size::new(153, 153));
    }
}
