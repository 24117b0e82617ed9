// What the viewer asks of the window it lives in. The winit host implements
// this for real; tests implement it with a recorder.

use crate::hit_test::Region;
use crate::types::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    /// Draw-mode indicator.
    Crosshair,
    /// Hovering a resize band.
    Resize(Region),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Other,
}

pub trait WindowHost {
    /// Ask for a new inner size. Returns the size if the host applied it on
    /// the spot; otherwise the outcome arrives later through `Viewer::on_resized`.
    fn request_size(&mut self, size: Size) -> Option<Size>;

    /// Hand the pointer to the OS move loop (caption drag).
    fn begin_move(&mut self);

    /// Hand the pointer to the OS resize loop for the given border region.
    fn begin_resize(&mut self, region: Region);

    fn set_maximized(&mut self, maximized: bool);

    fn set_cursor(&mut self, cursor: Cursor);

    /// Close the window and end the event loop.
    fn close(&mut self);

    /// Schedule a repaint.
    fn redraw(&mut self);
}
