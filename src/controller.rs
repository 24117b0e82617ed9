//! The viewer itself: owns the image surface, the pen, the menu and the frame
//! geometry, and turns host events into window requests.
//!
//! Every handler runs synchronously on the event-loop thread. The host calls
//! `on_mouse_down`, `on_mouse_move`, `on_mouse_up`, `on_resized` (or
//! `on_resize_proposal` from a live message hook) and `on_hit_test`; the viewer
//! answers through the [`WindowHost`] it is handed.

use crate::config::Config;
use crate::error::Result;
use crate::hit_test::Region;
use crate::hook::{FrameGeometry, NativeHook};
use crate::host::{Button, Cursor, WindowHost};
use crate::menu::{ContextMenu, MenuItem};
use crate::resize;
use crate::stroke::{self, Stroke};
use crate::surface::ImageSurface;
use crate::types::{FrameBuffer, Point, Rect, Size};

pub const BACKGROUND: u32 = 0x00_00_00_00;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Normal,
    Draw,
}

pub struct Viewer {
    config: Config,
    surface: Option<ImageSurface>,
    geometry: FrameGeometry,
    mode: CursorMode,
    maximized: bool,
    // Frame size to go back to when un-maximizing.
    restore_size: Option<Size>,
    // Size we asked the host for and have not seen come back yet.
    pending_size: Option<Size>,
    stroke: Stroke,
    menu: ContextMenu,
    cursor: Cursor,
    // Set when a platform hook already corrects WM_SIZING proposals live.
    native_resize: bool,
}

impl Viewer {
    pub fn new(config: Config, window: Size) -> Self {
        let geometry = FrameGeometry::new(config.border, window);
        Self {
            config,
            surface: None,
            geometry,
            mode: CursorMode::Normal,
            maximized: false,
            restore_size: None,
            pending_size: None,
            stroke: Stroke::default(),
            menu: ContextMenu::new(),
            cursor: Cursor::Default,
            native_resize: false,
        }
    }

    /// Decode the configured image and size the window to image + border.
    pub fn load_image(&mut self, host: &mut impl WindowHost) -> Result<()> {
        let surface = ImageSurface::load(&self.config.image)?;
        let image = surface.size();
        self.surface = Some(surface);
        self.geometry.image = Some(image);

        let frame = image.with_margin(self.config.border);
        log::info!("fitting window to {}x{}", frame.width, frame.height);
        self.pending_size = Some(frame);
        self.request_size(host, frame);
        host.redraw();
        Ok(())
    }

    pub fn set_native_resize(&mut self, enabled: bool) {
        self.native_resize = enabled;
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_drawing()
    }

    /* ------------------------------ Native hook ------------------------------ */

    pub fn on_hit_test(&self, p: Point) -> Region {
        let region = self.geometry.classify_hit_test(p);
        log::trace!("hit-test ({}, {}) -> {:?}", p.x, p.y, region);
        region
    }

    /// Correct a proposed frame rectangle. Maximized windows are left alone.
    pub fn on_resize_proposal(&self, proposed: Rect) -> Rect {
        if self.maximized {
            return proposed;
        }
        let rc = self.geometry.adjust_resize_rect(proposed);
        if rc != proposed {
            log::debug!("resize {:?} -> {}x{}", proposed.size(), rc.width(), rc.height());
        }
        rc
    }

    /* ------------------------------ Window events ------------------------------ */

    /// The host's inner size changed (user drag, maximize, or our own request).
    ///
    /// While a size we asked for is still in flight, sizes that are neither
    /// that one nor already on the locked aspect ratio are stale and dropped.
    /// Anything else off the ratio came from a user drag and is corrected.
    pub fn on_resized(&mut self, host: &mut impl WindowHost, size: Size) {
        if self.maximized {
            self.geometry.window = size;
            host.redraw();
            return;
        }

        if let Some(pending) = self.pending_size {
            if size != pending && !self.aspect_locked(size) {
                log::debug!(
                    "ignoring {}x{} while waiting for {}x{}",
                    size.width,
                    size.height,
                    pending.width,
                    pending.height
                );
                return;
            }
            self.pending_size = None;
        }

        if !self.native_resize && !self.aspect_locked(size) {
            let corrected = self.on_resize_proposal(Rect::from_origin(Point::default(), size));
            if corrected.size() != size {
                self.request_size(host, corrected.size());
                host.redraw();
                return;
            }
        }
        self.geometry.window = size;
        host.redraw();
    }

    pub fn on_mouse_down(&mut self, host: &mut impl WindowHost, button: Button, p: Point) {
        if self.menu.is_open() {
            if button == Button::Left {
                let picked = self.menu.item_at(p);
                self.menu.close();
                if let Some(item) = picked {
                    self.activate(host, item);
                }
            } else {
                self.menu.close();
            }
            host.redraw();
            return;
        }

        match button {
            Button::Right => {
                self.menu.open_at(p, self.geometry.window);
                self.menu.hover(p);
                host.redraw();
            }
            // Borders resize in both modes, matching the native hook.
            Button::Left => match self.on_hit_test(p) {
                Region::Caption if self.mode == CursorMode::Draw => self.stroke.begin(p),
                Region::Caption => host.begin_move(),
                region => {
                    self.pending_size = None;
                    host.begin_resize(region);
                }
            },
            Button::Other => {}
        }
    }

    pub fn on_mouse_move(&mut self, host: &mut impl WindowHost, p: Point) {
        if self.menu.is_open() {
            if self.menu.hover(p) {
                host.redraw();
            }
            return;
        }

        if self.mode == CursorMode::Draw {
            if let Some((from, to)) = self.stroke.advance(p) {
                self.paint_segment(from, to);
                host.redraw();
            }
            return;
        }

        let cursor = match self.on_hit_test(p) {
            Region::Caption => Cursor::Default,
            region => Cursor::Resize(region),
        };
        self.update_cursor(host, cursor);
    }

    pub fn on_mouse_up(&mut self, _host: &mut impl WindowHost, button: Button) {
        if button == Button::Left {
            self.stroke.end();
        }
    }

    /// Escape: dismiss the menu if open, otherwise close the window.
    pub fn on_escape(&mut self, host: &mut impl WindowHost) {
        if self.menu.is_open() {
            self.menu.close();
            host.redraw();
        } else {
            host.close();
        }
    }

    /* ------------------------------ Menu actions ------------------------------ */

    pub fn activate(&mut self, host: &mut impl WindowHost, item: MenuItem) {
        log::debug!("menu: {:?}", item);
        match item {
            MenuItem::Close => host.close(),
            MenuItem::Maximize => self.toggle_maximize(host),
            MenuItem::Draw => self.toggle_draw(host),
            MenuItem::ClearDrawing => {
                if let Err(e) = self.clear_drawing(host) {
                    log::error!("clear drawing: {e}");
                }
            }
        }
    }

    pub fn toggle_maximize(&mut self, host: &mut impl WindowHost) {
        self.maximized = !self.maximized;
        if self.maximized {
            self.restore_size = Some(self.geometry.window);
            self.pending_size = None;
        } else {
            self.pending_size = self.restore_size.take();
        }
        host.set_maximized(self.maximized);
        self.relabel_maximize();
    }

    pub fn toggle_draw(&mut self, host: &mut impl WindowHost) {
        let (mode, label, cursor) = match self.mode {
            CursorMode::Normal => (CursorMode::Draw, "Stop Drawing", Cursor::Crosshair),
            CursorMode::Draw => (CursorMode::Normal, "Draw", Cursor::Default),
        };
        self.mode = mode;
        self.menu.set_label(MenuItem::Draw, label);
        self.update_cursor(host, cursor);
        log::debug!("cursor mode {:?}", mode);
    }

    /// Throw away all strokes by decoding the source image again.
    pub fn clear_drawing(&mut self, host: &mut impl WindowHost) -> Result<()> {
        if let Some(surface) = self.surface.as_mut() {
            surface.reload()?;
            host.redraw();
        }
        Ok(())
    }

    /* ------------------------------ Rendering ------------------------------ */

    /// Compose the visible frame into `out` (sized to the window): the image
    /// stretched with the same mapping strokes use, then the menu on top.
    pub fn render(&self, out: &mut FrameBuffer) {
        out.pixels.fill(BACKGROUND);
        if let Some(surface) = &self.surface {
            let img = surface.pixels();
            let span_w = (img.width as i32 + self.config.border) as usize;
            let span_h = (img.height as i32 + self.config.border) as usize;
            let (ow, oh) = (out.width.max(1), out.height.max(1));
            for y in 0..out.height {
                let iy = y * span_h / oh;
                if iy >= img.height {
                    continue;
                }
                let src = &img.pixels[iy * img.width..(iy + 1) * img.width];
                let dst = &mut out.pixels[y * out.width..(y + 1) * out.width];
                for (x, px) in dst.iter_mut().enumerate() {
                    let ix = x * span_w / ow;
                    if ix < img.width {
                        *px = src[ix];
                    }
                }
            }
        }
        self.menu.render(out);
    }

    /* ------------------------------ Internals ------------------------------ */

    fn request_size(&mut self, host: &mut impl WindowHost, size: Size) {
        self.geometry.window = size;
        if let Some(applied) = host.request_size(size) {
            // No Resized will follow for a size the host applied on the spot.
            self.geometry.window = applied;
            self.pending_size = None;
        }
    }

    /// True when `size` is within a pixel of the image's frame ratio on either axis.
    fn aspect_locked(&self, size: Size) -> bool {
        let Some(image) = self.geometry.image else { return true };
        let ratio = resize::frame_aspect(image, self.config.border);
        let height = (f64::from(size.width) / ratio) as i32;
        let width = (f64::from(size.height) * ratio) as i32;
        (height - size.height).abs() <= 1 || (width - size.width).abs() <= 1
    }

    fn paint_segment(&mut self, from: Point, to: Point) {
        let Some(surface) = self.surface.as_mut() else { return };
        let image = surface.size();
        let window = self.geometry.window;
        let a = stroke::scale_point(from, image, self.config.border, window);
        let b = stroke::scale_point(to, image, self.config.border, window);
        surface.stroke(a, b, self.config.pen_width, self.config.pen_color);
    }

    fn relabel_maximize(&mut self) {
        let label = if self.maximized { "Un-Maximize" } else { "Maximize" };
        self.menu.set_label(MenuItem::Maximize, label);
    }

    fn update_cursor(&mut self, host: &mut impl WindowHost, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            host.set_cursor(cursor);
        }
    }
}
