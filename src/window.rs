//! winit + softbuffer host.
//!
//! Owns the OS window and the pixel surface, forwards winit events to the
//! [`Viewer`] and carries out what it asks for through [`WindowHost`].

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop, OwnedDisplayHandle};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, ResizeDirection, Window, WindowAttributes, WindowId, WindowLevel};

use crate::config::Config;
use crate::controller::{BACKGROUND, Viewer};
use crate::error::{Error, Result};
use crate::hit_test::Region;
use crate::host::{Button, Cursor, WindowHost};
use crate::types::{FrameBuffer, Point, Size};

/// Size used until the image is decoded and the window is fitted to it.
const INITIAL_SIZE: Size = Size::new(320, 240);

/// Open the viewer window and run until it closes.
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

// Field order is drop order: the surface must go before its context and window.
struct Gfx {
    surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    _context: Context<OwnedDisplayHandle>,
    window: Arc<Window>,
}

struct App {
    config: Config,
    gfx: Option<Gfx>,
    viewer: Option<Viewer>,
    frame: FrameBuffer, // reused composition buffer
    pointer: Point,
    error: Option<Error>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            gfx: None,
            viewer: None,
            frame: FrameBuffer::filled(0, 0, BACKGROUND),
            pointer: Point::default(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        log::error!("{e}");
        self.error = Some(e);
        event_loop.exit();
    }

    fn attributes(&self) -> WindowAttributes {
        let level = if self.config.topmost { WindowLevel::AlwaysOnTop } else { WindowLevel::Normal };
        let attrs = Window::default_attributes()
            .with_title("floatview")
            .with_decorations(false)
            .with_resizable(true)
            .with_visible(false)
            .with_window_level(level)
            .with_inner_size(PhysicalSize::new(INITIAL_SIZE.width as u32, INITIAL_SIZE.height as u32));

        #[cfg(target_os = "windows")]
        let attrs = {
            use winit::platform::windows::WindowAttributesExtWindows;
            attrs.with_undecorated_shadow(true)
        };

        attrs
    }

    fn create(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop
                .create_window(self.attributes())
                .map_err(|e| Error::WindowInit(format!("create window: {e}")))?,
        );
        let context = Context::new(event_loop.owned_display_handle())
            .map_err(|e| Error::WindowInit(format!("softbuffer context: {e}")))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| Error::WindowInit(format!("softbuffer surface: {e}")))?;

        let mut viewer = Viewer::new(self.config.clone(), INITIAL_SIZE);

        #[cfg(target_os = "windows")]
        {
            use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
            if let Ok(handle) = window.window_handle() {
                if let RawWindowHandle::Win32(h) = handle.as_raw() {
                    // SAFETY: the HWND was just created on this thread and outlives the hook.
                    unsafe { crate::platform::windows::install(h.hwnd.get(), self.config.border) };
                    viewer.set_native_resize(true);
                }
            }
        }

        let mut host = WinitHost { window: &window, event_loop };
        viewer.load_image(&mut host)?;

        #[cfg(target_os = "windows")]
        {
            if let Some(surface) = viewer.surface() {
                crate::platform::windows::set_image(surface.size());
            }
        }

        window.set_visible(true);
        self.viewer = Some(viewer);
        self.gfx = Some(Gfx { surface, _context: context, window });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let (Some(gfx), Some(viewer)) = (self.gfx.as_mut(), self.viewer.as_ref()) else {
            return Ok(());
        };
        let size = gfx.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        gfx.surface
            .resize(w, h)
            .map_err(|e| Error::WindowUpdate(format!("resize surface: {e}")))?;

        let (w, h) = (size.width as usize, size.height as usize);
        if self.frame.width != w || self.frame.height != h {
            self.frame = FrameBuffer::filled(w, h, BACKGROUND);
        }
        viewer.render(&mut self.frame);

        let mut buffer = gfx
            .surface
            .buffer_mut()
            .map_err(|e| Error::WindowUpdate(format!("map buffer: {e}")))?;
        buffer.copy_from_slice(&self.frame.pixels);
        gfx.window.pre_present_notify();
        buffer
            .present()
            .map_err(|e| Error::WindowUpdate(format!("present: {e}")))?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        if let Err(e) = self.create(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = self.present() {
                log::warn!("{e}");
            }
            return;
        }

        let (Some(gfx), Some(viewer)) = (self.gfx.as_ref(), self.viewer.as_mut()) else {
            return;
        };
        let mut host = WinitHost { window: &gfx.window, event_loop };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                viewer.on_resized(&mut host, Size::new(size.width as i32, size.height as i32));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Point::new(position.x as i32, position.y as i32);
                viewer.on_mouse_move(&mut host, self.pointer);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => Button::Left,
                    MouseButton::Right => Button::Right,
                    _ => Button::Other,
                };
                match state {
                    ElementState::Pressed => viewer.on_mouse_down(&mut host, button, self.pointer),
                    ElementState::Released => viewer.on_mouse_up(&mut host, button),
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => viewer.on_escape(&mut host),
            _ => {}
        }
    }
}

/// [`WindowHost`] over a live winit window, valid for one event dispatch.
struct WinitHost<'a> {
    window: &'a Window,
    event_loop: &'a ActiveEventLoop,
}

impl WindowHost for WinitHost<'_> {
    fn request_size(&mut self, size: Size) -> Option<Size> {
        let applied = self
            .window
            .request_inner_size(PhysicalSize::new(size.width.max(1) as u32, size.height.max(1) as u32))
            .map(|s| Size::new(s.width as i32, s.height as i32));
        if let Some(s) = applied {
            log::debug!("inner size applied immediately: {}x{}", s.width, s.height);
        }
        applied
    }

    fn begin_move(&mut self) {
        if let Err(e) = self.window.drag_window() {
            log::warn!("drag window: {e}");
        }
    }

    fn begin_resize(&mut self, region: Region) {
        let Some(direction) = resize_direction(region) else { return };
        if let Err(e) = self.window.drag_resize_window(direction) {
            log::warn!("drag resize: {e}");
        }
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.window.set_cursor(cursor_icon(cursor));
    }

    fn close(&mut self) {
        self.event_loop.exit();
    }

    fn redraw(&mut self) {
        self.window.request_redraw();
    }
}

fn resize_direction(region: Region) -> Option<ResizeDirection> {
    Some(match region {
        Region::TopLeft => ResizeDirection::NorthWest,
        Region::Top => ResizeDirection::North,
        Region::TopRight => ResizeDirection::NorthEast,
        Region::Left => ResizeDirection::West,
        Region::Caption => return None,
        Region::Right => ResizeDirection::East,
        Region::BottomLeft => ResizeDirection::SouthWest,
        Region::Bottom => ResizeDirection::South,
        Region::BottomRight => ResizeDirection::SouthEast,
    })
}

fn cursor_icon(cursor: Cursor) -> CursorIcon {
    match cursor {
        Cursor::Default => CursorIcon::Default,
        Cursor::Crosshair => CursorIcon::Crosshair,
        Cursor::Resize(Region::TopLeft | Region::BottomRight) => CursorIcon::NwseResize,
        Cursor::Resize(Region::TopRight | Region::BottomLeft) => CursorIcon::NeswResize,
        Cursor::Resize(Region::Left | Region::Right) => CursorIcon::EwResize,
        Cursor::Resize(Region::Top | Region::Bottom) => CursorIcon::NsResize,
        Cursor::Resize(Region::Caption) => CursorIcon::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_border_region_has_a_resize_direction() {
        for region in Region::ALL {
            assert_eq!(resize_direction(region).is_some(), region.is_border(), "{region:?}");
        }
    }

    #[test]
    fn cursor_icons_match_resize_axes() {
        assert_eq!(cursor_icon(Cursor::Crosshair), CursorIcon::Crosshair);
        assert_eq!(cursor_icon(Cursor::Resize(Region::Right)), CursorIcon::EwResize);
        assert_eq!(cursor_icon(Cursor::Resize(Region::Bottom)), CursorIcon::NsResize);
        assert_eq!(cursor_icon(Cursor::Resize(Region::TopLeft)), CursorIcon::NwseResize);
    }
}
