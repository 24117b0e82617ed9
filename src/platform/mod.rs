//! Per-platform native window hooks.
//!
//! Only Windows gets one: its `WM_NCHITTEST` / `WM_SIZING` messages are sent
//! synchronously and never reach winit's event stream, so the frame answers
//! them from a subclassed window procedure. Elsewhere the winit host falls
//! back to `drag_resize_window` plus after-the-fact size correction.

#[cfg(target_os = "windows")]
pub mod windows;
