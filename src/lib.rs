//! Borderless, always-on-top image viewer: drag anywhere to move, drag the
//! edges to resize with the image's aspect ratio locked, right-click for a
//! menu that toggles maximize and a freehand pen.

pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod hit_test;
pub mod hook;
pub mod host;
pub mod menu;
pub mod platform;
pub mod resize;
pub mod stroke;
pub mod surface;
pub mod types;
pub mod window;
