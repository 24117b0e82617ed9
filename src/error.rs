// Crate error type. Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Image load error ({}): {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // Creating the window, softbuffer context or surface failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    // Resizing or presenting the softbuffer surface failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Invalid option: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
