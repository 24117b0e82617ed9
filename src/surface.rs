// The image being shown: decoded once from disk, then painted on by strokes.
// "Clear Drawing" throws the painted copy away by decoding the file again.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::draw;
use crate::error::{Error, Result};
use crate::types::{FrameBuffer, Point, Size};

pub struct ImageSurface {
    path: PathBuf,
    buffer: FrameBuffer, // working copy, mutated in place by strokes
}

impl ImageSurface {
    /// Decode `path` into a fresh surface.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let buffer = decode(&path)?;
        log::info!("loaded {} ({}x{})", path.display(), buffer.width, buffer.height);
        Ok(Self { path, buffer })
    }

    /// Decode the source file again, discarding every stroke.
    pub fn reload(&mut self) -> Result<()> {
        self.buffer = decode(&self.path)?;
        log::debug!("reloaded {}", self.path.display());
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.buffer.size()
    }

    pub fn pixels(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Paint a pen segment between two image-space points.
    pub fn stroke(&mut self, from: Point, to: Point, width: i32, color: u32) {
        draw::draw_line(&mut self.buffer, from.x, from.y, to.x, to.y, width, color);
    }
}

fn decode(path: &Path) -> Result<FrameBuffer> {
    let img = image::open(path)
        .map_err(|source| Error::ImageLoad { path: path.to_path_buf(), source })?
        .to_rgba8();
    Ok(to_framebuffer(&img))
}

/// Pack RGBA into 0x00RRGGBB, compositing transparency over the black window background.
fn to_framebuffer(img: &RgbaImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for pixel in img.pixels() {
        let a = pixel[3] as u32;
        let r = pixel[0] as u32 * a / 255;
        let g = pixel[1] as u32 * a / 255;
        let b = pixel[2] as u32 * a / 255;
        out.push((r << 16) | (g << 8) | b);
    }
    FrameBuffer { width: w as usize, height: h as usize, pixels: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn packs_rgb_and_blends_alpha_onto_black() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0x12, 0x34, 0x56, 0xFF]));
        img.put_pixel(1, 0, Rgba([0xFF, 0xFF, 0xFF, 0x00]));
        let fb = to_framebuffer(&img);
        assert_eq!(fb.pixels, vec![0x00_12_34_56, 0]);
    }

    #[test]
    fn reload_discards_strokes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grey.png");
        RgbaImage::from_pixel(20, 10, Rgba([90, 90, 90, 255])).save(&path).unwrap();

        let mut surface = ImageSurface::load(&path).unwrap();
        assert_eq!(surface.size(), Size::new(20, 10));
        let fresh = surface.pixels().clone();

        surface.stroke(Point::new(0, 0), Point::new(19, 9), 2, 0x00_FF_00_00);
        assert_ne!(surface.pixels(), &fresh);

        surface.reload().unwrap();
        assert_eq!(surface.pixels(), &fresh);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.png");
        match ImageSurface::load(&path) {
            Err(Error::ImageLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ImageLoad, got {:?}", other.err()),
        }
    }
}
