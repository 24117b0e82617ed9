//! Command line and resolved viewer configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};

pub const DEFAULT_BORDER: i32 = 3;
pub const DEFAULT_PEN_COLOR: u32 = 0x00_FF_00_00;
pub const DEFAULT_PEN_WIDTH: i32 = 2;

/// Borderless, always-on-top image viewer with a freehand drawing overlay.
#[derive(Parser, Debug)]
#[command(name = "floatview", version, about)]
pub struct Cli {
    /// Image to show. Without it the program exits immediately.
    pub image: Option<PathBuf>,

    /// Resize margin in pixels, also added to the image size.
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    pub border: i32,

    /// Pen colour as RRGGBB hex.
    #[arg(long, default_value = "ff0000")]
    pub pen_color: String,

    /// Pen width in image pixels.
    #[arg(long, default_value_t = DEFAULT_PEN_WIDTH)]
    pub pen_width: i32,

    /// Do not keep the window above other windows.
    #[arg(long)]
    pub no_topmost: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub image: PathBuf,
    pub border: i32,
    pub pen_color: u32,
    pub pen_width: i32,
    pub topmost: bool,
}

impl Config {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            border: DEFAULT_BORDER,
            pen_color: DEFAULT_PEN_COLOR,
            pen_width: DEFAULT_PEN_WIDTH,
            topmost: true,
        }
    }
}

impl Cli {
    /// Validate the parsed arguments. `Ok(None)` means no image was given.
    pub fn into_config(self) -> Result<Option<Config>> {
        let Some(image) = self.image else {
            return Ok(None);
        };
        if self.border < 1 {
            return Err(Error::InvalidConfig(format!("--border must be >= 1, got {}", self.border)));
        }
        if self.pen_width < 1 {
            return Err(Error::InvalidConfig(format!(
                "--pen-width must be >= 1, got {}",
                self.pen_width
            )));
        }
        Ok(Some(Config {
            image,
            border: self.border,
            pen_color: parse_hex_color(&self.pen_color)?,
            pen_width: self.pen_width,
            topmost: !self.no_topmost,
        }))
    }
}

/// "ff0000" or "#ff0000" -> 0x00FF0000.
pub fn parse_hex_color(s: &str) -> Result<u32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(Error::InvalidConfig(format!("pen colour must be RRGGBB, got {s:?}")));
    }
    u32::from_str_radix(hex, 16)
        .map_err(|e| Error::InvalidConfig(format!("pen colour {s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_means_nothing_to_do() {
        let cli = Cli::parse_from(["floatview"]);
        assert!(cli.into_config().unwrap().is_none());
    }

    #[test]
    fn defaults_match_builtin_constants() {
        let cli = Cli::parse_from(["floatview", "cat.png"]);
        let cfg = cli.into_config().unwrap().unwrap();
        assert_eq!(cfg, Config::new("cat.png"));
    }

    #[test]
    fn options_are_parsed() {
        let cli = Cli::parse_from([
            "floatview",
            "--border",
            "5",
            "--pen-color",
            "#00ff80",
            "--pen-width",
            "4",
            "--no-topmost",
            "cat.png",
        ]);
        let cfg = cli.into_config().unwrap().unwrap();
        assert_eq!(cfg.border, 5);
        assert_eq!(cfg.pen_color, 0x00_00_FF_80);
        assert_eq!(cfg.pen_width, 4);
        assert!(!cfg.topmost);
    }

    #[test]
    fn bad_values_are_rejected() {
        let cli = Cli::parse_from(["floatview", "--border", "0", "cat.png"]);
        assert!(matches!(cli.into_config(), Err(Error::InvalidConfig(_))));
        assert!(parse_hex_color("red").is_err());
        assert!(parse_hex_color("gg0000").is_err());
    }
}
