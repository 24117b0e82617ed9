// What you SEE:
// • The image from the command line in a borderless, always-on-top window.
// • Drag inside to move it; drag the thin border to resize (aspect ratio locked).
// • Right-click: Close, Maximize, Draw (freehand red pen), Clear Drawing.
// • ESC closes the menu, or the window when no menu is open.

use clap::Parser;
use floatview::config::Cli;
use floatview::error::Error;
use floatview::window;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // No image argument: nothing to show.
    let Some(config) = Cli::parse().into_config()? else {
        return Ok(());
    };

    window::run(config)
}
