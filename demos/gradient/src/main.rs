use argh::FromArgs;
use std::path::PathBuf;

use patchblend::color::Rgba;
use patchblend::interp::{interpolate_color, Patch, Point};
use patchblend::io::{render_image_png_rgba8, ImageSize};

#[derive(FromArgs)]
/// Render a gamma-correct four-corner gradient to a PNG file
struct Args {
    /// path of the output image
    #[argh(option, short = 'o', default = "PathBuf::from(\"image.png\")")]
    output: PathBuf,

    /// width and height of the output image in pixels
    #[argh(option, short = 's', default = "256")]
    size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.size == 0 {
        return Err("--size must be at least 1 pixel".into());
    }

    let side = args.size as f64;
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let green = Rgba::new(0.0, 1.0, 0.0, 1.0);
    let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);

    // red, blue, red, green at the four corners
    let patch = Patch::new(
        0.0,
        0.0,
        side,
        side,
        red.linearize(),
        blue.linearize(),
        red.linearize(),
        green.linearize(),
    );

    let size = ImageSize {
        width: args.size,
        height: args.size,
    };

    log::info!("rendering {}x{} gradient", size.width, size.height);

    render_image_png_rgba8(&args.output, size, |x, y| {
        interpolate_color(Point::new(x as f64, y as f64), &patch)
            .expect("patch is non-degenerate")
    })?;

    log::info!("wrote {}", args.output.display());

    Ok(())
}
