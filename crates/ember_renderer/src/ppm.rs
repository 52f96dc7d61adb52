//! Plain-text PPM (P3) image output.

use crate::material::Color;
use crate::renderer::{linear_to_gamma, ImageBuffer};
use ember_math::Interval;
use std::io::{self, Write};

/// Clamp window applied to each channel before quantization; the 0.999
/// ceiling keeps `256 * x` below 256.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Convert a linear color to gamma-corrected 8-bit RGB.
fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (256.0 * INTENSITY.clamp(linear_to_gamma(color.x))) as u8;
    let g = (256.0 * INTENSITY.clamp(linear_to_gamma(color.y))) as u8;
    let b = (256.0 * INTENSITY.clamp(linear_to_gamma(color.z))) as u8;
    [r, g, b]
}

/// Write an image as PPM: `P3` header, dimensions, max channel value,
/// then one `r g b` line per pixel in row-major order from the top left.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
