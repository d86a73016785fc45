use patchblend_color::{LinearRgba, Rgba};

use crate::bilinear::bilinear_interpolation;
use crate::error::InterpError;
use crate::patch::{Patch, Point};

/// Interpolate a color patch at a point, staying in linear-light space.
///
/// The color patch decomposes into one scalar patch per channel, all
/// sharing the same corner coordinates, and each channel is solved by the
/// scalar interpolator independently.
///
/// # Errors
///
/// Returns [`InterpError::DegeneratePatch`] when the rectangle has zero
/// width or height. The check runs once for the whole patch, not once per
/// channel.
pub fn interpolate_linear(
    point: Point,
    patch: &Patch<LinearRgba>,
) -> Result<LinearRgba, InterpError> {
    patch.check_degenerate()?;
    Ok(LinearRgba {
        r: bilinear_interpolation(point, &patch.map(|c| c.r)),
        g: bilinear_interpolation(point, &patch.map(|c| c.g)),
        b: bilinear_interpolation(point, &patch.map(|c| c.b)),
        a: bilinear_interpolation(point, &patch.map(|c| c.a)),
    })
}

/// Interpolate a color patch at a point, returning a gamma-encoded color.
///
/// Interpolation happens in linear-light space via
/// [`interpolate_linear`]; the result is delinearized back to the
/// gamma-encoded [`Rgba`] the caller can hand to a raster sink.
///
/// # Example
///
/// ```
/// use patchblend_color::Rgba;
/// use patchblend_interp::{interpolate_color, Patch, Point};
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0).linearize();
/// let blue = Rgba::new(0.0, 0.0, 1.0, 1.0).linearize();
/// let patch = Patch::new(0.0, 0.0, 1.0, 1.0, red, blue, red, blue);
///
/// // halfway between red and blue is brighter than the naive (0.5, 0, 0.5)
/// let mid = interpolate_color(Point::new(0.5, 0.5), &patch).unwrap();
/// assert!((mid.r - 0.5f64.sqrt()).abs() < 1e-12);
/// ```
pub fn interpolate_color(point: Point, patch: &Patch<LinearRgba>) -> Result<Rgba, InterpError> {
    Ok(interpolate_linear(point, patch)?.delinearize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn assert_rgba_eq(actual: Rgba, expected: Rgba) {
        assert_relative_eq!(actual.r, expected.r, epsilon = 1e-9);
        assert_relative_eq!(actual.g, expected.g, epsilon = 1e-9);
        assert_relative_eq!(actual.b, expected.b, epsilon = 1e-9);
        assert_relative_eq!(actual.a, expected.a, epsilon = 1e-9);
    }

    #[test]
    fn red_blue_blend_is_gamma_correct() -> Result<(), InterpError> {
        // red on the left edge, blue on the right edge
        let patch = Patch::new(
            0.0,
            0.0,
            1.0,
            1.0,
            RED.linearize(),
            RED.linearize(),
            BLUE.linearize(),
            BLUE.linearize(),
        );
        let mid = interpolate_color(Point::new(0.5, 0.5), &patch)?;

        // the naive gamma-space average would be (0.5, 0, 0.5); the
        // linear-space average is brighter
        let expected = 0.5f64.sqrt();
        assert_rgba_eq(mid, Rgba::new(expected, 0.0, expected, 1.0));
        assert!(mid.r > 0.5);
        Ok(())
    }

    #[test]
    fn corners_reproduce_corner_colors() -> Result<(), InterpError> {
        let patch = Patch::new(
            0.0,
            0.0,
            256.0,
            256.0,
            RED.linearize(),
            BLUE.linearize(),
            RED.linearize(),
            GREEN.linearize(),
        );
        assert_rgba_eq(interpolate_color(Point::new(0.0, 0.0), &patch)?, RED);
        assert_rgba_eq(interpolate_color(Point::new(0.0, 256.0), &patch)?, BLUE);
        assert_rgba_eq(interpolate_color(Point::new(256.0, 0.0), &patch)?, RED);
        assert_rgba_eq(interpolate_color(Point::new(256.0, 256.0), &patch)?, GREEN);
        Ok(())
    }

    #[test]
    fn center_blend_matches_hand_computed_value() -> Result<(), InterpError> {
        let patch = Patch::new(
            0.0,
            0.0,
            256.0,
            256.0,
            RED.linearize(),
            BLUE.linearize(),
            RED.linearize(),
            GREEN.linearize(),
        );
        let center = interpolate_color(Point::new(128.0, 128.0), &patch)?;

        // equal weights at the center: mean of the linearized corners,
        // then square root per channel
        let expected = Rgba::new(
            (0.25f64 * (1.0 + 0.0 + 1.0 + 0.0)).sqrt(),
            (0.25f64 * (0.0 + 0.0 + 0.0 + 1.0)).sqrt(),
            (0.25f64 * (0.0 + 1.0 + 0.0 + 0.0)).sqrt(),
            1.0,
        );
        assert_rgba_eq(center, expected);
        Ok(())
    }

    #[test]
    fn interpolate_linear_skips_delinearization() -> Result<(), InterpError> {
        let patch = Patch::new(
            0.0,
            0.0,
            2.0,
            2.0,
            RED.linearize(),
            BLUE.linearize(),
            RED.linearize(),
            BLUE.linearize(),
        );
        let lin = interpolate_linear(Point::new(1.0, 1.0), &patch)?;
        assert_relative_eq!(lin.r, 0.5, epsilon = 1e-12);
        assert_relative_eq!(lin.b, 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn degenerate_patch_reports_a_single_error() {
        let patch = Patch::new(
            1.0,
            0.0,
            1.0,
            4.0,
            RED.linearize(),
            BLUE.linearize(),
            RED.linearize(),
            GREEN.linearize(),
        );
        assert_eq!(
            interpolate_color(Point::new(0.5, 0.5), &patch),
            Err(InterpError::DegeneratePatch(0.0, 4.0))
        );
    }
}
