use crate::error::ColorError;

/// A gamma-encoded RGBA color with `f64` channels.
///
/// Channels are nominally in `[0, 1]` but are not clamped here; out of range
/// values pass through unchanged and clamping is left to the rendering sink.
///
/// Averaging gamma-encoded channels directly produces blends that are too
/// dark. Convert to [`LinearRgba`] with [`Rgba::linearize`] before any
/// arithmetic that mixes colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

/// An RGBA color in linear-light space.
///
/// This is a distinct type from [`Rgba`] so that gamma-encoded values cannot
/// be handed to the interpolator by accident. Alpha carries no gamma and is
/// identical in both representations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgba {
    /// Red channel, linear light.
    pub r: f64,
    /// Green channel, linear light.
    pub g: f64,
    /// Blue channel, linear light.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Create a new color from its four channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to linear-light space by removing the gamma encoding.
    ///
    /// Uses the simplified gamma-2 model: each of r, g, b is squared and
    /// alpha passes through unchanged.
    pub fn linearize(self) -> LinearRgba {
        LinearRgba {
            r: self.r * self.r,
            g: self.g * self.g,
            b: self.b * self.b,
            a: self.a,
        }
    }
}

impl LinearRgba {
    /// Create a new linear color from its four channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert back to gamma-encoded space.
    ///
    /// Inverse of [`Rgba::linearize`]: each of r, g, b is square-rooted and
    /// alpha passes through. A negative channel, which cannot come out of
    /// `linearize` but can be constructed directly, yields NaN for that
    /// channel; use [`LinearRgba::try_delinearize`] to reject it instead.
    pub fn delinearize(self) -> Rgba {
        Rgba {
            r: self.r.sqrt(),
            g: self.g.sqrt(),
            b: self.b.sqrt(),
            a: self.a,
        }
    }

    /// Strict variant of [`LinearRgba::delinearize`] that fails on negative
    /// channel values instead of producing NaN.
    pub fn try_delinearize(self) -> Result<Rgba, ColorError> {
        for c in [self.r, self.g, self.b] {
            if c < 0.0 {
                return Err(ColorError::NegativeChannel(c));
            }
        }
        Ok(self.delinearize())
    }
}
