use crate::error::InterpError;
use crate::patch::{Patch, Point};

/// Kernel for bilinear interpolation over a scalar patch.
///
/// Assumes the patch has already been checked for degeneracy.
pub(crate) fn bilinear_interpolation(point: Point, patch: &Patch<f64>) -> f64 {
    let dx1 = point.x - patch.x1;
    let dx2 = patch.x2 - point.x;
    let dy1 = point.y - patch.y1;
    let dy2 = patch.y2 - point.y;

    // each corner is weighted by the distances to the opposite edges
    let num = patch.v11 * dx2 * dy2
        + patch.v21 * dx1 * dy2
        + patch.v12 * dx2 * dy1
        + patch.v22 * dx1 * dy1;

    num / ((patch.x2 - patch.x1) * (patch.y2 - patch.y1))
}

/// Interpolate the value of a scalar patch at a point.
///
/// The result is the bilinear blend of the four corner values. The point
/// does not need to lie inside the rectangle; outside it the formula
/// extrapolates linearly.
///
/// # Arguments
///
/// * `point` - The point to evaluate at.
/// * `patch` - The four-corner scalar patch.
///
/// # Errors
///
/// Returns [`InterpError::DegeneratePatch`] when the rectangle has zero
/// width or height.
///
/// # Example
///
/// ```
/// use patchblend_interp::{interpolate, Patch, Point};
///
/// let patch = Patch::new(0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0, 4.0);
/// let value = interpolate(Point::new(1.0, 1.0), &patch).unwrap();
/// assert_eq!(value, 1.0);
/// ```
pub fn interpolate(point: Point, patch: &Patch<f64>) -> Result<f64, InterpError> {
    patch.check_degenerate()?;
    Ok(bilinear_interpolation(point, patch))
}
