use crate::error::InterpError;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with a value of type `T` at each corner.
///
/// `v11` is the value at `(x1, y1)`, `v12` at `(x1, y2)`, `v21` at
/// `(x2, y1)` and `v22` at `(x2, y2)`. The rectangle must be non-degenerate
/// (`x1 != x2` and `y1 != y2`) for interpolation to be defined; the
/// interpolation entry points check this and return
/// [`InterpError::DegeneratePatch`] otherwise.
///
/// The same structure serves scalar interpolation (`Patch<f64>`) and color
/// interpolation (`Patch<LinearRgba>`), the latter decomposing into four
/// scalar patches via [`Patch::map`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch<T> {
    /// Left edge x coordinate.
    pub x1: f64,
    /// Top edge y coordinate.
    pub y1: f64,
    /// Right edge x coordinate.
    pub x2: f64,
    /// Bottom edge y coordinate.
    pub y2: f64,
    /// Value at `(x1, y1)`.
    pub v11: T,
    /// Value at `(x1, y2)`.
    pub v12: T,
    /// Value at `(x2, y1)`.
    pub v21: T,
    /// Value at `(x2, y2)`.
    pub v22: T,
}

impl<T> Patch<T> {
    /// Create a new patch from corner coordinates and corner values.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        v11: T,
        v12: T,
        v21: T,
        v22: T,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            v11,
            v12,
            v21,
            v22,
        }
    }

    /// Apply `f` to each corner value, keeping the corner coordinates.
    ///
    /// Used to project a color patch onto one of its channels.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Patch<U> {
        Patch {
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
            v11: f(&self.v11),
            v12: f(&self.v12),
            v21: f(&self.v21),
            v22: f(&self.v22),
        }
    }

    pub(crate) fn check_degenerate(&self) -> Result<(), InterpError> {
        // exact float comparison: any nonzero span keeps the denominator
        // finite, only exact equality divides by zero
        if self.x1 == self.x2 || self.y1 == self.y2 {
            return Err(InterpError::DegeneratePatch(
                self.x2 - self.x1,
                self.y2 - self.y1,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_projects_corner_values() {
        let patch = Patch::new(0.0, 0.0, 1.0, 1.0, (1, 2), (3, 4), (5, 6), (7, 8));
        let first = patch.map(|v| v.0);
        assert_eq!((first.v11, first.v12, first.v21, first.v22), (1, 3, 5, 7));
        assert_eq!(first.x2, 1.0);
    }

    #[test]
    fn degenerate_check() {
        assert!(Patch::new(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0)
            .check_degenerate()
            .is_ok());
        assert_eq!(
            Patch::new(2.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0).check_degenerate(),
            Err(InterpError::DegeneratePatch(0.0, 1.0))
        );
    }
}
