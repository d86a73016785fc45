/// An error type for the interpolation module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InterpError {
    /// Error when the patch rectangle has zero width or height.
    ///
    /// Carries the x and y spans of the offending rectangle.
    #[error("Patch rectangle is degenerate (x span: {0}, y span: {1})")]
    DegeneratePatch(f64, f64),
}
