/// An error type for the color module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    /// Error when a linear channel value is negative and cannot be
    /// delinearized in strict mode.
    #[error("Negative linear channel value: {0}")]
    NegativeChannel(f64),
}
