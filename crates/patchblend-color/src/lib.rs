#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the color module.
pub mod error;

/// Gamma-encoded and linear-light RGBA color types.
pub mod rgba;

pub use crate::error::ColorError;
pub use crate::rgba::{LinearRgba, Rgba};
