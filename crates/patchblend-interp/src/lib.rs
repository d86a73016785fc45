#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the interpolation module.
pub mod error;

/// The four-corner patch and point types.
pub mod patch;

mod bilinear;
mod color;

pub use crate::bilinear::interpolate;
pub use crate::color::{interpolate_color, interpolate_linear};
pub use crate::error::InterpError;
pub use crate::patch::{Patch, Point};
