#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// Rasterization of a per-pixel color producer into an RGBA8 buffer.
pub mod render;

/// PNG encoding and file writing.
pub mod png;

pub use crate::error::IoError;
pub use crate::png::{render_image_png_rgba8, write_image_png_rgba8};
pub use crate::render::{render_rgba8, ImageSize};
