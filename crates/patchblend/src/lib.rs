#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use patchblend_color as color;

#[doc(inline)]
pub use patchblend_interp as interp;

#[doc(inline)]
pub use patchblend_io as io;
