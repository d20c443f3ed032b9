//! 8-bit RGBA colours for rendering code.
//!
//! [`Colour`] stores four unprocessed byte channels. It can be converted to a packed 32-bit word
//! for graphics APIs, to a [`uu_linalg::Vec4f`] for shader-style arithmetic, and to the
//! [`Hsb`] (hue, saturation, brightness) representation for colour pickers and palette
//! manipulation.

mod colour;
mod hsb;

pub use colour::Colour;
pub use hsb::Hsb;
