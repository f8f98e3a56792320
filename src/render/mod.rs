//! Rendering for armory.
//!
//! Components draw onto a [`LogicalSurface`] through a clipped [`Canvas`],
//! shade silhouettes with the [`EdgeShader`], and the finished surface is
//! exported as PNG.

mod canvas;
pub mod png;
mod shade;
mod surface;

pub use canvas::Canvas;
pub use png::{encode_data_url, encode_png, placeholder_data_url, to_image, write_png};
pub use shade::{EdgeShader, Exposure, Overlay, ShadedCell, Shading, Tone};
pub use surface::{GridSpec, LogicalSurface, MAX_RASTER_SIDE};
