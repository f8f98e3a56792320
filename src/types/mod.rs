//! Core colour types.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - base/highlight/shadow/outline tones for one material
//! - `MaterialCatalog` - built-in material key to palette table

mod colour;
mod material;
mod palette;

pub use self::colour::Colour;
pub use self::material::{MaterialCatalog, MaterialClass, MaterialDef, FALLBACK_MATERIAL};
pub use self::palette::Palette;
