//! PNG export for logical surfaces.
//!
//! Each logical cell becomes an exact `scale x scale` pixel block. Images
//! are written to disk or encoded as a base64 data URL.

use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{ArmoryError, Result};
use crate::types::Colour;

use super::{GridSpec, LogicalSurface};

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Side of the broken-item placeholder, in cells.
pub const PLACEHOLDER_SIDE: u32 = 8;

/// Pre-encoded 1x1 magenta PNG, used if the placeholder itself cannot be
/// encoded.
const PLACEHOLDER_FALLBACK: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR4nGP4z/D/PwAG/gL+DHWJ3gAAAABJRU5ErkJggg==";

/// Expand a surface into a raster image.
pub fn to_image(surface: &LogicalSurface) -> RgbaImage {
    let scale = surface.scale().max(1);
    let (width, height) = surface.grid().with_scale(scale).pixel_size();

    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (x, y, colour) in surface.filled_cells() {
        let rgba = Rgba(colour.to_rgba());
        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
            }
        }
    }
    img
}

/// Encode a surface as PNG bytes.
pub fn encode_png(surface: &LogicalSurface) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    to_image(surface)
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| ArmoryError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(bytes.into_inner())
}

/// Encode a surface as a `data:image/png;base64,...` URL.
pub fn encode_data_url(surface: &LogicalSurface) -> Result<String> {
    let bytes = encode_png(surface)?;
    Ok(format!(
        "{}{}",
        DATA_URL_PREFIX,
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Decode the PNG bytes behind a data URL produced by [`encode_data_url`].
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let payload = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| ArmoryError::Parse {
            message: "not a PNG data URL".to_string(),
            help: Some(format!("expected a value starting with {}", DATA_URL_PREFIX)),
        })?;
    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ArmoryError::Parse {
            message: format!("invalid base64 payload: {}", e),
            help: None,
        })
}

/// Write a surface to a PNG file.
pub fn write_png(surface: &LogicalSurface, path: &Path) -> Result<()> {
    to_image(surface).save(path).map_err(|e| ArmoryError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    Ok(())
}

/// The magenta/black checkerboard drawn for broken items.
pub fn placeholder_surface() -> Result<LogicalSurface> {
    let mut surface =
        LogicalSurface::new(GridSpec::new(PLACEHOLDER_SIDE, PLACEHOLDER_SIDE, 1))?;
    for y in 0..PLACEHOLDER_SIDE as i32 {
        for x in 0..PLACEHOLDER_SIDE as i32 {
            let colour = if (x + y) % 2 == 0 {
                Colour::MAGENTA
            } else {
                Colour::BLACK
            };
            surface.blit(x, y, 1, 1, colour);
        }
    }
    Ok(surface)
}

/// Data URL of the broken-item placeholder. Never fails.
pub fn placeholder_data_url() -> String {
    placeholder_surface()
        .and_then(|s| encode_data_url(&s))
        .unwrap_or_else(|_| PLACEHOLDER_FALLBACK.to_string())
}
