use std::fs;
use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageFormat, Luma};

use crate::error::RenderError;
use crate::grid::ModuleGrid;
use crate::svg::checked_dimension;

/// Converts a module grid to a grayscale image buffer.
///
/// # Arguments
///
/// * `grid` - The modules to draw.
/// * `border` - Light modules of padding on each side.
/// * `scale` - Pixels per module, at least 1.
///
/// # Errors
///
/// Returns [`RenderError::InvalidBorder`] for a negative border or one whose
/// image side would not fit in a `u32`, and [`RenderError::InvalidScale`]
/// for a zero scale.
///
/// # Example
///
/// ```rust
/// use tqrcodegen::encoder::{Ecc, Encoder, QrEncoder};
/// use tqrcodegen::raster::to_image_buffer;
///
/// let grid = QrEncoder.encode("Hello, world!", Ecc::Low).unwrap();
/// let img = to_image_buffer(&grid, 4, 1).unwrap();
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn to_image_buffer(grid: &ModuleGrid, border: i32, scale: u32) -> Result<GrayImage, RenderError> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let dimension = checked_dimension(grid.size(), border)? as u32;
    let side = dimension.checked_mul(scale).ok_or(RenderError::InvalidBorder {
        border,
        size: grid.size(),
        reason: "image too large",
    })?;

    let img = ImageBuffer::from_fn(side, side, |x, y| {
        let qr_x = (x / scale) as i32 - border;
        let qr_y = (y / scale) as i32 - border;
        if grid.get_module(qr_x, qr_y) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        }
    });
    Ok(img)
}

/// Renders the grid and saves it as a PNG, creating parent directories as needed.
pub fn save_png(grid: &ModuleGrid, border: i32, scale: u32, path: &Path) -> Result<(), RenderError> {
    let img = to_image_buffer(grid, border, scale)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
