//! Console rendering of a module grid.

use crate::error::RenderError;
use crate::grid::ModuleGrid;
use crate::svg::checked_dimension;

const DARK: &str = "██";
const LIGHT: &str = "  ";

/// Renders the grid as block characters, two columns per module.
///
/// Border validation matches [`to_svg_string`](crate::svg::to_svg_string).
/// Fails with [`RenderError::OutputTooLarge`] instead of aborting when the
/// padded grid cannot be held in memory.
pub fn to_text_string(grid: &ModuleGrid, border: i32) -> Result<String, RenderError> {
    let dimension = checked_dimension(grid.size(), border)?;
    let too_large = || RenderError::OutputTooLarge { dimension };
    let side = dimension as usize;
    // Every module is at least LIGHT.len() bytes and at most DARK.len().
    let row_bytes = |per_module: usize| {
        side.checked_mul(per_module)
            .and_then(|row| row.checked_add(1))
            .and_then(|row| row.checked_mul(side))
    };
    row_bytes(DARK.len()).ok_or_else(too_large)?;
    let min_bytes = row_bytes(LIGHT.len()).ok_or_else(too_large)?;

    let mut result = String::new();
    result.try_reserve_exact(min_bytes).map_err(|_| too_large())?;
    for y in -border..grid.size() + border {
        for x in -border..grid.size() + border {
            result += if grid.get_module(x, y) { DARK } else { LIGHT };
        }
        result.push('\n');
    }
    Ok(result)
}

/// Prints the given grid to the console with a four-module border.
///
/// # Example
///
/// ```rust
/// use tqrcodegen::encoder::{Ecc, Encoder, QrEncoder};
/// use tqrcodegen::text::print_qr;
///
/// let grid = QrEncoder.encode("Hello, world!", Ecc::Low).unwrap();
/// print_qr(&grid).unwrap();
/// ```
pub fn print_qr(grid: &ModuleGrid) -> Result<(), RenderError> {
    println!("{}", to_text_string(grid, 4)?);
    Ok(())
}
