//! Square module grid shared by every renderer.
//!
//! A [`ModuleGrid`] is what the encoder hands to the renderers: `size * size`
//! booleans in row-major order, `true` for a dark module. It is immutable
//! after construction.

use crate::error::GridError;

/// A square grid of dark and light modules.
///
/// # Example
///
/// ```rust
/// use tqrcodegen::grid::ModuleGrid;
///
/// let grid = ModuleGrid::from_rows(&[
///     &[true, false],
///     &[false, true],
/// ]).unwrap();
///
/// assert_eq!(grid.size(), 2);
/// assert!(grid.get_module(1, 1));
/// assert!(!grid.get_module(-1, 0)); // outside the grid reads as light
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    /// Width and height in modules, at least 1.
    size: i32,

    /// Modules in row-major order (index `y * size + x`).
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from `size * size` row-major modules.
    pub fn new(size: i32, modules: Vec<bool>) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::InvalidSize(size));
        }
        let expected = (size as usize)
            .checked_mul(size as usize)
            .ok_or(GridError::InvalidSize(size))?;
        if modules.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: modules.len(),
            });
        }
        Ok(Self { size, modules })
    }

    /// Builds a grid by calling `f(x, y)` for every module.
    pub fn from_fn(size: i32, mut f: impl FnMut(i32, i32) -> bool) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::InvalidSize(size));
        }
        let mut modules = Vec::with_capacity((size as usize) * (size as usize));
        for y in 0..size {
            for x in 0..size {
                modules.push(f(x, y));
            }
        }
        Ok(Self { size, modules })
    }

    /// Builds a grid from rows; every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = i32::try_from(rows.len()).map_err(|_| GridError::InvalidSize(i32::MAX))?;
        let mut modules = Vec::with_capacity(rows.len() * rows.len());
        for row in rows {
            modules.extend_from_slice(row.as_ref());
        }
        Self::new(size, modules)
    }

    /// Width and height of the grid, in modules.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the color of the module at `(x, y)`: `false` for light, `true` for dark.
    ///
    /// Coordinates outside the grid are light, so callers can scan the border
    /// area without bounds checks.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && self.modules[(y * self.size + x) as usize]
    }

    /// Number of dark modules in the grid.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

impl From<&qrcode::QrCode> for ModuleGrid {
    fn from(code: &qrcode::QrCode) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        Self {
            size: code.width() as i32,
            modules,
        }
    }
}
