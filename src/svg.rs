use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::RenderError;
use crate::grid::ModuleGrid;

/*---- SVG rendering ----*/

/// How the module at `(0, 0)` is treated when building the path.
///
/// Existing consumers expect output where the first scanned module never
/// gets a path command, even when it is dark. [`OriginModule::Emit`] draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginModule {
    #[default]
    Suppress,
    Emit,
}

/// Options for [`to_svg_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Light modules of padding on each side.
    pub border: i32,
    pub origin_module: OriginModule,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            border: 4,
            origin_module: OriginModule::Suppress,
        }
    }
}

/// Checks that `border` is non-negative and that `size + border * 2` fits in
/// an `i32`. Returns the padded side length.
pub(crate) fn checked_dimension(size: i32, border: i32) -> Result<i32, RenderError> {
	let invalid = |reason: &'static str| RenderError::InvalidBorder { border, size, reason };
	if border < 0 {
		return Err(invalid("border must be non-negative"));
	}
	if border > i32::MAX / 2 || border * 2 > i32::MAX - size {
		return Err(invalid("border too large"));
	}
	Ok(size + border * 2)
}

// Returns a string of SVG code for an image depicting
// the given grid, with the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(grid: &ModuleGrid, border: i32) -> Result<String, RenderError> {
	to_svg_string_with(grid, &SvgOptions { border, ..SvgOptions::default() })
}

/// Renders `grid` as an SVG document using `options`.
///
/// Every dark module becomes one `M{x},{y}h1v1h-1z` subpath, in row-major
/// order, shifted by the border. Fails with [`RenderError::InvalidBorder`]
/// before producing anything if the border is negative or too large.
///
/// # Example
///
/// ```rust
/// use tqrcodegen::grid::ModuleGrid;
/// use tqrcodegen::svg::{to_svg_string_with, OriginModule, SvgOptions};
///
/// let grid = ModuleGrid::from_rows(&[[true, false], [false, true]]).unwrap();
/// let options = SvgOptions { border: 1, origin_module: OriginModule::Emit };
/// let svg = to_svg_string_with(&grid, &options).unwrap();
/// assert!(svg.contains("<path d=\"M1,1h1v1h-1z M2,2h1v1h-1z\""));
/// ```
pub fn to_svg_string_with(grid: &ModuleGrid, options: &SvgOptions) -> Result<String, RenderError> {
	let border = options.border;
	let dimension = checked_dimension(grid.size(), border)?;

	let mut result = String::new();
	result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
	result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
	result += &format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n", dimension);
	result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
	result += "\t<path d=\"";
	let mut first = true;
	for y in 0 .. grid.size() {
		for x in 0 .. grid.size() {
			if !grid.get_module(x, y) {
				continue;
			}
			if x == 0 && y == 0 && options.origin_module == OriginModule::Suppress {
				continue;
			}
			if !first {
				result += " ";
			}
			first = false;
			result += &format!("M{},{}h1v1h-1z", x + border, y + border);
		}
	}
	result += "\" fill=\"#000000\"/>\n";
	result += "</svg>\n";
	Ok(result)
}

/// Wraps an SVG document in a base64 `data:` URI, ready for an `<img src>`.
pub fn to_data_uri(svg: &str) -> String {
	format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
