//! # tqrcodegen
//!
//! Encode text as a QR code and render the module grid as a minimal SVG document.
//!
//! `tqrcodegen` registers a single command, `::tqrcodegen::encode_to_svg text`,
//! in a small command host. The command hands the text to the [`qrcode`] crate
//! and serializes the resulting module grid as an SVG path: one unit square per
//! dark module, in row-major order.
//!
//! ## Features
//!
//! - Byte-stable SVG output with an XML declaration and SVG 1.1 DOCTYPE.
//! - Border validation that rejects negative or overflowing borders before any output.
//! - Four error correction levels: Low, Medium, Quartile, High.
//! - Console and grayscale image (PNG) renderings of the same grid.
//! - Base64 `data:` URIs for embedding the SVG.
//! - TOML configuration.
//!
//! ## Example
//!
//! Run the command through an interpreter:
//!
//! ```rust
//! use tqrcodegen::command::Interp;
//! use tqrcodegen::package::Package;
//!
//! let package = Package::new();
//! let mut interp = Interp::new();
//! package.init(&mut interp).unwrap();
//!
//! let svg = interp.eval(&["::tqrcodegen::encode_to_svg", "Hello, world!"]).unwrap();
//! assert!(svg.contains("<path d=\"M"));
//! ```
//!
//! Render a grid directly:
//!
//! ```rust
//! use tqrcodegen::encoder::{Ecc, Encoder, QrEncoder};
//! use tqrcodegen::svg::to_svg_string;
//!
//! let grid = QrEncoder.encode("Hello, world!", Ecc::High).unwrap();
//! let svg = to_svg_string(&grid, 4).unwrap();
//! assert!(svg.ends_with("</svg>\n"));
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: The square module grid.
//! - [`encoder`]: Adapter over the QR symbol generator.
//! - [`svg`]: SVG rendering and data URIs.
//! - [`text`], [`raster`]: Console and image renderings.
//! - [`command`], [`package`]: Command host and package registration.
//! - [`config`]: TOML configuration.

#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod package;
pub mod raster;
pub mod svg;
pub mod text;

pub use config::Config;
pub use encoder::{Ecc, Encoder, QrEncoder};
pub use error::{CommandError, ConfigError, EncodeError, GridError, RenderError};
pub use grid::ModuleGrid;
pub use svg::{to_svg_string, OriginModule, SvgOptions};
