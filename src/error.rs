//! Error types for encoding, rendering and the command surface.

use thiserror::Error;

/// Errors raised while rendering a module grid.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Border is negative, or the padded image side would overflow.
    #[error("invalid border {border} for a {size}x{size} grid: {reason}")]
    InvalidBorder {
        border: i32,
        size: i32,
        reason: &'static str,
    },

    /// The rendered output would not fit in memory.
    #[error("rendered output too large for a {dimension}x{dimension} image")]
    OutputTooLarge { dimension: i32 },

    /// Raster scale must be at least one pixel per module.
    #[error("invalid scale {0}: must be at least 1")]
    InvalidScale(u32),

    /// Image encoding failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error while saving output.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the QR encoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The text does not fit in any supported symbol version.
    #[error("data too long to fit in any QR code version")]
    DataTooLong,

    /// Any other failure reported by the encoder.
    #[error("QR encoding failed: {0}")]
    Qr(String),
}

/// Errors raised when building a [`ModuleGrid`](crate::grid::ModuleGrid) by hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(i32),

    #[error("expected {expected} modules, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors reported through the command host.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Arity mismatch; carries the host's usage message.
    #[error("{0}")]
    WrongNumArgs(String),

    #[error("invalid command name \"{0}\"")]
    UnknownCommand(String),

    #[error("namespace \"{0}\" not found")]
    UnknownNamespace(String),

    #[error(transparent)]
    Encoding(#[from] EncodeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for command and package operations.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown error correction level \"{0}\" (expected low, medium, quartile or high)")]
    InvalidEcc(String),
}
