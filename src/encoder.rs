//! Adapter over the external QR symbol generator.
//!
//! Symbol construction (segment modes, Reed-Solomon codewords, masking,
//! version selection) belongs to the [`qrcode`] crate. This module only picks
//! the error correction level and turns the result into a [`ModuleGrid`].

use std::fmt;
use std::str::FromStr;

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use serde::Deserialize;

use crate::error::{ConfigError, EncodeError};
use crate::grid::ModuleGrid;

/// The error correction level in a QR Code symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Ecc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    #[default]
    High,
}

impl Ecc {
    fn level(self) -> EcLevel {
        match self {
            Ecc::Low => EcLevel::L,
            Ecc::Medium => EcLevel::M,
            Ecc::Quartile => EcLevel::Q,
            Ecc::High => EcLevel::H,
        }
    }
}

impl FromStr for Ecc {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(Ecc::Low),
            "medium" | "m" => Ok(Ecc::Medium),
            "quartile" | "q" => Ok(Ecc::Quartile),
            "high" | "h" => Ok(Ecc::High),
            _ => Err(ConfigError::InvalidEcc(s.to_string())),
        }
    }
}

impl TryFrom<String> for Ecc {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Ecc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ecc::Low => "low",
            Ecc::Medium => "medium",
            Ecc::Quartile => "quartile",
            Ecc::High => "high",
        };
        f.write_str(name)
    }
}

/// Turns text into a module grid.
pub trait Encoder: Send + Sync {
    fn encode(&self, text: &str, ecc: Ecc) -> Result<ModuleGrid, EncodeError>;
}

/// [`Encoder`] backed by the `qrcode` crate.
///
/// Picks the smallest normal symbol version (1 to 40) that holds the text at
/// the requested level.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl Encoder for QrEncoder {
    fn encode(&self, text: &str, ecc: Ecc) -> Result<ModuleGrid, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecc.level())
            .map_err(|e| match e {
                QrError::DataTooLong => EncodeError::DataTooLong,
                other => EncodeError::Qr(other.to_string()),
            })?;
        Ok(ModuleGrid::from(&code))
    }
}
