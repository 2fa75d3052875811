//! Configuration for the `encode_to_svg` command.
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! border = 2
//! ecc = "medium"
//! origin_module = "emit"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::encoder::Ecc;
use crate::error::ConfigError;
use crate::svg::{OriginModule, SvgOptions};

/// Settings applied by the `encode_to_svg` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Light modules of padding around the symbol
    pub border: i32,

    /// Error correction level requested from the encoder
    pub ecc: Ecc,

    /// Whether a dark module at `(0, 0)` gets a path command
    pub origin_module: OriginModule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            border: 4,
            ecc: Ecc::High,
            origin_module: OriginModule::Suppress,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the border width
    pub fn with_border(mut self, border: i32) -> Self {
        self.border = border;
        self
    }

    /// Set the error correction level
    pub fn with_ecc(mut self, ecc: Ecc) -> Self {
        self.ecc = ecc;
        self
    }

    /// Set the origin module policy
    pub fn with_origin_module(mut self, origin_module: OriginModule) -> Self {
        self.origin_module = origin_module;
        self
    }

    /// SVG options derived from this configuration
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            border: self.border,
            origin_module: self.origin_module,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.border, 4);
        assert_eq!(config.ecc, Ecc::High);
        assert_eq!(config.origin_module, OriginModule::Suppress);
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .with_border(0)
            .with_ecc(Ecc::Low)
            .with_origin_module(OriginModule::Emit);
        assert_eq!(
            config.svg_options(),
            SvgOptions { border: 0, origin_module: OriginModule::Emit }
        );
        assert_eq!(config.ecc, Ecc::Low);
    }

    #[test]
    fn test_from_str_partial() {
        let config = Config::from_str("ecc = \"q\"").unwrap();
        assert_eq!(config.ecc, Ecc::Quartile);
        assert_eq!(config.border, 4);
    }

    #[test]
    fn test_from_str_full() {
        let config = Config::from_str(
            r#"
border = 2
ecc = "Medium"
origin_module = "emit"
"#,
        )
        .unwrap();
        assert_eq!(config, Config::new().with_border(2).with_ecc(Ecc::Medium).with_origin_module(OriginModule::Emit));
    }

    #[test]
    fn test_from_str_rejects_bad_values() {
        assert!(matches!(Config::from_str("ecc = \"ultra\""), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_str("colour = \"red\""), Err(ConfigError::Parse(_))));
    }
}
