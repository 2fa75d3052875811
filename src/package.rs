//! The `tqrcodegen` package: the `encode_to_svg` command and its registration.
//!
//! [`Package::init`] is the entry point a host calls for every interpreter
//! that loads the package. Module setup happens once per [`Package`] value;
//! teardown waits until every interpreter that loaded it has been finalized.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use log::{debug, trace};

use crate::command::{check_args, Command, Interp};
use crate::config::Config;
use crate::encoder::{Encoder, QrEncoder};
use crate::error::Result;
use crate::svg::to_svg_string_with;

pub const PACKAGE_NAME: &str = "tqrcodegen";
pub const PACKAGE_VERSION: &str = "0.1";
pub const NAMESPACE: &str = "::tqrcodegen";
pub const ENCODE_TO_SVG: &str = "::tqrcodegen::encode_to_svg";

/// Encodes `text` and renders it as an SVG document using `config`.
///
/// # Example
///
/// ```rust
/// use tqrcodegen::config::Config;
/// use tqrcodegen::encoder::QrEncoder;
/// use tqrcodegen::package::encode_to_svg;
///
/// let svg = encode_to_svg(&QrEncoder, "Hello, world!", &Config::default()).unwrap();
/// assert!(svg.starts_with("<?xml"));
/// ```
pub fn encode_to_svg(
    encoder: &dyn Encoder,
    text: &str,
    config: &Config,
) -> Result<String> {
    let grid = encoder.encode(text, config.ecc)?;
    Ok(to_svg_string_with(&grid, &config.svg_options())?)
}

/// The `::tqrcodegen::encode_to_svg text` command.
pub struct EncodeToSvg {
    encoder: Arc<dyn Encoder>,
    config: Config,
}

impl EncodeToSvg {
    pub fn new(encoder: Arc<dyn Encoder>, config: Config) -> Self {
        Self { encoder, config }
    }
}

impl Command for EncodeToSvg {
    fn call(&self, objv: &[&str]) -> Result<String> {
        check_args(objv, 2, 2, 1, "text")?;
        let text = objv[1];
        debug!(
            "encode_to_svg: {} bytes, {} error correction, border {}",
            text.len(),
            self.config.ecc,
            self.config.border
        );
        encode_to_svg(self.encoder.as_ref(), text, &self.config)
    }
}

/// Lifecycle state of the package.
///
/// Module setup runs once per `Package`. Every interpreter that loads the
/// package holds a reference to the module; teardown runs when the last of
/// them is finalized.
pub struct Package {
    encoder: Arc<dyn Encoder>,
    config: Config,
    module_init: Once,
    interps: Arc<AtomicUsize>,
    exited: Arc<AtomicBool>,
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

impl Package {
    pub fn new() -> Self {
        Self::with_encoder(Arc::new(QrEncoder), Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_encoder(Arc::new(QrEncoder), config)
    }

    pub fn with_encoder(encoder: Arc<dyn Encoder>, config: Config) -> Self {
        Self {
            encoder,
            config,
            module_init: Once::new(),
            interps: Arc::new(AtomicUsize::new(0)),
            exited: Arc::new(AtomicBool::new(false)),
        }
    }

    /// One-time module setup; later calls do nothing.
    pub fn init_module(&self) {
        self.module_init.call_once(|| {
            debug!("{} module initialized", PACKAGE_NAME);
        });
    }

    /// Registers an exit handler with `interp` unless the package is already
    /// loaded there.
    fn attach(&self, interp: &mut Interp) {
        if interp.package_version(PACKAGE_NAME).is_some() {
            return;
        }
        if self.interps.fetch_add(1, Ordering::SeqCst) == 0 {
            self.exited.store(false, Ordering::SeqCst);
        }
        let interps = Arc::clone(&self.interps);
        let exited = Arc::clone(&self.exited);
        interp.create_exit_handler(Box::new(move || {
            if interps.fetch_sub(1, Ordering::SeqCst) == 1 {
                trace!("{} module exit", PACKAGE_NAME);
                exited.store(true, Ordering::SeqCst);
            }
        }));
    }

    /// Loads the package into `interp`: module setup, the `::tqrcodegen`
    /// namespace, the `encode_to_svg` command and the package version.
    pub fn init(&self, interp: &mut Interp) -> Result<()> {
        self.init_module();
        self.attach(interp);

        interp.create_namespace(NAMESPACE);
        interp.create_command(
            ENCODE_TO_SVG,
            Box::new(EncodeToSvg::new(Arc::clone(&self.encoder), self.config)),
        )?;

        interp.provide_package(PACKAGE_NAME, PACKAGE_VERSION);
        Ok(())
    }

    pub fn is_module_initialized(&self) -> bool {
        self.module_init.is_completed()
    }

    /// Number of live interpreters the package is loaded into.
    pub fn interp_count(&self) -> usize {
        self.interps.load(Ordering::SeqCst)
    }

    /// Whether module teardown has run.
    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }
}
