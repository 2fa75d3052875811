//! tqrcodegen CLI
//!
//! Usage:
//!   tqrcodegen [OPTIONS] <TEXT>
//!
//! Options:
//!   -b, --border <N>      Border width in modules
//!   -e, --ecc <LEVEL>     Error correction level (low, medium, quartile, high)
//!   -c, --config <FILE>   Configuration file (TOML format)
//!   -f, --format <FMT>    Output format: svg, text, png, data-uri
//!   -o, --output <FILE>   Output file (required for png)
//!   -v, --verbose         Debug logging on stderr
//!
//! `RUST_LOG` overrides the log level chosen by `--verbose`.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use tqrcodegen::command::Interp;
use tqrcodegen::package::{Package, ENCODE_TO_SVG};
use tqrcodegen::raster::save_png;
use tqrcodegen::svg::to_data_uri;
use tqrcodegen::text::to_text_string;
use tqrcodegen::{Config, Ecc, Encoder, OriginModule, QrEncoder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Text,
    Png,
    DataUri,
}

#[derive(Parser)]
#[command(name = "tqrcodegen")]
#[command(about = "Encode text as a QR code and render it as SVG")]
struct Cli {
    /// Text to encode
    text: String,

    /// Border width in modules (default 4)
    #[arg(short, long, allow_negative_numbers = true)]
    border: Option<i32>,

    /// Error correction level: low, medium, quartile, high (default high)
    #[arg(short, long)]
    ecc: Option<Ecc>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw the top-left module even when it is the first dark module
    #[arg(long)]
    emit_origin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (stdout if omitted; required for png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixels per module for png output
    #[arg(long, default_value_t = 8)]
    scale: u32,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Logger writing to stderr: `Warn` by default, `Debug` with `--verbose`.
fn logger_builder(verbose: bool) -> env_logger::Builder {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);
    builder
}

fn main() {
    let cli = Cli::parse();

    // A logger that is already installed is fine.
    let _ = logger_builder(cli.verbose).parse_default_env().try_init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => Config::default(),
    };
    if let Some(border) = cli.border {
        config = config.with_border(border);
    }
    if let Some(ecc) = cli.ecc {
        config = config.with_ecc(ecc);
    }
    if cli.emit_origin {
        config = config.with_origin_module(OriginModule::Emit);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let rendered = match cli.format {
        Format::Svg | Format::DataUri => {
            let package = Package::with_config(config);
            let mut interp = Interp::new();
            package.init(&mut interp)?;
            let svg = interp.eval(&[ENCODE_TO_SVG, cli.text.as_str()])?;
            if cli.format == Format::DataUri {
                to_data_uri(&svg)
            } else {
                svg
            }
        }
        Format::Text => {
            let grid = QrEncoder.encode(&cli.text, config.ecc)?;
            to_text_string(&grid, config.border)?
        }
        Format::Png => {
            let Some(path) = &cli.output else {
                bail!("--output is required for png output");
            };
            let grid = QrEncoder.encode(&cli.text, config.ecc)?;
            save_png(&grid, config.border, cli.scale, path)
                .with_context(|| format!("writing '{}'", path.display()))?;
            return Ok(());
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing '{}'", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}
