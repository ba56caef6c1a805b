//! Render an extract stored as JSON into the federal extract document.
//!
//! Usage:
//!   render_extract <extract.json> [--config <config.json>] [--flavour full|reduced|embeddable]
//!                  [--lang <code>] [--images] [--geometry] [--base-url <url>]
//!                  [--output <file>] [--compact]
//!
//! Set `RUST_LOG=debug` for per-record logging.

use oereb_extract::references::UrlReferenceBuilder;
use oereb_extract::{Extract, ExtractRenderer, RenderConfig, RenderMode};
use std::fs;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: render_extract <extract.json> [--config <config.json>] \
[--flavour full|reduced|embeddable] [--lang <code>] [--images] [--geometry] \
[--base-url <url>] [--output <file>] [--compact]";

struct CliConfig {
    extract_path: PathBuf,
    config_path: Option<PathBuf>,
    flavour: String,
    language: Option<String>,
    images: bool,
    geometry: bool,
    base_url: String,
    output: Option<PathBuf>,
    pretty: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut extract_path = None;
        let mut config_path = None;
        let mut flavour = "reduced".to_string();
        let mut language = None;
        let mut images = false;
        let mut geometry = false;
        let mut base_url = "http://localhost:6543/oereb".to_string();
        let mut output = None;
        let mut pretty = true;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => config_path = Some(PathBuf::from(value_of(&args, &mut i)?)),
                "--flavour" => flavour = value_of(&args, &mut i)?,
                "--lang" => language = Some(value_of(&args, &mut i)?),
                "--base-url" => base_url = value_of(&args, &mut i)?,
                "--output" | "-o" => output = Some(PathBuf::from(value_of(&args, &mut i)?)),
                "--images" => images = true,
                "--geometry" => geometry = true,
                "--compact" => pretty = false,
                "--help" | "-h" => return Err(USAGE.to_string()),
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option '{}'\n{}", arg, USAGE));
                },
                arg => extract_path = Some(PathBuf::from(arg)),
            }
            i += 1;
        }

        Ok(Self {
            extract_path: extract_path.ok_or_else(|| USAGE.to_string())?,
            config_path,
            flavour,
            language,
            images,
            geometry,
            base_url,
            output,
            pretty,
        })
    }
}

fn value_of(args: &[String], i: &mut usize) -> Result<String, String> {
    let option = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("Option '{}' needs a value\n{}", option, USAGE))
}

fn run(cli: &CliConfig) -> oereb_extract::Result<()> {
    let config = match &cli.config_path {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let extract: Extract = serde_json::from_str(&fs::read_to_string(&cli.extract_path)?)?;
    let renderer = ExtractRenderer::new(config, UrlReferenceBuilder::new(cli.base_url.as_str()));
    let mode = RenderMode::from_params(
        renderer.config(),
        &cli.flavour,
        cli.language.as_deref(),
        cli.images,
        cli.geometry,
    )?;

    let json = renderer.to_json_string(&extract, &mode, cli.pretty)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote extract to {}", path.display());
        },
        None => println!("{}", json),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = match CliConfig::from_args() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        },
    };

    if let Err(e) = run(&cli) {
        eprintln!("Failed to render {}: {}", cli.extract_path.display(), e);
        process::exit(1);
    }
}
