mod config;
mod error;
mod model;
mod parser;
mod reader;
mod render;
mod source;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::{Overrides, Settings};
use crate::error::{ConfigError, Error, Result};
use crate::model::Endpoint;
use crate::render::Format;

#[derive(Parser)]
#[command(name = "apidoc", about = "Generate API docs from apidoc(...) comment blocks in Go sources")]
struct Cli {
    /// Write every endpoint into this file instead of one document per input
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Abort on the first endpoint that fails validation (`--strict` or `--strict=<bool>`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    strict: Option<bool>,
    /// Output format: markdown, html or json (default: markdown)
    #[arg(short, long)]
    format: Option<String>,
    /// Go source files to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load(&Overrides {
        strict: cli.strict,
        format: cli.format.as_deref(),
        out: cli.out.as_deref(),
    })?;
    if settings.strict {
        info!("strict mode: validation errors are fatal");
    }
    check_inputs(&cli.inputs)?;

    let package = std::env::var("GOPACKAGE").ok().filter(|p| !p.is_empty());
    let ext = settings.format.extension();

    let mut gathered = Vec::new();
    for input in &cli.inputs {
        let groups = source::load_file(input)?;
        let endpoints = reader::read_docs(&groups, settings.strict)
            .with_context(|| format!("reading {}", input.display()))?;
        info!(file = %input.display(), endpoints = endpoints.len(), "read apidoc blocks");

        if settings.out.is_some() {
            gathered.extend(endpoints);
        } else if !endpoints.is_empty() {
            let path = derive_output_path(input, ext, package.as_deref());
            write_docs(&path, settings.format, &endpoints)?;
        }
    }

    if let Some(out) = &settings.out {
        if !gathered.is_empty() {
            write_docs(out, settings.format, &gathered)?;
        }
    }

    info!("done in {:.2}s", t0.elapsed().as_secs_f64());
    Ok(())
}

/// Every input must be a Go source file, checked before any file is read.
fn check_inputs(inputs: &[PathBuf]) -> Result<(), ConfigError> {
    match inputs
        .iter()
        .find(|p| p.extension().map_or(true, |e| e != "go"))
    {
        Some(bad) => Err(ConfigError::InvalidInput(bad.clone())),
        None => Ok(()),
    }
}

/// `dir/[pkg_]stem_apidoc.ext`, next to the input.
fn derive_output_path(input: &Path, ext: &str, package: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match package {
        Some(pkg) => format!("{pkg}_{stem}_apidoc.{ext}"),
        None => format!("{stem}_apidoc.{ext}"),
    };
    input.with_file_name(name)
}

fn write_docs(path: &Path, format: Format, endpoints: &[Endpoint]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    render::render(format, endpoints, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    info!(path = %path.display(), endpoints = endpoints.len(), "wrote docs");
    Ok(())
}

// ── Tests ──
