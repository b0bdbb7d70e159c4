//! ff-bookmarks CLI
//!
//! Convert a Firefox bookmark backup (.jsonlz4 or .json) to HTML.

use anyhow::{Context, Result};
use clap::Parser;
use ff_bookmarks::{detect, Format, Loader, LoaderConfig, Renderer};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ff-bookmarks")]
#[command(version)]
#[command(about = "Converts Firefox bookmark backup files to HTML format")]
#[command(after_help = "Examples:
    ff-bookmarks bookmarks-2025-06-11.jsonlz4
    ff-bookmarks -o my_bookmarks.html bookmarks-2025-06-11.jsonlz4
    ff-bookmarks -o bookmarks.html bookmarks.json")]
struct Cli {
    /// Firefox bookmark backup file (.jsonlz4 or .json)
    input: PathBuf,

    /// Output HTML file (default: input filename with .html extension)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Decompression buffer size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = LoaderConfig::default().max_decompressed_size)]
    max_size: usize,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        anyhow::bail!("Input file '{}' does not exist.", cli.input.display());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let loader = Loader::with_config(LoaderConfig::default().with_max_decompressed_size(cli.max_size));
    let format = detect(&cli.input);
    if format != Format::Unrecognized {
        println!("Processing {}: {}", format.describe(), cli.input.display());
    }
    let tree = loader.load_as(&cli.input, format).context("Conversion failed")?;

    println!("Converting bookmarks to HTML format...");
    Renderer::new()
        .render_to_file(&tree, &output)
        .context("Failed to convert bookmarks")?;

    println!("Successfully converted bookmarks to: {}", output.display());
    Ok(())
}

/// `backup.jsonlz4` -> `backup.html`
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}
