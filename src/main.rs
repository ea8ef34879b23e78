mod parser;
mod psv;
mod render;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eroll_extract",
    about = "Extract polling-booth records from an electoral-roll PDF"
)]
struct Cli {
    /// Electoral-roll PDF to extract from
    input: PathBuf,

    /// Output file (default: <input>.psv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("{} doesn't exist", cli.input.display());
    }
    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.input));

    println!("Extracting from {}", cli.input.display());
    let text = render::render_pages_to_text(&cli.input)?;

    let file = File::create(&output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut out = BufWriter::new(file);
    let stats = parser::extract_booths(&text, &mut out)?;
    out.flush().context("failed to flush output file")?;

    println!(
        "Extracted {} polling booths, with {} errors to file {}",
        stats.booths,
        stats.errors,
        output.display()
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

/// The input file name with ".psv" appended ("roll.pdf" → "roll.pdf.psv").
fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".psv");
    PathBuf::from(name)
}

// ── Tests ──
