use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Render every page of the source PDF to plain text, concatenated in
/// document order with one newline after each page's text.
///
/// This is the boundary with the PDF world: everything downstream sees only
/// lines of text. Any failure here is fatal for the run — there is no
/// partial recovery of a page's content.
pub fn render_pages_to_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    // Rendering a full roll takes a few seconds; show a spinner, not silence.
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} rendering pages ({elapsed})")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .with_context(|| format!("failed to render pages of {}", path.display()))?;

    pb.finish_and_clear();
    info!("Rendered {} pages from {}", pages.len(), path.display());

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }
    Ok(text)
}
