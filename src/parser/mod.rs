pub mod booth;
pub mod segment;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::warn;

use crate::psv;

/// Counts reported after a full extraction run.
pub struct ExtractStats {
    pub booths: usize,
    pub errors: usize,
}

/// Two-pass pipeline: rendered text → booth blocks → PSV records.
///
/// Strictly sequential: each block is fully parsed and written before the
/// next one is pulled from the segmenter. An unparseable block is logged
/// with its raw text and counted, never fatal; write failures propagate.
pub fn extract_booths<W: Write>(text: &str, out: &mut W) -> Result<ExtractStats> {
    let mut stats = ExtractStats {
        booths: 0,
        errors: 0,
    };

    for block in segment::segment(text.lines()) {
        match booth::parse(&block) {
            Ok(record) => {
                psv::write_record(out, &record).context("failed to write output record")?;
                stats.booths += 1;
            }
            Err(err) => {
                warn!("ERROR>>>{}", err.raw);
                stats.errors += 1;
            }
        }
    }

    Ok(stats)
}

// ── Tests ──
