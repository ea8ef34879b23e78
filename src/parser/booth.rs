use std::sync::LazyLock;

use regex::Regex;

use crate::psv::PollingBooth;

/// Leading "<n> <n> " pair plus everything after it. The duplicated number
/// is validated by comparing the captured digit strings (back-reference
/// semantics: "007 7" does not match even though the values are equal).
static RECORD_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s([0-9]+)\s(.*)$").unwrap());
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{6}").unwrap());

/// First enumerated item of the polling-area list.
const AREA_LIST_MARKER: &str = "1.";
/// Eligibility marker; the grammar requires it to end the block.
const ELIGIBILITY_MARKER: &str = "All Voters";

/// A booth block that failed the record grammar. Carries the raw block text
/// for diagnostic logging; never fatal to the run.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unparseable booth block: {raw}")]
pub struct ParseError {
    pub raw: String,
}

/// Parse one booth block into a [`PollingBooth`].
///
/// The grammar is applied end-to-end and in order: duplicated booth number,
/// booth name up to the first "1." list marker, polling areas from that
/// marker up to the trailing "All Voters" marker, which must be the final
/// text of the block. A block failing any stage is rejected wholesale — no
/// partial records.
pub fn parse(block: &str) -> Result<PollingBooth, ParseError> {
    parse_fields(block).ok_or_else(|| ParseError {
        raw: block.to_string(),
    })
}

fn parse_fields(block: &str) -> Option<PollingBooth> {
    let caps = RECORD_HEADER_RE.captures(block)?;
    if caps[1] != caps[2] {
        return None;
    }
    let rest = &caps[3];

    let list_start = rest.find(AREA_LIST_MARKER)?;
    let booth_name = &rest[..list_start];

    let tail = &rest[list_start..];
    if !tail.ends_with(ELIGIBILITY_MARKER) {
        return None;
    }
    let polling_areas = &tail[..tail.len() - ELIGIBILITY_MARKER.len()];

    Some(PollingBooth {
        booth_number: caps[1].to_string(),
        booth_name: booth_name.to_string(),
        pincode: extract_pincode(booth_name),
        voter_eligibility: ELIGIBILITY_MARKER.to_string(),
        polling_areas: polling_areas.to_string(),
    })
}

/// First contiguous six-digit run in the booth name, or empty.
fn extract_pincode(booth_name: &str) -> String {
    PINCODE_RE
        .find(booth_name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// ── Tests ──
