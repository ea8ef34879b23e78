use std::fmt;
use std::io::Write;

/// One extracted polling booth.
///
/// All fields are kept as the raw text captured from the source block;
/// `pincode` is derived from `booth_name` and empty when the name holds no
/// six-digit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingBooth {
    pub booth_number: String,
    pub booth_name: String,
    pub pincode: String,
    pub voter_eligibility: String,
    pub polling_areas: String,
}

// Row order is number|name|pincode|eligibility|areas — eligibility before
// areas, even though areas precede it in the source block. Downstream
// consumers depend on this order. Embedded '|' in free-text fields is not
// escaped (known limitation of the format).
impl fmt::Display for PollingBooth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.booth_number,
            self.booth_name,
            self.pincode,
            self.voter_eligibility,
            self.polling_areas
        )
    }
}

/// Write one booth as a PSV row. No header row is ever written.
pub fn write_record<W: Write>(out: &mut W, booth: &PollingBooth) -> std::io::Result<()> {
    writeln!(out, "{booth}")
}

// ── Tests ──
