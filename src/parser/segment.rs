use std::sync::LazyLock;

use regex::Regex;

static BOOTH_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s([0-9]+)\s").unwrap());
static PAGE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Page Number : ").unwrap());

/// A booth header starts with the same integer twice: "<n> <n> <text>".
/// The regex crate has no back-references, so capture both and compare the
/// digit strings — they must be character-identical, not just numerically
/// equal.
pub fn is_booth_header(line: &str) -> bool {
    BOOTH_HEADER_RE
        .captures(line)
        .is_some_and(|caps| caps[1] == caps[2])
}

fn is_page_boundary(line: &str) -> bool {
    PAGE_BOUNDARY_RE.is_match(line) || line.starts_with("Date")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Suppressed,
    Accumulating,
}

/// Group raw lines into candidate booth blocks.
///
/// A block runs from one booth-header line to the next (or end of input),
/// with its lines concatenated without a separator. Page-number and date
/// lines injected by the rendering step switch the segmenter to
/// `Suppressed`: they gate appending only, the buffer is kept and emitted
/// once the next header arrives.
pub fn segment<'a, I>(lines: I) -> BlockSegmenter<I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    BlockSegmenter {
        lines: lines.into_iter(),
        state: State::Suppressed,
        buf: String::new(),
        done: false,
    }
}

pub struct BlockSegmenter<I> {
    lines: I,
    state: State,
    buf: String,
    done: bool,
}

impl<'a, I> Iterator for BlockSegmenter<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            if is_page_boundary(line) {
                self.state = State::Suppressed;
                continue;
            }
            if is_booth_header(line) {
                self.state = State::Accumulating;
                if self.buf.is_empty() {
                    self.buf.push_str(line);
                    continue;
                }
                let block = std::mem::take(&mut self.buf);
                self.buf.push_str(line);
                return Some(block);
            }
            if self.state == State::Accumulating {
                self.buf.push_str(line);
            }
        }

        // Input exhausted: flush whatever is buffered, exactly once.
        self.done = true;
        if self.buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buf))
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(text: &str) -> Vec<String> {
        segment(text.lines()).collect()
    }

    #[test]
    fn header_detection() {
        assert!(is_booth_header("5 5 Community Hall"));
        assert!(is_booth_header("120 120 School"));
        assert!(!is_booth_header("12 13 Some Hall"));
        assert!(!is_booth_header("12 123 Some Hall"));
        assert!(!is_booth_header("Community Hall"));
        assert!(!is_booth_header("5 5x Hall"));
    }

    #[test]
    fn no_headers_yields_nothing() {
        assert!(blocks("just some text\nmore text\nPage Number : 1").is_empty());
    }

    #[test]
    fn single_header_with_trailing_lines() {
        let got = blocks("5 5 Community Hall\nmore of the entry\nand more");
        assert_eq!(got, vec!["5 5 Community Hallmore of the entryand more"]);
    }

    #[test]
    fn header_splits_blocks() {
        let got = blocks("5 5 First Hall\n6 6 Second Hall\ntail");
        assert_eq!(got, vec!["5 5 First Hall", "6 6 Second Halltail"]);
    }

    #[test]
    fn consecutive_headers_emit_bare_first_block() {
        let got = blocks("5 5 First\n6 6 Second");
        assert_eq!(got, vec!["5 5 First", "6 6 Second"]);
    }

    #[test]
    fn preamble_before_first_header_is_dropped() {
        let got = blocks("Electoral Roll 2020\nList of Polling Stations\n5 5 Hall");
        assert_eq!(got, vec!["5 5 Hall"]);
    }

    #[test]
    fn boundary_gates_appending_not_the_buffer() {
        // Lines after the boundary are skipped, but what was buffered before
        // it survives and is emitted when the next header arrives.
        let text = "5 5 Hall part one\nPage Number : 1\nrepeated page footer\n6 6 Next";
        let got = blocks(text);
        assert_eq!(got, vec!["5 5 Hall part one", "6 6 Next"]);
    }

    #[test]
    fn date_line_suppresses() {
        let got = blocks("5 5 Hall\nDate: 01-01-2020\ndangling text\n6 6 Next");
        assert_eq!(got, vec!["5 5 Hall", "6 6 Next"]);
    }

    #[test]
    fn final_block_flushed_at_end_of_input() {
        let got = blocks("5 5 Hall\ntrailing detail");
        assert_eq!(got, vec!["5 5 Halltrailing detail"]);
    }

    #[test]
    fn suppressed_buffer_still_flushed_at_end() {
        // A boundary before EOF only stops appending; the buffer itself is
        // still emitted by the end-of-input flush.
        let got = blocks("5 5 Hall\nPage Number : 3\nignored");
        assert_eq!(got, vec!["5 5 Hall"]);
    }

    #[test]
    fn segmentation_is_lazy() {
        let mut iter = segment("5 5 First\n6 6 Second\n7 7 Third".lines());
        assert_eq!(iter.next().as_deref(), Some("5 5 First"));
        assert_eq!(iter.next().as_deref(), Some("6 6 Second"));
        assert_eq!(iter.next().as_deref(), Some("7 7 Third"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
