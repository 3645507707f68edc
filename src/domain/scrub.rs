//! Period scrubbing of dumped text
//!
//! Lines starting with the `'TP` marker belong to a trading period. Those whose
//! text contains a selected tag are kept, the rest are dropped. Every other line
//! passes through. When a run of kept tagged lines is followed by an untagged
//! line, the last tagged line has its trailing comma rewritten to `/;` so the
//! shortened list is still terminated. That decision needs the next line, so
//! one output line is always held back.
//!
//! Lines are handled as raw bytes. Markers, tags and delimiters are ASCII, and
//! label bytes in other encodings are copied through untouched.

use crate::domain::TagSet;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

/// Marker that starts every tagged line
pub const TAG_MARKER: &str = "'TP";

/// Replacement for the comma of the last kept tagged line in a region
pub const CLOSING_DELIMITER: &str = "/;";

/// How the comma of a line closing a tagged region is rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommaRepair {
    /// Rewrite the comma ending the line, if there is one
    #[default]
    Trailing,
    /// Rewrite every comma on the line
    All,
}

impl CommaRepair {
    /// Apply the repair, returning the rewritten line and whether it changed
    pub fn apply(self, line: &[u8]) -> (Vec<u8>, bool) {
        match self {
            CommaRepair::Trailing => {
                let content_end = line
                    .iter()
                    .rposition(|b| !b.is_ascii_whitespace())
                    .map_or(0, |pos| pos + 1);
                if content_end == 0 || line[content_end - 1] != b',' {
                    return (line.to_vec(), false);
                }

                let mut repaired = Vec::with_capacity(line.len() + 1);
                repaired.extend_from_slice(&line[..content_end - 1]);
                repaired.extend_from_slice(CLOSING_DELIMITER.as_bytes());
                repaired.extend_from_slice(&line[content_end..]);
                (repaired, true)
            }
            CommaRepair::All => {
                if !line.contains(&b',') {
                    return (line.to_vec(), false);
                }

                let mut repaired = Vec::with_capacity(line.len() + 4);
                for &byte in line {
                    if byte == b',' {
                        repaired.extend_from_slice(CLOSING_DELIMITER.as_bytes());
                    } else {
                        repaired.push(byte);
                    }
                }
                (repaired, true)
            }
        }
    }
}

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Tagged line containing a selected tag
    Kept,
    /// Tagged line for an unselected period
    Dropped,
    /// Any other line
    Untagged,
}

/// Classify a line against the selected tags
pub fn classify(line: impl AsRef<[u8]>, tags: &TagSet) -> LineClass {
    let line = line.as_ref();
    if line.starts_with(TAG_MARKER.as_bytes()) {
        if tags.matches(line) {
            LineClass::Kept
        } else {
            LineClass::Dropped
        }
    } else {
        LineClass::Untagged
    }
}

/// Class of the most recently kept line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    Tagged,
    #[default]
    Untagged,
}

/// Line counters collected while scrubbing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrubStats {
    pub kept_tagged: usize,
    pub dropped: usize,
    pub untagged: usize,
    pub repairs: usize,
}

/// Incremental scrubber holding one pending output line
#[derive(Debug)]
pub struct Scrubber<'a> {
    tags: &'a TagSet,
    repair: CommaRepair,
    state: FilterState,
    pending: Option<Vec<u8>>,
    stats: ScrubStats,
}

impl<'a> Scrubber<'a> {
    pub fn new(tags: &'a TagSet) -> Self {
        Self::with_repair(tags, CommaRepair::default())
    }

    pub fn with_repair(tags: &'a TagSet, repair: CommaRepair) -> Self {
        Scrubber {
            tags,
            repair,
            state: FilterState::Untagged,
            pending: None,
            stats: ScrubStats::default(),
        }
    }

    /// Feed the next raw line, returning the line that becomes final.
    pub fn push_bytes(&mut self, line: &[u8]) -> Option<Vec<u8>> {
        let next_state = match classify(line, self.tags) {
            LineClass::Dropped => {
                self.stats.dropped += 1;
                return None;
            }
            LineClass::Kept => {
                self.stats.kept_tagged += 1;
                FilterState::Tagged
            }
            LineClass::Untagged => {
                self.stats.untagged += 1;
                FilterState::Untagged
            }
        };

        let closes_region =
            self.state == FilterState::Tagged && next_state == FilterState::Untagged;
        let emitted = self.pending.take().map(|previous| {
            if closes_region {
                let (repaired, changed) = self.repair.apply(&previous);
                if changed {
                    self.stats.repairs += 1;
                }
                repaired
            } else {
                previous
            }
        });

        self.pending = Some(line.to_vec());
        self.state = next_state;
        emitted
    }

    /// Feed the next text line, returning the line that becomes final.
    pub fn push(&mut self, line: &str) -> Option<String> {
        self.push_bytes(line.as_bytes()).map(into_text)
    }

    /// Flush the pending raw line unchanged
    pub fn finish_bytes(&mut self) -> Option<Vec<u8>> {
        self.state = FilterState::Untagged;
        self.pending.take()
    }

    /// Flush the pending text line unchanged
    pub fn finish(&mut self) -> Option<String> {
        self.finish_bytes().map(into_text)
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn stats(&self) -> ScrubStats {
        self.stats
    }
}

// Repairs only swap ASCII bytes, so text fed through `push` stays UTF-8.
fn into_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Scrub a sequence of lines, keeping only the selected periods
pub fn scrub<I>(lines: I, tags: &TagSet) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    scrub_with(lines, tags, CommaRepair::default())
}

/// Like [`scrub`] with an explicit repair policy
pub fn scrub_with<I>(lines: I, tags: &TagSet, repair: CommaRepair) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scrubber = Scrubber::with_repair(tags, repair);
    let mut output = Vec::new();
    for line in lines {
        if let Some(ready) = scrubber.push(line.as_ref()) {
            output.push(ready);
        }
    }
    output.extend(scrubber.finish());
    output
}

/// Stream raw text through the scrubber, keeping each line's terminator and
/// every byte the repair does not touch
pub fn scrub_stream<R, W>(
    mut reader: R,
    mut writer: W,
    tags: &TagSet,
    repair: CommaRepair,
) -> io::Result<ScrubStats>
where
    R: BufRead,
    W: Write,
{
    let mut scrubber = Scrubber::with_repair(tags, repair);
    let mut raw: Vec<u8> = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }

        if let Some(ready) = scrubber.push_bytes(&raw) {
            writer.write_all(&ready)?;
        }
    }

    if let Some(last) = scrubber.finish_bytes() {
        writer.write_all(&last)?;
    }
    writer.flush()?;

    Ok(scrubber.stats())
}
