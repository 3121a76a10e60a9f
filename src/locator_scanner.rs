/*!
 * Single-pass scanner that recovers locator blocks from EDL text.
 *
 * The scanner walks the text line by line holding at most one pending
 * `(time_in, time_out)` pair:
 * - a line with four or more timecodes replaces the pending pair with its
 *   last two timecodes
 * - a `*LOC:` / `* LOC:` line consumes the pending pair if its label can be
 *   extracted
 *
 * Lines may end in CRLF, a bare CR or LF.
 *
 * How the label is extracted, and whether a failed extraction still
 * consumes the pair, depends on the [`ScanMode`].
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::locator::LocatorBlock;
use crate::timecode::Timecode;

// @const: Locator comment with timecode, one token and the trailing text
static LOC_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\* ?LOC:\s*[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2}\s+(\S+)\s+(.*)").unwrap()
});

// @const: Structured project/scene code
static CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9]{3}_[0-9]{3}_[0-9]{4}").unwrap()
});

// @const: Line break in any of the CRLF, CR-only or LF conventions
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").unwrap()
});

/// Minimum number of timecodes a line needs to count as an event line
const EVENT_TIMECODE_COUNT: usize = 4;

/// How locator lines are turned into labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Label is the text after the color token; the color is dropped
    FreeComment,
    /// Color token is kept as the block color, the rest is the label
    #[default]
    ColorComment,
    /// Label is the first structured code found on the line
    CodeExtraction,
}

impl ScanMode {
    // @returns: Lowercase mode identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeComment => "free-comment",
            Self::ColorComment => "color-comment",
            Self::CodeExtraction => "code-extraction",
        }
    }

    /// Whether blocks produced in this mode carry a color
    pub fn is_color_aware(&self) -> bool {
        matches!(self, Self::ColorComment)
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "free-comment" | "comment" => Ok(Self::FreeComment),
            "color-comment" | "color" => Ok(Self::ColorComment),
            "code-extraction" | "code" => Ok(Self::CodeExtraction),
            _ => Err(anyhow!("Invalid scan mode: {}", s)),
        }
    }
}

/// Result of trying to read a label from a locator line
#[derive(Debug, PartialEq, Eq)]
enum Extraction {
    /// A label was found
    Label { color: Option<String>, label: String },
    /// Nothing usable; the pending pair is kept
    Keep,
    /// Nothing usable, but the pending pair is spent anyway
    Discard,
}

/// Label extraction strategy selected by [`ScanMode`]
#[derive(Debug, Clone, Copy)]
enum LabelExtractor {
    Comment { keep_color: bool },
    Code,
}

impl LabelExtractor {
    fn for_mode(mode: ScanMode) -> Self {
        match mode {
            ScanMode::FreeComment => Self::Comment { keep_color: false },
            ScanMode::ColorComment => Self::Comment { keep_color: true },
            ScanMode::CodeExtraction => Self::Code,
        }
    }

    fn extract(&self, line: &str) -> Extraction {
        match *self {
            Self::Comment { keep_color } => match LOC_COMMENT_REGEX.captures(line) {
                Some(caps) => Extraction::Label {
                    color: keep_color.then(|| caps[1].to_uppercase()),
                    label: caps[2].trim().to_string(),
                },
                None => Extraction::Keep,
            },
            Self::Code => match CODE_REGEX.find(line) {
                Some(code) => Extraction::Label {
                    color: None,
                    label: code.as_str().to_string(),
                },
                None => Extraction::Discard,
            },
        }
    }
}

/// Scanner state between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerState {
    /// No event timecodes waiting for a locator
    #[default]
    Empty,
    /// SRC IN/OUT of the most recent event line
    Pending { time_in: Timecode, time_out: Timecode },
}

/// Line scanner producing [`LocatorBlock`]s in encounter order
#[derive(Debug, Clone)]
pub struct LocatorScanner {
    extractor: LabelExtractor,
    state: ScannerState,
    blocks: Vec<LocatorBlock>,
}

impl LocatorScanner {
    pub fn new(mode: ScanMode) -> Self {
        LocatorScanner {
            extractor: LabelExtractor::for_mode(mode),
            state: ScannerState::Empty,
            blocks: Vec::new(),
        }
    }

    /// Scan a complete EDL text
    pub fn scan(text: &str, mode: ScanMode) -> Vec<LocatorBlock> {
        let mut scanner = Self::new(mode);
        for line in LINE_BREAK_REGEX.split(text) {
            scanner.feed_line(line);
        }
        let blocks = scanner.finish();
        debug!("Scanned {} locator block(s) in {} mode", blocks.len(), mode);
        blocks
    }

    /// Current state, mostly useful for tests
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Process one line of input
    pub fn feed_line(&mut self, line: &str) {
        let timecodes = Timecode::find_all(line);
        if timecodes.len() >= EVENT_TIMECODE_COUNT {
            let n = timecodes.len();
            self.state = ScannerState::Pending {
                time_in: timecodes[n - 2],
                time_out: timecodes[n - 1],
            };
        }

        if !is_locator_line(line) {
            return;
        }

        let ScannerState::Pending { time_in, time_out } = self.state else {
            trace!("Locator line without pending event timecodes: {}", line);
            return;
        };

        match self.extractor.extract(line) {
            Extraction::Label { color, label } => {
                self.blocks.push(LocatorBlock {
                    time_in,
                    time_out,
                    color,
                    label,
                });
                self.state = ScannerState::Empty;
            }
            Extraction::Discard => {
                trace!("No code on locator line, dropping pending pair: {}", line);
                self.state = ScannerState::Empty;
            }
            Extraction::Keep => {
                trace!("Unparsable locator line skipped: {}", line);
            }
        }
    }

    /// End of input; an unconsumed pending pair is dropped
    pub fn finish(self) -> Vec<LocatorBlock> {
        self.blocks
    }
}

/// Whether a line carries a `*LOC:` or `* LOC:` marker, in any case
pub fn is_locator_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper.contains("*LOC:") || upper.contains("* LOC:")
}
