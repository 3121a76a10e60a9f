/*!
 * Frame-accurate timecodes as found in EDL text.
 *
 * A timecode is four two-digit fields `HH:MM:SS:FF`. Values are taken
 * verbatim from the source text and never range-checked: a frames field of
 * 25 or more is legal here and flows unchanged through the conversions.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Assumed frame rate for all millisecond conversions
pub const FRAME_RATE: u32 = 25;

// @const: Timecode token anywhere in a line
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2}").unwrap()
});

// @const: Whole-string timecode
static EXACT_TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{2})$").unwrap()
});

/// A position in `HH:MM:SS:FF` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Timecode {
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Timecode {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Find every timecode token on a line, in order of appearance
    pub fn find_all(line: &str) -> Vec<Timecode> {
        TIMECODE_REGEX
            .find_iter(line)
            .filter_map(|m| m.as_str().parse().ok())
            .collect()
    }

    /// Frames expressed as milliseconds at the fixed frame rate, truncated
    pub fn frame_millis(&self) -> u32 {
        self.frames * 1000 / FRAME_RATE
    }

    /// Format as `HH:MM:SS,mmm`
    pub fn to_srt(&self) -> String {
        self.format_with_millis(',')
    }

    /// Format as `HH:MM:SS.mmm`
    pub fn to_vtt(&self) -> String {
        self.format_with_millis('.')
    }

    /// The SRT form with its comma swapped for a dot
    pub fn to_sbv(&self) -> String {
        self.to_srt().replace(',', ".")
    }

    fn format_with_millis(&self, separator: char) -> String {
        format!(
            "{:02}:{:02}:{:02}{}{:03}",
            self.hours,
            self.minutes,
            self.seconds,
            separator,
            self.frame_millis()
        )
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for Timecode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = EXACT_TIMECODE_REGEX
            .captures(s)
            .ok_or_else(|| anyhow!("Invalid timecode format: {}", s))?;

        let field = |i: usize| -> Result<u32> {
            caps[i]
                .parse()
                .map_err(|e| anyhow!("Invalid timecode field in {}: {}", s, e))
        };

        Ok(Timecode::new(field(1)?, field(2)?, field(3)?, field(4)?))
    }
}
