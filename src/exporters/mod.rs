/*!
 * Output formats for locator blocks.
 *
 * Every format is a stateless [`Exporter`] turning an ordered slice of
 * [`LocatorBlock`]s into a single string. All exporters accept an empty
 * slice and then produce the bare shell of their format.
 *
 * # Architecture
 *
 * - `subcap`: Avid SubCap text
 * - `timed_text`: SRT, WebVTT and SBV subtitles
 * - `markers`: Avid marker text and marker XML
 * - `script_sync`: label-only text for ScriptSync
 */

pub mod markers;
pub mod script_sync;
pub mod subcap;
pub mod timed_text;

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::locator::LocatorBlock;

pub use markers::{MarkerText, MarkerXml};
pub use script_sync::ScriptSync;
pub use subcap::SubCap;
pub use timed_text::{Sbv, Srt, Vtt};

/// Renders a block sequence into one output format
pub trait Exporter {
    fn export(&self, blocks: &[LocatorBlock]) -> String;
}

/// Color set of the marker formats.
///
/// Only the sixteen-color palette writes the color column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPalette {
    Eight,
    #[default]
    Sixteen,
}

impl MarkerPalette {
    pub fn emits_color(&self) -> bool {
        matches!(self, Self::Sixteen)
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    SubCap,
    MarkerText,
    MarkerXml,
    ScriptSync,
    Srt,
    Vtt,
    Sbv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 7] = [
        Self::SubCap,
        Self::MarkerText,
        Self::MarkerXml,
        Self::ScriptSync,
        Self::Srt,
        Self::Vtt,
        Self::Sbv,
    ];

    // @returns: Lowercase format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubCap => "subcap",
            Self::MarkerText => "marker-text",
            Self::MarkerXml => "marker-xml",
            Self::ScriptSync => "script-sync",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Sbv => "sbv",
        }
    }

    /// File extension of the exported file
    pub fn extension(&self) -> &'static str {
        match self {
            Self::SubCap | Self::MarkerText | Self::ScriptSync => "txt",
            Self::MarkerXml => "xml",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Sbv => "sbv",
        }
    }

    /// Whether the format shows block colors
    pub fn uses_color(&self) -> bool {
        matches!(self, Self::MarkerText | Self::MarkerXml)
    }

    /// Build the exporter for this format
    pub fn exporter(&self, palette: MarkerPalette) -> Box<dyn Exporter> {
        match self {
            Self::SubCap => Box::new(SubCap),
            Self::MarkerText => Box::new(MarkerText::new(palette)),
            Self::MarkerXml => Box::new(MarkerXml),
            Self::ScriptSync => Box::new(ScriptSync),
            Self::Srt => Box::new(Srt),
            Self::Vtt => Box::new(Vtt),
            Self::Sbv => Box::new(Sbv),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| anyhow!("Invalid export format: {}", s))
    }
}
