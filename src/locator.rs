use serde::Serialize;

use crate::timecode::Timecode;

// @module: Locator blocks recovered from EDL text

/// One locator, bound to the source in/out of the event it annotates.
///
/// `time_in` and `time_out` are stored as found; a reversed interval is kept
/// as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatorBlock {
    // @field: SRC IN of the annotated event
    #[serde(serialize_with = "serialize_timecode")]
    pub time_in: Timecode,

    // @field: SRC OUT of the annotated event
    #[serde(serialize_with = "serialize_timecode")]
    pub time_out: Timecode,

    // @field: Uppercased color token, color-aware mode only
    pub color: Option<String>,

    // @field: Comment text or extracted code
    pub label: String,
}

impl LocatorBlock {
    /// Creates a block without a color
    pub fn new(time_in: Timecode, time_out: Timecode, label: impl Into<String>) -> Self {
        LocatorBlock {
            time_in,
            time_out,
            color: None,
            label: label.into(),
        }
    }

    /// Creates a block carrying a color; the color is uppercased
    pub fn with_color(
        time_in: Timecode,
        time_out: Timecode,
        color: &str,
        label: impl Into<String>,
    ) -> Self {
        LocatorBlock {
            time_in,
            time_out,
            color: Some(color.to_uppercase()),
            label: label.into(),
        }
    }

    /// Color token or an empty string
    pub fn color_or_empty(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }
}

fn serialize_timecode<S: serde::Serializer>(tc: &Timecode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(tc)
}
