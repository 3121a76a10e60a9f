/*!
 * Millisecond-timed subtitle formats: SRT, WebVTT and SBV.
 *
 * Timecodes are converted at the fixed frame rate with truncation; see
 * [`Timecode::to_srt`](crate::timecode::Timecode::to_srt).
 */

use crate::exporters::Exporter;
use crate::locator::LocatorBlock;

const VTT_HEADER: &str = "WEBVTT";

/// SubRip: numbered cues with `-->` timing lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl Exporter for Srt {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        let mut out = String::new();
        for (i, block) in blocks.iter().enumerate() {
            out.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                i + 1,
                block.time_in.to_srt(),
                block.time_out.to_srt(),
                block.label
            ));
        }
        out
    }
}

/// WebVTT: header then unnumbered cues
#[derive(Debug, Clone, Copy, Default)]
pub struct Vtt;

impl Exporter for Vtt {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        let mut out = format!("{}\n\n", VTT_HEADER);
        for block in blocks {
            out.push_str(&format!(
                "{} --> {}\n{}\n\n",
                block.time_in.to_vtt(),
                block.time_out.to_vtt(),
                block.label
            ));
        }
        out
    }
}

/// YouTube SubViewer: `start , end` timing lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Sbv;

impl Exporter for Sbv {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        let mut out = String::new();
        for block in blocks {
            out.push_str(&format!(
                "{} , {}\n{}\n\n",
                block.time_in.to_sbv(),
                block.time_out.to_sbv(),
                block.label
            ));
        }
        out
    }
}
