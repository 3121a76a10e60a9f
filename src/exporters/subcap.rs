use crate::exporters::Exporter;
use crate::locator::LocatorBlock;

const BEGIN_MARKER: &str = "<begin subtitles>";
const END_MARKER: &str = "<end subtitles>";

/// Avid SubCap subtitle text.
///
/// Sections are newline-terminated and then joined with a newline, which
/// leaves one blank line after the begin marker and after every caption.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubCap;

impl Exporter for SubCap {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        let mut sections = Vec::with_capacity(blocks.len() + 2);
        sections.push(format!("{}\n", BEGIN_MARKER));
        for block in blocks {
            sections.push(format!("{} {}\n{}\n", block.time_in, block.time_out, block.label));
        }
        sections.push(format!("{}\n", END_MARKER));
        sections.join("\n")
    }
}
