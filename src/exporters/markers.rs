/*!
 * Marker exports for Avid: a column text list and an XML tree.
 *
 * Both render the same color-aware block data. The text list drops its
 * color column under the eight-color palette; the XML always has a `Color`
 * element, empty when a block has no color.
 */

use crate::exporters::{Exporter, MarkerPalette};
use crate::locator::LocatorBlock;

/// Column separator of the marker text list
const COLUMN_GAP: &str = "  ";

/// Marker list, one trimmed line per block
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerText {
    palette: MarkerPalette,
}

impl MarkerText {
    pub fn new(palette: MarkerPalette) -> Self {
        MarkerText { palette }
    }

    fn line(&self, number: usize, block: &LocatorBlock) -> String {
        let mut columns = vec![format!("{:03}", number), block.time_in.to_string()];
        if self.palette.emits_color() {
            columns.push(block.color_or_empty().to_string());
        }
        columns.push(block.label.clone());
        columns.join(COLUMN_GAP).trim().to_string()
    }
}

impl Exporter for MarkerText {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        blocks
            .iter()
            .enumerate()
            .map(|(i, block)| format!("{}\n", self.line(i + 1, block)))
            .collect()
    }
}

/// Marker XML: a `Markers` root with one `Marker` element per block
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerXml;

impl Exporter for MarkerXml {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Markers>\n");
        for (i, block) in blocks.iter().enumerate() {
            out.push_str("  <Marker>\n");
            let fields = [
                ("Number", (i + 1).to_string()),
                ("In", block.time_in.to_string()),
                ("Out", block.time_out.to_string()),
                ("Color", block.color_or_empty().to_string()),
                ("Text", block.label.clone()),
            ];
            for (name, value) in fields {
                out.push_str(&format!("    <{name}>{}</{name}>\n", escape_xml(&value)));
            }
            out.push_str("  </Marker>\n");
        }
        out.push_str("</Markers>\n");
        out
    }
}

/// Escape the five XML special characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
