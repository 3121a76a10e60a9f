use crate::exporters::Exporter;
use crate::locator::LocatorBlock;

/// Label text only, one block per line, no timing
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSync;

impl Exporter for ScriptSync {
    fn export(&self, blocks: &[LocatorBlock]) -> String {
        blocks.iter().map(|b| format!("{}\n", b.label)).collect()
    }
}
