use log::{debug, warn};

use crate::app_config::Config;
use crate::color_filter::{filter_by_colors, ColorTally};
use crate::errors::ConversionError;
use crate::exporters::{ExportFormat, MarkerPalette};
use crate::locator::LocatorBlock;
use crate::locator_scanner::{LocatorScanner, ScanMode};

// @module: Conversion pipeline from EDL text to one export format

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    // @field: Rendered export
    pub output: String,

    // @field: Blocks that went into the export, after filtering
    pub blocks: Vec<LocatorBlock>,

    // @field: Colors of all scanned blocks, color-aware mode only
    pub color_tally: Option<ColorTally>,
}

/// Scan, filter and export in one call.
///
/// Holds only the request parameters; every call to [`Converter::convert`]
/// is independent.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    mode: ScanMode,
    format: ExportFormat,
    palette: MarkerPalette,
    colors: Option<Vec<String>>,
}

impl Converter {
    pub fn new(mode: ScanMode, format: ExportFormat) -> Self {
        Converter {
            mode,
            format,
            ..Default::default()
        }
    }

    /// Build a converter from the application configuration
    pub fn from_config(config: &Config) -> Self {
        let converter = Self::new(config.scan_mode, config.format).with_palette(config.marker_palette);
        if config.colors.is_empty() {
            converter
        } else {
            converter.with_colors(config.colors.clone())
        }
    }

    pub fn with_palette(mut self, palette: MarkerPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Restrict the export to these colors
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Convert a decoded EDL text
    pub fn convert(&self, text: &str) -> Result<Conversion, ConversionError> {
        let scanned = LocatorScanner::scan(text, self.mode);
        if scanned.is_empty() {
            return Err(ConversionError::NoLocatorsFound);
        }

        let color_tally = self
            .mode
            .is_color_aware()
            .then(|| ColorTally::from_blocks(&scanned));

        let blocks = match (&self.colors, self.mode.is_color_aware()) {
            (Some(colors), true) => {
                let total = scanned.len();
                let kept = filter_by_colors(&scanned, colors.as_slice());
                if kept.is_empty() {
                    return Err(ConversionError::AllBlocksFiltered { total });
                }
                kept
            }
            (Some(_), false) => {
                warn!("Color selection ignored in {} mode", self.mode);
                scanned
            }
            (None, _) => scanned,
        };

        if self.format.uses_color() && !self.mode.is_color_aware() {
            warn!("{} export without colors: scan mode is {}", self.format, self.mode);
        }

        let output = self.format.exporter(self.palette).export(&blocks);
        debug!("Exported {} block(s) as {}", blocks.len(), self.format);

        Ok(Conversion {
            output,
            blocks,
            color_tally,
        })
    }
}
