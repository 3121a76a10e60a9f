use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::converter::{Conversion, Converter};
use crate::errors::ConversionError;
use crate::file_utils::FileManager;

// @module: Application controller for EDL conversion

/// Result of converting one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Export written to this path
    Written(PathBuf),
    /// Output already exists and overwrite was not forced
    Skipped(PathBuf),
    /// No locator comments in the input
    NoLocators,
    /// Every locator was excluded by the color selection
    AllFiltered,
}

/// Totals of a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub written: usize,
    pub skipped: usize,
    pub empty: usize,
    pub failed: usize,
}

/// Main application controller for EDL conversion
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Converter built from the configuration
    converter: Converter,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let converter = Converter::from_config(&config);
        Ok(Self { config, converter })
    }

    /// Convert a text already in memory
    pub fn convert_text(&self, text: &str) -> Result<Conversion, ConversionError> {
        self.converter.convert(text)
    }

    /// Convert a file, returning the conversion without writing anything
    pub fn convert_file<P: AsRef<Path>>(&self, input_file: P) -> Result<Result<Conversion, ConversionError>> {
        let input_file = input_file.as_ref();
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        let text = FileManager::read_edl(input_file)?;
        Ok(self.convert_text(&text))
    }

    /// Path the export of `input_file` is written to
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        let format = self.converter.format();
        FileManager::generate_output_path(input_file, output_dir, format.as_str(), format.extension())
    }

    /// Convert one EDL file and write the export next to it or into `output_dir`
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(FileOutcome::Skipped(output_path));
        }

        let conversion = match self.convert_file(input_file)? {
            Ok(conversion) => conversion,
            Err(ConversionError::NoLocatorsFound) => {
                warn!("No matching * LOC: comments found in {:?}", input_file);
                return Ok(FileOutcome::NoLocators);
            }
            Err(e @ ConversionError::AllBlocksFiltered { .. }) => {
                warn!("{:?}: {}", input_file, e);
                return Ok(FileOutcome::AllFiltered);
            }
        };

        FileManager::ensure_dir(output_dir)?;
        FileManager::write_to_file(&output_path, &conversion.output)?;
        info!(
            "Wrote {} locator(s) to {:?}",
            conversion.blocks.len(),
            output_path
        );

        Ok(FileOutcome::Written(output_path))
    }

    /// Convert every `.edl` file below a directory
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        let files = FileManager::find_files(input_dir, "edl")?;
        info!(
            "Found {} EDL file(s) in {:?}, scanning in {} mode",
            files.len(),
            input_dir,
            self.converter.mode()
        );

        let progress_bar = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let mut summary = FolderSummary::default();
        for file in &files {
            progress_bar.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = self.output_dir_for(file);
            match self.run(file, &output_dir, force_overwrite) {
                Ok(FileOutcome::Written(_)) => summary.written += 1,
                Ok(FileOutcome::Skipped(_)) => summary.skipped += 1,
                Ok(FileOutcome::NoLocators | FileOutcome::AllFiltered) => summary.empty += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", file, e);
                    summary.failed += 1;
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "Finished: {} written, {} skipped, {} without locators, {} failed",
            summary.written, summary.skipped, summary.empty, summary.failed
        );
        Ok(summary)
    }

    /// Configured output directory, else the input's own directory
    pub fn output_dir_for(&self, input_file: &Path) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => input_file.parent().unwrap_or(Path::new(".")).to_path_buf(),
        }
    }
}
