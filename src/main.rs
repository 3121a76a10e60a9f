// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use edlsubcap::app_config::{self, Config};
use edlsubcap::app_controller::{Controller, FileOutcome};
use edlsubcap::color_filter::ColorTally;
use edlsubcap::exporters::{ExportFormat, MarkerPalette};
use edlsubcap::file_utils::FileManager;
use edlsubcap::locator_scanner::{LocatorScanner, ScanMode};
use edlsubcap::ConversionError;

/// CLI Wrapper for ScanMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliScanMode {
    FreeComment,
    ColorComment,
    CodeExtraction,
}

impl From<CliScanMode> for ScanMode {
    fn from(cli_mode: CliScanMode) -> Self {
        match cli_mode {
            CliScanMode::FreeComment => ScanMode::FreeComment,
            CliScanMode::ColorComment => ScanMode::ColorComment,
            CliScanMode::CodeExtraction => ScanMode::CodeExtraction,
        }
    }
}

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Subcap,
    MarkerText,
    MarkerXml,
    ScriptSync,
    Srt,
    Vtt,
    Sbv,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Subcap => ExportFormat::SubCap,
            CliExportFormat::MarkerText => ExportFormat::MarkerText,
            CliExportFormat::MarkerXml => ExportFormat::MarkerXml,
            CliExportFormat::ScriptSync => ExportFormat::ScriptSync,
            CliExportFormat::Srt => ExportFormat::Srt,
            CliExportFormat::Vtt => ExportFormat::Vtt,
            CliExportFormat::Sbv => ExportFormat::Sbv,
        }
    }
}

/// CLI Wrapper for MarkerPalette to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMarkerPalette {
    Eight,
    Sixteen,
}

impl From<CliMarkerPalette> for MarkerPalette {
    fn from(cli_palette: CliMarkerPalette) -> Self {
        match cli_palette {
            CliMarkerPalette::Eight => MarkerPalette::Eight,
            CliMarkerPalette::Sixteen => MarkerPalette::Sixteen,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert EDL locators into a subtitle or marker file
    Convert(ConvertArgs),

    /// Show how often each locator color occurs
    Colors {
        /// Input EDL file
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the scanned locator blocks as JSON
    Scan {
        /// Input EDL file
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// How locator lines are read
        #[arg(short, long, value_enum, default_value = "color-comment")]
        mode: CliScanMode,
    },

    /// Generate shell completions for edlsubcap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input EDL file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output format
    #[arg(short = 't', long, value_enum)]
    format: Option<CliExportFormat>,

    /// How locator lines are read
    #[arg(short, long, value_enum)]
    mode: Option<CliScanMode>,

    /// Only export locators of these colors (comma separated)
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Marker color palette
    #[arg(long, value_enum)]
    palette: Option<CliMarkerPalette>,

    /// Directory for exported files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the export instead of writing a file
    #[arg(long, conflicts_with = "output_dir")]
    stdout: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// edlsubcap - EDL locators to subtitles and markers
#[derive(Parser, Debug)]
#[command(name = "edlsubcap")]
#[command(version)]
#[command(about = "Convert EDL locator comments into subtitle and marker files")]
#[command(long_about = "edlsubcap reads the * LOC: comments of an Edit Decision List and exports them
with the SRC IN/OUT timecodes of the event they belong to.

EXAMPLES:
    edlsubcap convert cut.edl                         # SubCap export next to the EDL
    edlsubcap convert -t srt cut.edl                  # SRT subtitles (25 fps)
    edlsubcap convert -t marker-text --colors red,yellow cut.edl
    edlsubcap convert -m code-extraction -t vtt cut.edl
    edlsubcap convert --stdout -t sbv cut.edl         # Print instead of writing
    edlsubcap convert /projects/edls/                 # Convert every .edl in a folder
    edlsubcap colors cut.edl                          # Color frequency table
    edlsubcap completions bash > edlsubcap.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();
    let cli_level: Option<app_config::LogLevel> = cli.log_level.map(Into::into);

    // Apply the command-line level before anything is loaded
    if let Some(level) = &cli_level {
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Convert(args) => run_convert(args, &cli.config_path, cli_level),
        Commands::Colors { input_file, json } => {
            apply_configured_log_level(&cli.config_path, cli_level)?;
            run_colors(&input_file, json)
        }
        Commands::Scan { input_file, mode } => {
            apply_configured_log_level(&cli.config_path, cli_level)?;
            run_scan(&input_file, mode.into())
        }
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "edlsubcap", &mut std::io::stdout());
            Ok(())
        }
    }
}

// @sets: Max log level from the CLI, else from an existing config file
fn apply_configured_log_level(config_path: &str, cli_level: Option<app_config::LogLevel>) -> Result<()> {
    let config = Config::load_if_exists(config_path)?.unwrap_or_default();
    log::set_max_level(config.effective_log_level(cli_level).to_level_filter());
    Ok(())
}

fn run_convert(options: ConvertArgs, config_path: &str, cli_level: Option<app_config::LogLevel>) -> Result<()> {
    let mut config = Config::load_or_create(config_path)?;

    // Override config with CLI options if provided
    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }
    if let Some(mode) = &options.mode {
        config.scan_mode = mode.clone().into();
    }
    if let Some(colors) = &options.colors {
        config.colors = colors.clone();
    }
    if let Some(palette) = &options.palette {
        config.marker_palette = palette.clone().into();
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = Some(output_dir.clone());
    }
    config.log_level = config.effective_log_level(cli_level);
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    if FileManager::dir_exists(&options.input_path) {
        if options.stdout {
            return Err(anyhow!("--stdout needs a single input file"));
        }
        controller.run_folder(&options.input_path, options.force_overwrite)?;
        return Ok(());
    }

    if !FileManager::file_exists(&options.input_path) {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }
    if !FileManager::is_edl_file(&options.input_path) {
        warn!("{:?} does not look like an EDL, converting anyway", options.input_path);
    }

    if options.stdout {
        return match controller.convert_file(&options.input_path)? {
            Ok(conversion) => {
                print!("{}", conversion.output);
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                Ok(())
            }
        };
    }

    let output_dir = controller.output_dir_for(&options.input_path);
    match controller.run(&options.input_path, &output_dir, options.force_overwrite)? {
        FileOutcome::Written(path) => info!("Success: {:?}", path),
        FileOutcome::Skipped(_) => {}
        FileOutcome::NoLocators => warn!("{}", ConversionError::NoLocatorsFound),
        FileOutcome::AllFiltered => warn!("Nothing left to export after color selection"),
    }
    Ok(())
}

fn run_colors(input_file: &Path, json: bool) -> Result<()> {
    let text = FileManager::read_edl(input_file)?;
    let blocks = LocatorScanner::scan(&text, ScanMode::ColorComment);
    let tally = ColorTally::from_blocks(&blocks);

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
        return Ok(());
    }

    if tally.is_empty() {
        warn!("{}", ConversionError::NoLocatorsFound);
        return Ok(());
    }

    for entry in &tally.entries {
        println!("{:<12} {}", entry.color, entry.count);
    }
    Ok(())
}

fn run_scan(input_file: &Path, mode: ScanMode) -> Result<()> {
    let text = FileManager::read_edl(input_file)?;
    let blocks = LocatorScanner::scan(&text, mode);
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}
