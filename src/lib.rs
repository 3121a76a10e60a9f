/*!
 * # edlsubcap - EDL locators to subtitle and marker exports
 *
 * A Rust library that reads the locator comments (`* LOC:` lines) of an
 * Edit Decision List and turns them into timed subtitle or marker files.
 *
 * ## Features
 *
 * - Recover (SRC IN, SRC OUT, comment) triples from CMX-style EDL text
 * - Three ways to read a locator:
 *   - free comment text
 *   - color token plus comment
 *   - structured project/scene code (`ABC_123_4567`)
 * - Color frequency table and color-based selection
 * - Exports:
 *   - Avid SubCap
 *   - Avid marker text (8 or 16 colors) and marker XML
 *   - ScriptSync text
 *   - SRT, WebVTT and SBV subtitles (25 fps)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: `HH:MM:SS:FF` values and their millisecond renderings
 * - `locator`: The locator block entity
 * - `locator_scanner`: Line scanner recovering locator blocks
 * - `color_filter`: Color statistics and selection
 * - `exporters`: One exporter per output format
 * - `converter`: Scan, filter and export in one call
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations and text decoding
 * - `app_controller`: File and folder runs for the CLI
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod color_filter;
pub mod converter;
pub mod errors;
pub mod exporters;
pub mod file_utils;
pub mod locator;
pub mod locator_scanner;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use color_filter::{filter_by_colors, ColorTally};
pub use converter::{Conversion, Converter};
pub use errors::{AppError, ConversionError};
pub use exporters::{ExportFormat, Exporter, MarkerPalette};
pub use locator::LocatorBlock;
pub use locator_scanner::{LocatorScanner, ScanMode};
pub use timecode::Timecode;
