/*!
 * End-to-end tests from EDL text to exported output
 */

use anyhow::Result;
use edlsubcap::converter::Converter;
use edlsubcap::errors::ConversionError;
use edlsubcap::exporters::{ExportFormat, MarkerPalette};
use edlsubcap::file_utils::FileManager;
use edlsubcap::locator_scanner::ScanMode;
use crate::common;

/// Test the single-locator SRT example
#[test]
fn test_convert_withWorkedExample_shouldProduceExactSrt() {
    let edl = "001  AX  V  C  01:00:00:00 01:00:02:00 10:00:05:00 10:00:07:12\n\
               * LOC: 10:00:06:00 YELLOW HELLO WORLD\n";
    let conversion = Converter::new(ScanMode::ColorComment, ExportFormat::Srt)
        .convert(edl)
        .unwrap();

    assert_eq!(conversion.output, "1\n10:00:05,000 --> 10:00:07,480\nHELLO WORLD\n\n");
    assert_eq!(conversion.blocks.len(), 1);
    assert_eq!(conversion.blocks[0].color.as_deref(), Some("YELLOW"));
}

/// Test SubCap output for the shared sample
#[test]
fn test_convert_withSampleToSubcap_shouldListAllLocators() {
    let conversion = Converter::new(ScanMode::FreeComment, ExportFormat::SubCap)
        .convert(common::SAMPLE_EDL)
        .unwrap();

    assert_eq!(
        conversion.output,
        "<begin subtitles>\n\n\
         10:00:05:00 10:00:07:12\nHELLO WORLD\n\n\
         10:00:07:12 10:00:10:12\nCheck audio  ABC_010_0020\n\n\
         10:00:10:12 10:00:11:12\nSCENE XYZ_020_0030 LOOKS GOOD\n\n\
         <end subtitles>\n"
    );
}

/// Test code extraction feeding a VTT export
#[test]
fn test_convert_withCodeExtractionToVtt_shouldUseCodesAsCues() {
    let conversion = Converter::new(ScanMode::CodeExtraction, ExportFormat::Vtt)
        .convert(common::SAMPLE_EDL)
        .unwrap();

    assert_eq!(
        conversion.output,
        "WEBVTT\n\n\
         10:00:07.480 --> 10:00:10.480\nABC_010_0020\n\n\
         10:00:10.480 --> 10:00:11.480\nXYZ_020_0030\n\n"
    );
}

/// Test color selection narrowing a marker export
#[test]
fn test_convert_withYellowSelection_shouldRenumberMarkers() {
    let conversion = Converter::new(ScanMode::ColorComment, ExportFormat::MarkerText)
        .with_palette(MarkerPalette::Sixteen)
        .with_colors(["yellow"])
        .convert(common::SAMPLE_EDL)
        .unwrap();

    assert_eq!(
        conversion.output,
        "001  10:00:05:00  YELLOW  HELLO WORLD\n\
         002  10:00:10:12  YELLOW  SCENE XYZ_020_0030 LOOKS GOOD\n"
    );
    let tally = conversion.color_tally.unwrap();
    assert_eq!(tally.count_of("YELLOW"), 2);
    assert_eq!(tally.count_of("RED"), 1);
}

/// Test both empty outcomes stay distinct
#[test]
fn test_convert_withEmptyOutcomes_shouldDistinguishCause() {
    let none = Converter::new(ScanMode::ColorComment, ExportFormat::SubCap)
        .convert("TITLE: NOTHING\n001  AX  V  C  01:00:00:00 01:00:02:00 10:00:05:00 10:00:07:12\n");
    assert_eq!(none.unwrap_err(), ConversionError::NoLocatorsFound);

    let filtered = Converter::new(ScanMode::ColorComment, ExportFormat::SubCap)
        .with_colors(["BLUE"])
        .convert(common::SAMPLE_EDL);
    assert_eq!(filtered.unwrap_err(), ConversionError::AllBlocksFiltered { total: 3 });
}

/// Test the bundled resource EDL through every format
#[test]
fn test_convert_withResourceEdl_shouldHandleEveryFormat() -> Result<()> {
    let text = FileManager::read_edl(common::test_resource_path("reel_markers.edl"))?;

    for format in ExportFormat::ALL {
        let conversion = Converter::new(ScanMode::ColorComment, format).convert(&text).unwrap();
        // 001 GREEN, 003 MAGENTA, 004 GREEN; event 002 has no locator and the
        // second locator of 003 finds its pair already used
        assert_eq!(conversion.blocks.len(), 3, "{}", format);
    }

    let conversion = Converter::new(ScanMode::ColorComment, ExportFormat::MarkerXml).convert(&text).unwrap();
    assert!(conversion.output.contains("<Text>Translator note: keep &quot;Grandpa&quot; &amp; tone</Text>"));
    assert!(conversion.output.contains("<In>01:00:07:10</In>"));
    assert!(conversion.output.contains("<Out>01:00:10:10</Out>"));

    let tally = conversion.color_tally.unwrap();
    assert_eq!(tally.colors(), vec!["GREEN", "MAGENTA"]);
    assert_eq!(tally.count_of("GREEN"), 2);

    let codes = Converter::new(ScanMode::CodeExtraction, ExportFormat::ScriptSync).convert(&text).unwrap();
    assert_eq!(codes.output, "REL_004_0110\n");
    Ok(())
}
