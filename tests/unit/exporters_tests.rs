/*!
 * Tests for the export formats
 */

use edlsubcap::exporters::{ExportFormat, Exporter, MarkerPalette, MarkerText, ScriptSync, SubCap};
use edlsubcap::locator::LocatorBlock;
use edlsubcap::timecode::Timecode;

fn block(tin: &str, tout: &str, color: &str, label: &str) -> LocatorBlock {
    LocatorBlock::with_color(tin.parse().unwrap(), tout.parse().unwrap(), color, label)
}

fn sample() -> Vec<LocatorBlock> {
    vec![
        block("10:00:05:00", "10:00:07:12", "YELLOW", "HELLO WORLD"),
        block("10:00:07:12", "10:00:10:12", "RED", "Check audio"),
    ]
}

/// Test SubCap with zero blocks is exactly the two markers
#[test]
fn test_subcap_withNoBlocks_shouldContainOnlyMarkers() {
    assert_eq!(SubCap.export(&[]), "<begin subtitles>\n\n<end subtitles>\n");
}

/// Test SubCap with N blocks has N timecode/label pairs between the markers
#[test]
fn test_subcap_withBlocks_shouldHaveOnePairPerBlock() {
    for n in 1..5 {
        let blocks: Vec<LocatorBlock> = (0..n)
            .map(|i| {
                let tc = Timecode::new(10, 0, i, 0);
                LocatorBlock::new(tc, tc, format!("label {}", i))
            })
            .collect();
        let out = SubCap.export(&blocks);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.first(), Some(&"<begin subtitles>"));
        assert_eq!(lines.last(), Some(&"<end subtitles>"));
        let body: Vec<&str> = lines[1..lines.len() - 1]
            .iter()
            .copied()
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(body.len(), 2 * n as usize);
        for (i, pair) in body.chunks(2).enumerate() {
            assert_eq!(Timecode::find_all(pair[0]).len(), 2);
            assert_eq!(pair[1], format!("label {}", i));
        }
    }
}

/// Test every format renders an empty shell for no blocks
#[test]
fn test_allFormats_withNoBlocks_shouldNotPanic() {
    let expected = [
        (ExportFormat::SubCap, "<begin subtitles>\n\n<end subtitles>\n"),
        (ExportFormat::MarkerText, ""),
        (
            ExportFormat::MarkerXml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Markers>\n</Markers>\n",
        ),
        (ExportFormat::ScriptSync, ""),
        (ExportFormat::Srt, ""),
        (ExportFormat::Vtt, "WEBVTT\n\n"),
        (ExportFormat::Sbv, ""),
    ];
    for (format, shell) in expected {
        assert_eq!(format.exporter(MarkerPalette::Sixteen).export(&[]), shell, "{}", format);
    }
}

/// Test SRT numbering and timing over two blocks
#[test]
fn test_srt_withTwoBlocks_shouldNumberSequentially() {
    let out = ExportFormat::Srt.exporter(MarkerPalette::default()).export(&sample());
    assert_eq!(
        out,
        "1\n10:00:05,000 --> 10:00:07,480\nHELLO WORLD\n\n\
         2\n10:00:07,480 --> 10:00:10,480\nCheck audio\n\n"
    );
}

/// Test VTT header and cue layout
#[test]
fn test_vtt_withTwoBlocks_shouldStartWithHeader() {
    let out = ExportFormat::Vtt.exporter(MarkerPalette::default()).export(&sample());
    assert_eq!(
        out,
        "WEBVTT\n\n\
         10:00:05.000 --> 10:00:07.480\nHELLO WORLD\n\n\
         10:00:07.480 --> 10:00:10.480\nCheck audio\n\n"
    );
}

/// Test SBV timing line joiner
#[test]
fn test_sbv_withTwoBlocks_shouldUseSpacedComma() {
    let out = ExportFormat::Sbv.exporter(MarkerPalette::default()).export(&sample());
    assert_eq!(
        out,
        "10:00:05.000 , 10:00:07.480\nHELLO WORLD\n\n\
         10:00:07.480 , 10:00:10.480\nCheck audio\n\n"
    );
}

/// Test ScriptSync carries labels only
#[test]
fn test_scriptSync_withTwoBlocks_shouldOmitTimecodes() {
    assert_eq!(ScriptSync.export(&sample()), "HELLO WORLD\nCheck audio\n");
}

/// Test marker text numbering and palettes
#[test]
fn test_markerText_withPalettes_shouldToggleColorColumn() {
    let sixteen = MarkerText::new(MarkerPalette::Sixteen).export(&sample());
    assert_eq!(
        sixteen,
        "001  10:00:05:00  YELLOW  HELLO WORLD\n002  10:00:07:12  RED  Check audio\n"
    );

    let eight = MarkerText::new(MarkerPalette::Eight).export(&sample());
    assert_eq!(eight, "001  10:00:05:00  HELLO WORLD\n002  10:00:07:12  Check audio\n");
}

/// Test marker numbering beyond three digits is not truncated
#[test]
fn test_markerText_withThousandBlocks_shouldWidenNumber() {
    let tc = Timecode::new(1, 0, 0, 0);
    let blocks: Vec<LocatorBlock> = (0..1000).map(|_| LocatorBlock::with_color(tc, tc, "RED", "x")).collect();
    let out = MarkerText::new(MarkerPalette::Sixteen).export(&blocks);
    assert_eq!(out.lines().last(), Some("1000  01:00:00:00  RED  x"));
}

/// Test marker XML escapes label text
#[test]
fn test_markerXml_withSpecialCharacters_shouldEscape() {
    let blocks = vec![block("01:00:00:00", "01:00:01:00", "RED", "<b>\"Tom\" & 'Jerry'</b>")];
    let out = ExportFormat::MarkerXml.exporter(MarkerPalette::default()).export(&blocks);
    assert!(out.contains("<Text>&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;</Text>"));
    assert!(out.contains("<Number>1</Number>"));
}

/// Test format identifiers and extensions
#[test]
fn test_exportFormat_fromStr_shouldRoundTripIdentifiers() {
    for format in ExportFormat::ALL {
        assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
    }
    assert_eq!("SRT".parse::<ExportFormat>().unwrap(), ExportFormat::Srt);
    assert!("docx".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::MarkerXml.extension(), "xml");
    assert_eq!(ExportFormat::SubCap.extension(), "txt");
    assert_eq!(ExportFormat::Vtt.extension(), "vtt");
}
