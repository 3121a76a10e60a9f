/*!
 * Tests for error types and conversions
 */

use edlsubcap::errors::{AppError, ConversionError};

#[test]
fn test_conversionError_noLocatorsFound_shouldDisplayCorrectly() {
    let display = format!("{}", ConversionError::NoLocatorsFound);
    assert!(display.contains("LOC:"));
}

#[test]
fn test_conversionError_allBlocksFiltered_shouldDisplayTotal() {
    let display = format!("{}", ConversionError::AllBlocksFiltered { total: 7 });
    assert!(display.contains("7"));
    assert!(display.contains("color selection"));
}

#[test]
fn test_conversionErrors_shouldBeDistinguishable() {
    assert_ne!(
        ConversionError::NoLocatorsFound,
        ConversionError::AllBlocksFiltered { total: 0 }
    );
}

#[test]
fn test_appError_fromConversionError_shouldWrap() {
    let error: AppError = ConversionError::NoLocatorsFound.into();
    assert!(matches!(error, AppError::Conversion(ConversionError::NoLocatorsFound)));
    assert!(format!("{}", error).starts_with("Conversion error"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.edl");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(format!("{}", error).contains("missing.edl"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(error, AppError::Unknown(ref msg) if msg == "boom"));
}
