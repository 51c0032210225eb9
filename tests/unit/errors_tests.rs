/*!
 * Tests for error types and conversions
 */

use homematic_rega::errors::{DecodeError, ProtocolError, RegaError, TranslationFetchError};

fn malformed_document_error() -> ProtocolError {
    let source = roxmltree::Document::parse("<a>").unwrap_err();
    ProtocolError::MalformedDocument {
        output: "recovered text".to_string(),
        source,
    }
}

fn decode_error() -> DecodeError {
    DecodeError {
        output: "not json".to_string(),
        source: serde_json::from_str::<i32>("not json").unwrap_err(),
    }
}

#[test]
fn test_protocolError_emptyResponse_shouldDisplayCorrectly() {
    let display = format!("{}", ProtocolError::EmptyResponse);
    assert!(display.contains("empty rega response"));
}

#[test]
fn test_protocolError_missingBoundary_shouldDisplayCorrectly() {
    let display = format!("{}", ProtocolError::MissingBoundary);
    assert!(display.contains("missing document boundary"));
}

#[test]
fn test_protocolError_malformedDocument_shouldDisplaySource() {
    let display = format!("{}", malformed_document_error());
    assert!(display.contains("malformed result document"));
}

#[test]
fn test_decodeError_shouldDisplaySource() {
    let display = format!("{}", decode_error());
    assert!(display.contains("malformed script result"));
}

#[test]
fn test_translationFetchError_emptyAsset_shouldDisplayCorrectly() {
    let display = format!("{}", TranslationFetchError::EmptyAsset);
    assert!(display.contains("empty translation asset"));
}

#[test]
fn test_regaError_fromProtocolError_shouldWrapCorrectly() {
    let error: RegaError = ProtocolError::EmptyResponse.into();
    assert!(matches!(error, RegaError::Protocol(_)));
    assert!(format!("{}", error).contains("protocol error"));
}

#[test]
fn test_regaError_fromDecodeError_shouldWrapCorrectly() {
    let error: RegaError = decode_error().into();
    assert!(matches!(error, RegaError::Decode(_)));
    assert!(format!("{}", error).contains("decode error"));
}

#[test]
fn test_regaError_output_withMalformedDocument_shouldReturnRecoveredText() {
    let error: RegaError = malformed_document_error().into();
    assert_eq!(error.output(), Some("recovered text"));
}

#[test]
fn test_regaError_output_withDecodeError_shouldReturnRawOutput() {
    let error: RegaError = decode_error().into();
    assert_eq!(error.output(), Some("not json"));
}

#[test]
fn test_regaError_output_withOtherVariants_shouldReturnNone() {
    let error: RegaError = ProtocolError::EmptyResponse.into();
    assert_eq!(error.output(), None);

    let error = RegaError::Config("bad host".to_string());
    assert_eq!(error.output(), None);
}
