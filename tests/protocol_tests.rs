//! Wire Protocol Tests
//!
//! Tests for frame encoding/decoding over the lossy radio channel:
//! exact wire shape, truncation tolerance, and whole-message discard.

use rc_link_firmware::protocol::{DecodeError, FrameField, SensorFrame, MAX_MESSAGE_LEN};
use rc_link_firmware::types::PotReading;

fn frame(p1: u16, p2: u16, p3: u16, button: bool) -> SensorFrame {
    SensorFrame::new(
        PotReading::from_raw(p1),
        PotReading::from_raw(p2),
        PotReading::from_raw(p3),
        button,
    )
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn test_encode_exact_shape() {
    let msg = frame(100, 200, 300, true).encode();
    assert_eq!(msg.as_str(), "P1:100,P2:200,P3:300,BTN:1");
}

#[test]
fn test_encode_zero_frame() {
    let msg = frame(0, 0, 0, false).encode();
    assert_eq!(msg.as_str(), "P1:0,P2:0,P3:0,BTN:0");
}

#[test]
fn test_encode_no_leading_zeros() {
    let msg = frame(7, 42, 1023, false).encode();
    assert_eq!(msg.as_str(), "P1:7,P2:42,P3:1023,BTN:0");
}

#[test]
fn test_encode_fits_radio_payload() {
    // Widest possible message is 29 bytes
    let msg = frame(1023, 1023, 1023, true).encode();
    assert_eq!(msg.len(), 29);
    assert!(msg.len() <= MAX_MESSAGE_LEN);
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[test]
fn test_decode_full_message() {
    let decoded = SensorFrame::decode("P1:100,P2:200,P3:300,BTN:1").unwrap();
    assert_eq!(decoded, frame(100, 200, 300, true));
}

#[test]
fn test_decode_button_released() {
    let decoded = SensorFrame::decode("P1:0,P2:0,P3:0,BTN:0").unwrap();
    assert!(!decoded.button);
}

#[test]
fn test_decode_missing_fields_default() {
    // Truncated message: absent fields fall back to 0/false, not an error
    let decoded = SensorFrame::decode("P1:100,P3:300").unwrap();
    assert_eq!(decoded, frame(100, 0, 300, false));
}

#[test]
fn test_decode_empty_message_is_zero_frame() {
    let decoded = SensorFrame::decode("").unwrap();
    assert_eq!(decoded, SensorFrame::default());
}

#[test]
fn test_decode_unknown_tokens_skipped() {
    let decoded = SensorFrame::decode("P1:100,X9:55,BTN:1").unwrap();
    assert_eq!(decoded, frame(100, 0, 0, true));
}

#[test]
fn test_decode_field_order_does_not_matter() {
    let decoded = SensorFrame::decode("BTN:1,P3:300,P2:200,P1:100").unwrap();
    assert_eq!(decoded, frame(100, 200, 300, true));
}

#[test]
fn test_decode_button_nonzero_is_pressed() {
    let decoded = SensorFrame::decode("BTN:5").unwrap();
    assert!(decoded.button);
}

// ============================================================================
// Decode Failure Tests
// ============================================================================

#[test]
fn test_decode_non_numeric_pot_fails_whole_message() {
    let err = SensorFrame::decode("P1:abc,P2:200,P3:300,BTN:1").unwrap_err();
    assert_eq!(
        err,
        DecodeError {
            field: FrameField::Pot1
        }
    );
}

#[test]
fn test_decode_non_numeric_button_fails() {
    let err = SensorFrame::decode("P1:100,BTN:x").unwrap_err();
    assert_eq!(err.field, FrameField::Button);
}

#[test]
fn test_decode_empty_payload_fails() {
    assert!(SensorFrame::decode("P2:").is_err());
}

#[test]
fn test_decode_error_names_first_bad_field() {
    let err = SensorFrame::decode("P1:1,P2:bad,P3:worse").unwrap_err();
    assert_eq!(err.field, FrameField::Pot2);
}

// ============================================================================
// Domain Clamping Tests
// ============================================================================

#[test]
fn test_decode_negative_value_clamps_to_zero() {
    let decoded = SensorFrame::decode("P1:-5,P2:0,P3:0,BTN:0").unwrap();
    assert_eq!(decoded.pot1.raw(), 0);
}

#[test]
fn test_decode_oversized_value_clamps_to_full_scale() {
    let decoded = SensorFrame::decode("P1:5000").unwrap();
    assert_eq!(decoded.pot1.raw(), 1023);
}

#[test]
fn test_decode_huge_numeric_values_clamp_not_error() {
    // Any numeric magnitude follows the clamp path; only non-numeric
    // payloads are errors
    let decoded = SensorFrame::decode("P1:99999999999,P2:-99999999999,BTN:99999999999").unwrap();
    assert_eq!(decoded.pot1.raw(), 1023);
    assert_eq!(decoded.pot2.raw(), 0);
    assert!(decoded.button);
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[test]
fn test_round_trip_documented_example() {
    let original = frame(100, 200, 300, true);
    let decoded = SensorFrame::decode(&original.encode()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_round_trip_domain_boundaries() {
    for &pot in &[0u16, 1, 511, 512, 1023] {
        for &button in &[false, true] {
            let original = frame(pot, 1023 - pot, pot / 2, button);
            let decoded = SensorFrame::decode(&original.encode()).unwrap();
            assert_eq!(decoded, original, "round trip failed for pot={pot}");
        }
    }
}
