//! Receiver State Machine Tests
//!
//! Tests for the connection-loss failsafe: valid frames drive outputs and
//! hold the link up, silence forces the safe position, and bad messages
//! touch nothing.

use rc_link_firmware::link::receiver::{LossPolicy, Receiver};
use rc_link_firmware::protocol::SensorFrame;
use rc_link_firmware::types::{LinkState, PotReading};

fn frame(p1: u16, p2: u16, p3: u16, button: bool) -> SensorFrame {
    SensorFrame::new(
        PotReading::from_raw(p1),
        PotReading::from_raw(p2),
        PotReading::from_raw(p3),
        button,
    )
}

// ============================================================================
// Startup State Tests
// ============================================================================

#[test]
fn test_starts_disconnected_at_safe_position() {
    let receiver = Receiver::new();
    let snapshot = receiver.snapshot();
    assert_eq!(snapshot.link, LinkState::Disconnected);
    assert!(!snapshot.led_on);
    for servo in &snapshot.servos {
        assert_eq!(servo.duty.raw(), 26);
    }
}

#[test]
fn test_no_failsafe_while_disconnected() {
    let mut receiver = Receiver::new();
    // Never connected: the liveness check must not fire no matter how
    // much time passes
    assert!(!receiver.check_link(10_000));
    assert!(!receiver.check_link(1_000_000));
}

// ============================================================================
// Frame Application Tests
// ============================================================================

#[test]
fn test_valid_frame_connects_and_drives_outputs() {
    let mut receiver = Receiver::new();
    let snapshot = receiver.apply_frame(frame(0, 256, 512, true), 500);

    assert_eq!(snapshot.link, LinkState::Connected);
    assert_eq!(snapshot.last_receive_ms, 500);
    assert!(snapshot.led_on);
    assert_eq!(snapshot.servos[0].angle.rounded(), 180);
    assert_eq!(snapshot.servos[1].angle.rounded(), 90);
    assert_eq!(snapshot.servos[2].angle.rounded(), 0);
}

#[test]
fn test_handle_message_decodes_and_applies() {
    let mut receiver = Receiver::new();
    let snapshot = receiver
        .handle_message("P1:100,P2:200,P3:300,BTN:1", 100)
        .unwrap();
    assert_eq!(snapshot.pot1.raw(), 100);
    assert_eq!(snapshot.pot2.raw(), 200);
    assert_eq!(snapshot.pot3.raw(), 300);
    assert!(snapshot.button);
    assert_eq!(snapshot.link, LinkState::Connected);
}

#[test]
fn test_led_mirrors_button() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(0, 0, 0, true), 100);
    assert!(receiver.snapshot().led_on);
    receiver.apply_frame(frame(0, 0, 0, false), 200);
    assert!(!receiver.snapshot().led_on);
}

#[test]
fn test_bad_message_mutates_nothing() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(100, 200, 300, true), 100);
    let before = *receiver.snapshot();

    let result = receiver.handle_message("P1:999,P2:garbage,BTN:0", 150);
    assert!(result.is_err());
    // Accept whole or discard whole: even the fields that parsed (P1)
    // must not land
    assert_eq!(*receiver.snapshot(), before);
}

// ============================================================================
// Failsafe Tests
// ============================================================================

#[test]
fn test_silence_at_timeout_holds() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(100, 100, 100, false), 1000);
    // Strict comparison: exactly 2000 ms of silence is still connected
    assert!(!receiver.check_link(3000));
    assert_eq!(receiver.snapshot().link, LinkState::Connected);
}

#[test]
fn test_silence_past_timeout_engages_failsafe() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(100, 100, 100, false), 1000);

    assert!(receiver.check_link(3001));
    let snapshot = receiver.snapshot();
    assert_eq!(snapshot.link, LinkState::Disconnected);
    for servo in &snapshot.servos {
        assert_eq!(servo.duty.raw(), 26);
        assert_eq!(servo.angle.rounded(), 0);
    }
}

#[test]
fn test_failsafe_engages_once() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(100, 100, 100, false), 0);
    assert!(receiver.check_link(2001));
    // Already disconnected: subsequent ticks report nothing new
    assert!(!receiver.check_link(4000));
}

#[test]
fn test_failsafe_preserves_last_readings() {
    // Actuators reset to safe; the last received pot values stay readable
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(321, 654, 987, false), 0);
    receiver.check_link(2001);
    let snapshot = receiver.snapshot();
    assert_eq!(snapshot.pot1.raw(), 321);
    assert_eq!(snapshot.pot2.raw(), 654);
    assert_eq!(snapshot.pot3.raw(), 987);
}

#[test]
fn test_frame_keeps_link_alive() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(0, 0, 0, false), 0);
    receiver.apply_frame(frame(0, 0, 0, false), 1900);
    // Timeout counts from the most recent frame
    assert!(!receiver.check_link(3800));
    assert!(receiver.check_link(3901));
}

#[test]
fn test_reconnect_after_failsafe() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(100, 100, 100, false), 0);
    assert!(receiver.check_link(2001));

    let snapshot = receiver.apply_frame(frame(256, 256, 256, true), 5000);
    assert_eq!(snapshot.link, LinkState::Connected);
    assert_eq!(snapshot.servos[0].angle.rounded(), 90);
}

// ============================================================================
// LED Loss Policy Tests
// ============================================================================

#[test]
fn test_default_policy_holds_led_through_loss() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(0, 0, 0, true), 0);
    receiver.check_link(2001);
    // Deployed behavior: the LED stays as last commanded
    assert!(receiver.snapshot().led_on);
}

#[test]
fn test_clearing_policy_darkens_led_on_loss() {
    let mut receiver = Receiver::with_policy(LossPolicy { hold_led: false });
    receiver.apply_frame(frame(0, 0, 0, true), 0);
    receiver.check_link(2001);
    assert!(!receiver.snapshot().led_on);
}

// ============================================================================
// Clock Wrap Tests
// ============================================================================

#[test]
fn test_timeout_survives_counter_wrap() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(0, 0, 0, false), u32::MAX - 1000);
    // 1500 ms later the counter has wrapped; elapsed is 2501 ms
    assert!(receiver.check_link(1500));
    assert_eq!(receiver.snapshot().link, LinkState::Disconnected);
}

#[test]
fn test_no_spurious_failsafe_across_wrap() {
    let mut receiver = Receiver::new();
    receiver.apply_frame(frame(0, 0, 0, false), u32::MAX - 500);
    // Only 1000 ms elapsed across the wrap
    assert!(!receiver.check_link(499));
    assert_eq!(receiver.snapshot().link, LinkState::Connected);
}
