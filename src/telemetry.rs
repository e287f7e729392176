//! Telemetry Output
//!
//! Formats accepted frames and system events as the text lines consumed by
//! the downstream telemetry collector. The line shapes here are an
//! external contract: the collector parses each `RX:` line with a pattern
//! capturing the eight fields, and distinguishes event lines by their not
//! starting with `RX:`.

use heapless::String;

use crate::link::receiver::ReceiverSnapshot;

/// Status line buffer capacity
///
/// The widest in-domain line is under 80 bytes (the arrow and degree signs
/// are multi-byte UTF-8).
pub const STATUS_LINE_CAPACITY: usize = 96;

/// Render one accepted frame as a status line
///
/// Produces exactly
/// `RX: P1={p1} P2={p2} P3={p3} BTN={btn} → A1={a1}° A2={a2}° A3={a3}° LED={led}`
/// with angles rounded to the nearest degree and BTN/LED printed as 0/1.
/// The collector also tolerates an optional `(STOP)` suffix after each pot
/// field; this firmware never emits it, but the layout leaves room for it.
#[must_use]
pub fn status_line(snapshot: &ReceiverSnapshot) -> String<STATUS_LINE_CAPACITY> {
    let mut line = String::new();
    let _ = core::fmt::write(
        &mut line,
        format_args!(
            "RX: P1={} P2={} P3={} BTN={} \u{2192} A1={}\u{b0} A2={}\u{b0} A3={}\u{b0} LED={}",
            snapshot.pot1.raw(),
            snapshot.pot2.raw(),
            snapshot.pot3.raw(),
            u8::from(snapshot.button),
            snapshot.servos[0].angle.rounded(),
            snapshot.servos[1].angle.rounded(),
            snapshot.servos[2].angle.rounded(),
            u8::from(snapshot.led_on)
        ),
    );
    line
}

/// Discrete system event reported outside the per-frame data stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemEvent {
    /// Receiver process started, servos initialized to the safe position
    ReceiverInit,
    /// Radio configured and listening
    RadioReceiverReady,
    /// Link timeout expired, failsafe engaging
    ConnectionLost,
    /// All servo outputs driven to angle 0
    AllServosToZero,
}

impl SystemEvent {
    /// Get the event line text
    ///
    /// Event lines never start with `RX:`, which is how the collector
    /// tells them apart from data lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReceiverInit => "RECEIVER_INIT",
            Self::RadioReceiverReady => "RADIO_RECEIVER_READY",
            Self::ConnectionLost => "CONNECTION_LOST",
            Self::AllServosToZero => "ALL_SERVOS_TO_ZERO",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SystemEvent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}
