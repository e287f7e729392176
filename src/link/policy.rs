//! Transmit Policy
//!
//! Decides, once per transmitter cycle, whether sending the current frame
//! is worth the bandwidth. Meaningful changes go out within one cycle; an
//! unchanged state still produces a keepalive frame every
//! [`SEND_INTERVAL_MS`] so the receiver's liveness check keeps being fed.

use crate::config::{CHANGE_THRESHOLD, SEND_INTERVAL_MS};
use crate::protocol::SensorFrame;
use crate::types::PotReading;

/// Per-cycle send decision state
///
/// Tracks the last frame actually sent and when it went out. Elapsed-time
/// math uses wrapping subtraction so the policy survives millisecond
/// counter overflow during long uptime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransmitPolicy {
    /// Last frame handed to the radio
    last_sent: SensorFrame,
    /// Monotonic millisecond timestamp of the last send
    last_send_ms: u32,
}

impl TransmitPolicy {
    /// Create a policy with zeroed history
    ///
    /// The first cycle therefore behaves as if an all-zero frame was sent
    /// at time 0: nothing goes out until the keepalive interval elapses or
    /// a reading moves past the change threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_sent: SensorFrame::new(
                PotReading::MIN,
                PotReading::MIN,
                PotReading::MIN,
                false,
            ),
            last_send_ms: 0,
        }
    }

    /// Check whether a frame differs meaningfully from the last one sent
    ///
    /// True when any potentiometer moved more than [`CHANGE_THRESHOLD`]
    /// counts (the noise-rejection band, ~1% of full scale) or the button
    /// state flipped.
    #[must_use]
    pub fn change_detected(&self, frame: &SensorFrame) -> bool {
        frame.pot1.abs_diff(self.last_sent.pot1) > CHANGE_THRESHOLD
            || frame.pot2.abs_diff(self.last_sent.pot2) > CHANGE_THRESHOLD
            || frame.pot3.abs_diff(self.last_sent.pot3) > CHANGE_THRESHOLD
            || frame.button != self.last_sent.button
    }

    /// Check whether this cycle should send
    ///
    /// Sends when the keepalive interval has elapsed or a meaningful
    /// change was detected, bounding worst-case update latency at
    /// [`SEND_INTERVAL_MS`].
    #[must_use]
    pub fn should_send(&self, frame: &SensorFrame, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_send_ms) >= SEND_INTERVAL_MS || self.change_detected(frame)
    }

    /// Record that a frame was sent
    pub fn record_send(&mut self, frame: SensorFrame, now_ms: u32) {
        self.last_sent = frame;
        self.last_send_ms = now_ms;
    }

    /// Combined per-cycle decision
    ///
    /// Returns `true` when the frame should go out this cycle, updating the
    /// send history in the same step.
    pub fn poll(&mut self, frame: SensorFrame, now_ms: u32) -> bool {
        if self.should_send(&frame, now_ms) {
            self.record_send(frame, now_ms);
            true
        } else {
            false
        }
    }

    /// Get the last frame sent
    #[must_use]
    pub const fn last_sent(&self) -> SensorFrame {
        self.last_sent
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransmitPolicy {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TxPolicy(last={}ms)", self.last_send_ms);
    }
}
