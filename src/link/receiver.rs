//! Receiver State Machine
//!
//! Consumes decoded frames, resolves them into servo and LED outputs, and
//! tracks link liveness. This machine is the system's sole safety
//! mechanism: more than [`CONNECTION_TIMEOUT_MS`] of silence forces the
//! actuators to a known minimum-angle position instead of holding the last
//! command indefinitely.

use crate::config::CONNECTION_TIMEOUT_MS;
use crate::protocol::{DecodeError, SensorFrame};
use crate::servo::ServoCommand;
use crate::types::{LinkState, PotReading};

/// Number of servo output channels
pub const SERVO_CHANNELS: usize = 3;

/// Complete receiver-side output state
///
/// A single instance is owned by the receiver loop for the process
/// lifetime. It mutates only on a validly decoded frame and on the
/// failsafe transition; undecodable messages never touch it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReceiverSnapshot {
    /// Potentiometer 1 as last received
    pub pot1: PotReading,
    /// Potentiometer 2 as last received
    pub pot2: PotReading,
    /// Potentiometer 3 as last received
    pub pot3: PotReading,
    /// Button state as last received
    pub button: bool,
    /// Resolved output command per servo channel
    pub servos: [ServoCommand; SERVO_CHANNELS],
    /// Indicator LED state
    pub led_on: bool,
    /// Link liveness
    pub link: LinkState,
    /// Monotonic millisecond timestamp of the last accepted frame
    pub last_receive_ms: u32,
}

impl ReceiverSnapshot {
    /// Startup state: everything zeroed, servos at the safe position,
    /// link down
    #[must_use]
    pub fn startup() -> Self {
        Self {
            pot1: PotReading::MIN,
            pot2: PotReading::MIN,
            pot3: PotReading::MIN,
            button: false,
            servos: [ServoCommand::safe(); SERVO_CHANNELS],
            led_on: false,
            link: LinkState::Disconnected,
            last_receive_ms: 0,
        }
    }
}

impl Default for ReceiverSnapshot {
    fn default() -> Self {
        Self::startup()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ReceiverSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Snapshot({}, {}, {}, btn={}, {})",
            self.pot1,
            self.pot2,
            self.pot3,
            u8::from(self.button),
            self.link
        );
    }
}

/// What happens to the indicator LED when the link is lost
///
/// The deployed behavior leaves the LED in whatever state the last frame
/// commanded, which can hold it lit through an outage. That is preserved
/// as the default here, but as a named choice rather than an accident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LossPolicy {
    /// Keep the last commanded LED state through the failsafe transition
    pub hold_led: bool,
}

impl Default for LossPolicy {
    fn default() -> Self {
        Self { hold_led: true }
    }
}

/// Receiver-side link state machine
///
/// Owns the [`ReceiverSnapshot`] and applies the two transitions: a valid
/// frame (re)connects and resolves outputs; sustained silence while
/// connected engages the failsafe.
#[derive(Clone, Copy, Debug)]
pub struct Receiver {
    snapshot: ReceiverSnapshot,
    loss_policy: LossPolicy,
}

impl Receiver {
    /// Create a receiver with the deployed loss policy (LED held on loss)
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(LossPolicy::default())
    }

    /// Create a receiver with an explicit loss policy
    #[must_use]
    pub fn with_policy(loss_policy: LossPolicy) -> Self {
        Self {
            snapshot: ReceiverSnapshot::startup(),
            loss_policy,
        }
    }

    /// Get the current snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &ReceiverSnapshot {
        &self.snapshot
    }

    /// Decode a received message and apply it
    ///
    /// The snapshot is updated only when the whole message decodes; a
    /// decode failure leaves every field untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] from the codec; the caller should drop
    /// the message and write nothing.
    pub fn handle_message(
        &mut self,
        text: &str,
        now_ms: u32,
    ) -> Result<&ReceiverSnapshot, DecodeError> {
        let frame = SensorFrame::decode(text)?;
        Ok(self.apply_frame(frame, now_ms))
    }

    /// Apply a validly decoded frame
    ///
    /// Resolves all three servo commands, mirrors the button onto the LED,
    /// stamps the receive time, and marks the link connected. Returns the
    /// updated snapshot for status reporting.
    pub fn apply_frame(&mut self, frame: SensorFrame, now_ms: u32) -> &ReceiverSnapshot {
        let s = &mut self.snapshot;
        s.pot1 = frame.pot1;
        s.pot2 = frame.pot2;
        s.pot3 = frame.pot3;
        s.button = frame.button;
        s.servos = [
            ServoCommand::from_pot(frame.pot1),
            ServoCommand::from_pot(frame.pot2),
            ServoCommand::from_pot(frame.pot3),
        ];
        s.led_on = frame.button;
        s.last_receive_ms = now_ms;
        s.link = LinkState::Connected;
        &self.snapshot
    }

    /// Liveness check, run every tick
    ///
    /// When connected and more than [`CONNECTION_TIMEOUT_MS`] has passed
    /// since the last accepted frame (strict comparison, wrap-safe),
    /// transitions to disconnected and drives every servo to the safe
    /// position. The LED follows the configured [`LossPolicy`]. Returns
    /// `true` exactly when the failsafe engaged on this tick.
    pub fn check_link(&mut self, now_ms: u32) -> bool {
        if !self.snapshot.link.is_connected() {
            return false;
        }
        if now_ms.wrapping_sub(self.snapshot.last_receive_ms) <= CONNECTION_TIMEOUT_MS {
            return false;
        }
        self.snapshot.link = LinkState::Disconnected;
        self.snapshot.servos = [ServoCommand::safe(); SERVO_CHANNELS];
        if !self.loss_policy.hold_led {
            self.snapshot.led_on = false;
        }
        true
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Self::new()
    }
}
