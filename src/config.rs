//! System configuration and hardware constants
//!
//! This module defines compile-time constants for both link nodes.
//! All calibration values, timing parameters, radio settings, and pin
//! mappings are centralized here.

/// Radio channel shared by both nodes
pub const RADIO_CHANNEL: u8 = 42;

/// Radio transmit power level (0-7)
pub const RADIO_POWER: u8 = 7;

/// Maximum radio payload length in bytes
pub const RADIO_MESSAGE_LEN: usize = 100;

/// Transmitter keepalive interval in milliseconds
///
/// A frame goes out at least this often even when nothing changed, so the
/// receiver's liveness check keeps being fed during idle periods.
pub const SEND_INTERVAL_MS: u32 = 100;

/// Per-channel change threshold that triggers an off-schedule send
///
/// About 1% of the 10-bit ADC range; readings inside this band are treated
/// as noise rather than operator input.
pub const CHANGE_THRESHOLD: u16 = 10;

/// Receiver link timeout in milliseconds
///
/// Silence longer than this forces the failsafe transition.
pub const CONNECTION_TIMEOUT_MS: u32 = 2000;

/// Minimum servo duty value (angle 0)
pub const PWM_MIN: u8 = 26;

/// Maximum servo duty value (angle 180)
pub const PWM_MAX: u8 = 128;

/// Potentiometer reading at which the angle sweep saturates
///
/// Only `[0, 512]` of the raw 10-bit range maps onto the full sweep; this
/// matches the installed potentiometers' usable travel.
pub const POT_SATURATION: u16 = 512;

/// Maximum servo angle in degrees
pub const ANGLE_MAX: u16 = 180;

/// Maximum raw ADC reading (10-bit)
pub const ADC_MAX: u16 = 1023;

/// Servo PWM period in milliseconds (standard 50 Hz hobby servo timing)
pub const SERVO_PWM_PERIOD_MS: u32 = 20;

/// Full-scale value for servo duty writes (micro:bit analog write scale)
pub const PWM_WRITE_SCALE: u16 = 1023;

/// Poll loop tick in milliseconds
///
/// Yield interval for the cooperative loops; tick spacing is a scheduling
/// choice for the platform, not part of the control semantics.
pub const POLL_TICK_MS: u64 = 5;

/// Pin assignments for GPIO
pub mod pins {
    //! Edge-connector pin assignments matching the wiring diagram

    /// Potentiometer 1 wiper (transmitter, analog)
    pub const POT1: &str = "P0";

    /// Potentiometer 2 wiper (transmitter, analog)
    pub const POT2: &str = "P1";

    /// Potentiometer 3 wiper (transmitter, analog)
    pub const POT3: &str = "P2";

    /// External push button (transmitter, digital, pull-down)
    pub const BUTTON: &str = "P5";

    /// Servo 1 signal wire (receiver)
    pub const SERVO1: &str = "P8";

    /// Servo 2 signal wire (receiver)
    pub const SERVO2: &str = "P12";

    /// Servo 3 signal wire (receiver)
    pub const SERVO3: &str = "P16";

    /// External indicator LED anode (receiver)
    pub const LED: &str = "P14";
}
