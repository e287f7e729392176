//! Shared types used across the RC link firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{ADC_MAX, ANGLE_MAX, PWM_MAX, PWM_MIN};

/// Raw potentiometer reading with validation
///
/// Represents a 10-bit ADC sample in `[0, 1023]`. Construction clamps
/// out-of-domain values instead of rejecting them, so hostile wire input
/// never escapes the documented domain.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PotReading(u16);

impl PotReading {
    /// Minimum reading
    pub const MIN: Self = Self(0);

    /// Maximum reading (10-bit full scale)
    pub const MAX: Self = Self(ADC_MAX);

    /// Create a reading from a raw ADC value, clamping to full scale
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        if raw > ADC_MAX {
            Self(ADC_MAX)
        } else {
            Self(raw)
        }
    }

    /// Create a reading from a signed wire value, clamping into `[0, 1023]`
    #[must_use]
    pub const fn from_wire(value: i64) -> Self {
        if value < 0 {
            Self(0)
        } else if value > ADC_MAX as i64 {
            Self(ADC_MAX)
        } else {
            Self(value as u16)
        }
    }

    /// Get the raw 10-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Absolute difference between two readings
    #[must_use]
    pub const fn abs_diff(self, other: Self) -> u16 {
        if self.0 > other.0 {
            self.0 - other.0
        } else {
            other.0 - self.0
        }
    }
}

impl fmt::Debug for PotReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PotReading({})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PotReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Pot({})", self.0);
    }
}

/// Servo angle in degrees
///
/// Always within `[0, 180]`; out-of-domain inputs are clamped at
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct ServoAngle(f32);

impl ServoAngle {
    /// Minimum angle (the failsafe position)
    pub const ZERO: Self = Self(0.0);

    /// Create an angle from degrees, clamping into `[0, 180]`
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.clamp(0.0, ANGLE_MAX as f32))
    }

    /// Get the angle in degrees
    #[must_use]
    pub const fn as_degrees(self) -> f32 {
        self.0
    }

    /// Angle rounded to the nearest whole degree
    ///
    /// Total for the `[0, 180]` domain; used for status reporting.
    #[must_use]
    pub fn rounded(self) -> u16 {
        (self.0 + 0.5) as u16
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ServoAngle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}°", self.rounded());
    }
}

/// Servo duty value on the analog write scale
///
/// Always within `[PWM_MIN, PWM_MAX]` = `[26, 128]`, the calibrated pulse
/// range for the installed servos at a 20 ms period.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PwmDuty(u8);

impl PwmDuty {
    /// Duty for angle 0 (the failsafe position)
    pub const MIN: Self = Self(PWM_MIN);

    /// Duty for angle 180
    pub const MAX: Self = Self(PWM_MAX);

    /// Create a duty value, clamping into the calibrated range
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        if raw < PWM_MIN {
            Self(PWM_MIN)
        } else if raw > PWM_MAX {
            Self(PWM_MAX)
        } else {
            Self(raw)
        }
    }

    /// Get the raw duty value
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for PwmDuty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PwmDuty({})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PwmDuty {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Duty({})", self.0);
    }
}

/// Receiver link liveness state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkState {
    /// No valid frame within the timeout window (initial state)
    #[default]
    Disconnected,
    /// Valid frames arriving
    Connected,
}

impl LinkState {
    /// Check whether the link is up
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Disconnected => defmt::write!(f, "DISCONNECTED"),
            Self::Connected => defmt::write!(f, "CONNECTED"),
        }
    }
}
