//! Servo Mapping
//!
//! Pure calibration functions from potentiometer readings to servo angles
//! and from angles to duty values. Both functions are total and
//! deterministic; out-of-domain inputs clamp, they never reject.

#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::config::{ANGLE_MAX, POT_SATURATION, PWM_MAX, PWM_MIN};
use crate::types::{PotReading, PwmDuty, ServoAngle};

/// Map a potentiometer reading to a servo angle
///
/// Only `[0, 512]` of the raw 10-bit range maps onto the full sweep:
/// `angle = 180 - (min(pot, 512) / 512) * 180`. Readings above the
/// saturation point hold the servo at angle 0. The mapping is inverted
/// (pot 0 gives angle 180) to match the mechanical linkage.
#[must_use]
pub fn pot_to_angle(pot: PotReading) -> ServoAngle {
    let limited = pot.raw().min(POT_SATURATION);
    let sweep = f32::from(ANGLE_MAX);
    ServoAngle::from_degrees(sweep - (f32::from(limited) / f32::from(POT_SATURATION)) * sweep)
}

/// Map a servo angle to a duty value
///
/// `duty = floor((angle / 180) * (128 - 26)) + 26`, always within
/// `[26, 128]` for the `[0, 180]` angle domain.
#[must_use]
pub fn angle_to_pwm(angle: ServoAngle) -> PwmDuty {
    let span = f32::from(PWM_MAX - PWM_MIN);
    let scaled = ((angle.as_degrees() / f32::from(ANGLE_MAX)) * span).floor();
    PwmDuty::from_raw(scaled as u8 + PWM_MIN)
}

/// One servo channel's resolved output
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServoCommand {
    /// Commanded angle
    pub angle: ServoAngle,
    /// Duty value realizing the angle
    pub duty: PwmDuty,
}

impl ServoCommand {
    /// Resolve a potentiometer reading into an output command
    #[must_use]
    pub fn from_pot(pot: PotReading) -> Self {
        let angle = pot_to_angle(pot);
        Self {
            angle,
            duty: angle_to_pwm(angle),
        }
    }

    /// The failsafe position: angle 0, minimum duty
    #[must_use]
    pub fn safe() -> Self {
        let angle = ServoAngle::ZERO;
        Self {
            angle,
            duty: angle_to_pwm(angle),
        }
    }
}

impl Default for ServoCommand {
    fn default() -> Self {
        Self::safe()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ServoCommand {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Servo({}, {})", self.angle, self.duty);
    }
}
