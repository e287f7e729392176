//! Servo PWM Driver
//!
//! Drives the three servo signal wires from one PWM peripheral at the
//! standard 20 ms hobby-servo period. Duty values arrive on the
//! `[0, 1023]` analog write scale and are rescaled to timer ticks here.

use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};

use crate::config::{PWM_WRITE_SCALE, SERVO_PWM_PERIOD_MS};
use crate::link::receiver::SERVO_CHANNELS;
use crate::servo::ServoCommand;

/// PWM ticks per period: 16 MHz / 128 prescaler = 125 kHz, 20 ms = 2500
const PERIOD_TICKS: u16 = (125 * SERVO_PWM_PERIOD_MS) as u16;

/// Three-channel servo output bank
///
/// Channels 0/1/2 map to edge connector pins P8/P12/P16.
pub struct ServoBank<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> ServoBank<'d, T> {
    /// Take ownership of a three-channel PWM and configure servo timing
    #[must_use]
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        pwm.set_prescaler(Prescaler::Div128);
        pwm.set_max_duty(PERIOD_TICKS);
        pwm.enable();
        Self { pwm }
    }

    /// Write one channel's duty value
    pub fn set_channel(&mut self, channel: usize, command: ServoCommand) {
        let ticks =
            u32::from(command.duty.raw()) * u32::from(PERIOD_TICKS) / u32::from(PWM_WRITE_SCALE);
        self.pwm.set_duty(channel, ticks as u16);
    }

    /// Write all three channels
    pub fn set_all(&mut self, commands: &[ServoCommand; SERVO_CHANNELS]) {
        for (channel, command) in commands.iter().enumerate() {
            self.set_channel(channel, *command);
        }
    }

    /// Drive every channel to the failsafe position
    pub fn set_safe(&mut self) {
        self.set_all(&[ServoCommand::safe(); SERVO_CHANNELS]);
    }
}
