//! GPIO Abstractions
//!
//! Type-safe wrappers for the push button input and the external
//! indicator LED.

use embassy_nrf::gpio::{Input, Output};

/// External push button (edge connector P5)
///
/// The pin is configured with the internal pull-down by the binary, so an
/// unpressed button reads low.
pub struct ButtonInput<'d> {
    pin: Input<'d>,
}

impl<'d> ButtonInput<'d> {
    /// Create a button wrapper from a configured input pin
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Read the current button state
    #[must_use]
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_high()
    }
}

/// External indicator LED (edge connector P14)
pub struct IndicatorLed<'d> {
    pin: Output<'d>,
    lit: bool,
}

impl<'d> IndicatorLed<'d> {
    /// Create an LED wrapper from a configured output pin (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, lit: false }
    }

    /// Drive the LED to the given state
    pub fn set(&mut self, lit: bool) {
        if lit {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.lit = lit;
    }

    /// Get the current LED state
    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}
