//! Hardware Abstraction Layer
//!
//! Safe abstractions over the nRF52833 peripherals used by the two nodes:
//! SAADC potentiometer sampling, button and LED GPIO, servo PWM, the
//! 2.4 GHz radio, and the UART telemetry port.

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod radio;
pub mod serial;
