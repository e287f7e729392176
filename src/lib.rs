//! RC Link Firmware Library
//!
//! This library provides the core functionality for a two-node wireless
//! remote-control link running on the micro:bit v2 (nRF52833). One node
//! samples three potentiometers and a push button and radios their state;
//! the other decodes that state, drives three servos and an indicator LED,
//! and falls back to a safe position when the link goes quiet.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Transmitter Loop  │  Receiver Loop  │  Telemetry Output     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     CONTROL LAYER                            │
//! │  Transmit Policy │ Link State Machine │ Servo Mapping        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  SAADC  │  PWM  │  2.4GHz Radio  │  UART  │  GPIO            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: Custom types enforce invariants at compile time
//! - **No unsafe in application code**: All unsafe isolated in HAL layers
//! - **Functional core, imperative shell**: Pure logic separated from I/O
//! - **Explicit error handling**: All fallible operations return `Result`
//! - **Degrade to safe**: link silence forces actuators to a defined
//!   minimum-angle position rather than holding the last command
//!
//! The control layer is `no_std`-clean and compiles for the host with the
//! `std` feature, so every protocol and state-machine property is tested
//! off-target.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_nrf;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over nRF52833 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Wire Protocol
///
/// Frame encoding/decoding for the lossy, unacknowledged radio channel.
pub mod protocol;

/// Servo Mapping
///
/// Pure potentiometer-to-angle and angle-to-duty calibration functions.
pub mod servo;

/// Link Control Logic
///
/// Transmit policy and the receiver's connection-loss state machine.
pub mod link;

/// Telemetry Output
///
/// Status line and system event formatting for the downstream collector.
pub mod telemetry;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::{InputPin, OutputPin};

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
