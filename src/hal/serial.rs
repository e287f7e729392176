//! UART Telemetry Port
//!
//! Carries status and event lines to the downstream collector over the
//! interface-chip serial port. Output only; nothing external mutates the
//! receiver through this port.

use embassy_nrf::uarte::{Instance, UarteTx};

/// Line-oriented telemetry output
pub struct TelemetryPort<'d, T: Instance> {
    tx: UarteTx<'d, T>,
}

impl<'d, T: Instance> TelemetryPort<'d, T> {
    /// Create a port from a configured UART transmitter
    #[must_use]
    pub fn new(tx: UarteTx<'d, T>) -> Self {
        Self { tx }
    }

    /// Write one line, terminated for the collector
    ///
    /// Write failures are swallowed: telemetry is best-effort and must
    /// never stall the control loop.
    pub async fn write_line(&mut self, line: &str) {
        let _ = self.tx.write(line.as_bytes()).await;
        let _ = self.tx.write(b"\r\n").await;
    }
}
