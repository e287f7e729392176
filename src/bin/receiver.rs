//! Receiver Node
//!
//! Listens for frames from the transmitter, drives the three servos and
//! the indicator LED, reports each accepted frame on the telemetry port,
//! and falls back to the safe servo position when the link goes quiet.

#![no_std]
#![no_main]

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::radio::ieee802154::Radio;
use embassy_nrf::uarte::{self, UarteTx};
use embassy_nrf::{bind_interrupts, peripherals, radio};
use embassy_time::{Duration, Instant};
use {defmt_rtt as _, panic_probe as _};

use rc_link_firmware::config::{POLL_TICK_MS, RADIO_CHANNEL};
use rc_link_firmware::hal::gpio::IndicatorLed;
use rc_link_firmware::hal::pwm::ServoBank;
use rc_link_firmware::hal::radio::RadioLink;
use rc_link_firmware::hal::serial::TelemetryPort;
use rc_link_firmware::link::receiver::Receiver;
use rc_link_firmware::telemetry::{status_line, SystemEvent};

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    RADIO => radio::InterruptHandler<peripherals::RADIO>;
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RC link receiver v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(embassy_nrf::Config::default());

    // Servo signal wires on edge pins P8/P12/P16, one PWM peripheral
    let pwm = SimplePwm::new_3ch(p.PWM0, p.P0_10, p.P0_12, p.P1_02);
    let mut servos = ServoBank::new(pwm);

    // External LED on P14
    let mut led = IndicatorLed::new(Output::new(p.P0_01, Level::Low, OutputDrive::Standard));

    // Telemetry lines go out over the interface-chip serial port
    let tx = UarteTx::new(p.UARTE0, Irqs, p.P0_06, uarte::Config::default());
    let mut telemetry = TelemetryPort::new(tx);

    let mut link = RadioLink::new(Radio::new(p.RADIO, Irqs));
    info!("radio up on channel {}", RADIO_CHANNEL);

    let mut receiver = Receiver::new();

    // Known mechanical state before the first frame arrives
    servos.set_safe();
    led.set(false);
    telemetry.write_line(SystemEvent::ReceiverInit.as_str()).await;
    telemetry
        .write_line(SystemEvent::RadioReceiverReady.as_str())
        .await;

    loop {
        let now_ms = Instant::now().as_millis() as u32;

        if let Some(message) = link.try_receive(Duration::from_millis(POLL_TICK_MS)).await {
            match receiver.handle_message(&message, now_ms) {
                Ok(snapshot) => {
                    servos.set_all(&snapshot.servos);
                    led.set(snapshot.led_on);
                    telemetry.write_line(&status_line(snapshot)).await;
                }
                // Accept whole or discard whole: a bad message writes nothing
                Err(err) => debug!("dropped message: {}", err),
            }
        }

        if receiver.check_link(now_ms) {
            let snapshot = receiver.snapshot();
            servos.set_all(&snapshot.servos);
            led.set(snapshot.led_on);
            telemetry
                .write_line(SystemEvent::ConnectionLost.as_str())
                .await;
            telemetry
                .write_line(SystemEvent::AllServosToZero.as_str())
                .await;
        }
    }
}
