//! Transmitter Node
//!
//! Samples three potentiometers and the external push button every tick,
//! asks the transmit policy whether the frame is worth sending, and radios
//! it. There is no acknowledgment; the keepalive interval and the
//! receiver's failsafe carry the link through loss.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::radio::ieee802154::Radio;
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::{bind_interrupts, peripherals, radio};
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use rc_link_firmware::config::{POLL_TICK_MS, RADIO_CHANNEL};
use rc_link_firmware::hal::adc::PotSampler;
use rc_link_firmware::hal::gpio::ButtonInput;
use rc_link_firmware::hal::radio::RadioLink;
use rc_link_firmware::link::policy::TransmitPolicy;
use rc_link_firmware::protocol::SensorFrame;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    RADIO => radio::InterruptHandler<peripherals::RADIO>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("RC link transmitter v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(embassy_nrf::Config::default());

    // Potentiometer wipers on edge pins P0/P1/P2, sampled at 10 bits so
    // raw readings match the wire domain
    let mut config = saadc::Config::default();
    config.resolution = saadc::Resolution::_10BIT;
    let channels = [
        ChannelConfig::single_ended(p.P0_02),
        ChannelConfig::single_ended(p.P0_03),
        ChannelConfig::single_ended(p.P0_04),
    ];
    let saadc = Saadc::new(p.SAADC, Irqs, config, channels);
    let mut sampler = PotSampler::new(saadc);

    // External button on P5; the internal pull-down keeps it low until
    // pressed
    let mut button = ButtonInput::new(Input::new(p.P0_14, Pull::Down));

    let mut link = RadioLink::new(Radio::new(p.RADIO, Irqs));
    info!("radio up on channel {}", RADIO_CHANNEL);

    let mut policy = TransmitPolicy::new();

    loop {
        let now_ms = Instant::now().as_millis() as u32;
        let [pot1, pot2, pot3] = sampler.sample().await;
        let frame = SensorFrame::new(pot1, pot2, pot3, button.is_pressed());

        if policy.poll(frame, now_ms) {
            link.send(&frame.encode()).await;
        }

        Timer::after(Duration::from_millis(POLL_TICK_MS)).await;
    }
}
