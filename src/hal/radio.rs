//! 2.4 GHz Radio Driver
//!
//! Wraps the nRF52833 radio in IEEE 802.15.4 mode as a fire-and-forget
//! text channel. No acknowledgment, no retransmission: a send either makes
//! it or the next cycle's send supersedes it, and a receive attempt with
//! nothing pending returns empty within the poll tick.

use embassy_nrf::radio::ieee802154::{Packet, Radio};
use embassy_nrf::radio::Instance;
use embassy_time::{with_timeout, Duration};
use heapless::String;

use crate::config::{RADIO_CHANNEL, RADIO_POWER};
use crate::protocol::MAX_MESSAGE_LEN;

/// Map the shared channel number (2400 + n MHz) to the nearest
/// IEEE 802.15.4 channel (11-26, 2405 + 5*(k-11) MHz)
const fn ieee_channel(offset: u8) -> u8 {
    let k = 11 + offset.saturating_sub(5) / 5;
    if k > 26 {
        26
    } else {
        k
    }
}

/// Map the 0-7 power level to dBm
const fn power_dbm(level: u8) -> i8 {
    match level {
        0 => -30,
        1 => -20,
        2 => -16,
        3 => -12,
        4 => -8,
        5 => -4,
        6 => 0,
        _ => 4,
    }
}

/// Unacknowledged text link over the 2.4 GHz radio
pub struct RadioLink<'d, T: Instance> {
    radio: Radio<'d, T>,
}

impl<'d, T: Instance> RadioLink<'d, T> {
    /// Take ownership of the radio and apply the shared link parameters
    #[must_use]
    pub fn new(mut radio: Radio<'d, T>) -> Self {
        radio.set_channel(ieee_channel(RADIO_CHANNEL));
        radio.set_transmission_power(power_dbm(RADIO_POWER));
        Self { radio }
    }

    /// Send one wire message, best-effort
    ///
    /// Messages longer than the payload limit are truncated at the radio
    /// boundary; the codec never produces one.
    pub async fn send(&mut self, message: &str) {
        let bytes = message.as_bytes();
        let len = bytes.len().min(MAX_MESSAGE_LEN);
        let mut packet = Packet::new();
        packet.copy_from_slice(&bytes[..len]);
        let _ = self.radio.try_send(&mut packet).await;
    }

    /// Attempt to receive one message, waiting at most `wait`
    ///
    /// Returns `None` when nothing valid arrives in the window; corrupt
    /// (non-UTF-8) payloads are dropped here the same way undecodable
    /// messages are dropped above.
    pub async fn try_receive(&mut self, wait: Duration) -> Option<String<MAX_MESSAGE_LEN>> {
        let mut packet = Packet::new();
        match with_timeout(wait, self.radio.receive(&mut packet)).await {
            Ok(Ok(())) => {
                let text = core::str::from_utf8(&packet).ok()?;
                let mut message = String::new();
                message.push_str(text).ok()?;
                Some(message)
            }
            _ => None,
        }
    }
}
