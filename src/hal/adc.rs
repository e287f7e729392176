//! SAADC Driver
//!
//! Samples the three potentiometer wipers in one burst. The SAADC runs at
//! 10-bit resolution so raw readings land directly on the `[0, 1023]`
//! domain the protocol carries.

use embassy_nrf::saadc::Saadc;

use crate::types::PotReading;

/// Number of sampled potentiometer channels
pub const POT_CHANNELS: usize = 3;

/// Potentiometer sampler
///
/// Wraps a three-channel SAADC configured by the binary (pins P0/P1/P2 on
/// the edge connector). One `sample` call reads all wipers back-to-back so
/// a frame always carries readings from the same instant.
pub struct PotSampler<'d> {
    saadc: Saadc<'d, POT_CHANNELS>,
}

impl<'d> PotSampler<'d> {
    /// Create a sampler from a configured SAADC
    #[must_use]
    pub fn new(saadc: Saadc<'d, POT_CHANNELS>) -> Self {
        Self { saadc }
    }

    /// Sample all three potentiometers
    ///
    /// SAADC results are signed; tiny negative readings near ground rail
    /// clamp to zero through `PotReading::from_wire`.
    pub async fn sample(&mut self) -> [PotReading; POT_CHANNELS] {
        let mut buf = [0i16; POT_CHANNELS];
        self.saadc.sample(&mut buf).await;
        [
            PotReading::from_wire(i64::from(buf[0])),
            PotReading::from_wire(i64::from(buf[1])),
            PotReading::from_wire(i64::from(buf[2])),
        ]
    }
}
