//! Wire Protocol
//!
//! Frame encoding/decoding for the radio link. The channel is lossy and
//! unacknowledged, so the codec is built around one rule: a message is
//! applied whole or discarded whole. Truncated messages are tolerated
//! (absent fields default to zero); corrupt values in a recognized field
//! condemn the entire message.

use heapless::String;

use crate::config::RADIO_MESSAGE_LEN;
use crate::types::PotReading;

/// Maximum wire message length (radio payload configuration)
pub const MAX_MESSAGE_LEN: usize = RADIO_MESSAGE_LEN;

/// One sampled transmitter reading
///
/// Produced fresh every transmitter cycle and never retained beyond the
/// cycle that samples (and possibly sends) it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SensorFrame {
    /// Potentiometer 1 reading
    pub pot1: PotReading,
    /// Potentiometer 2 reading
    pub pot2: PotReading,
    /// Potentiometer 3 reading
    pub pot3: PotReading,
    /// Push button state
    pub button: bool,
}

impl SensorFrame {
    /// Create a frame from its fields
    #[must_use]
    pub const fn new(pot1: PotReading, pot2: PotReading, pot3: PotReading, button: bool) -> Self {
        Self {
            pot1,
            pot2,
            pot3,
            button,
        }
    }

    /// Encode the frame as a wire message
    ///
    /// Produces `"P1:{p1},P2:{p2},P3:{p3},BTN:{b}"` with the fields in this
    /// fixed order, integers without leading zeros, and `b` in `{0, 1}`.
    /// The longest possible message (29 bytes) is well inside the radio
    /// payload limit, so the write cannot fail.
    #[must_use]
    pub fn encode(&self) -> String<MAX_MESSAGE_LEN> {
        let mut msg = String::new();
        let _ = core::fmt::write(
            &mut msg,
            format_args!(
                "P1:{},P2:{},P3:{},BTN:{}",
                self.pot1.raw(),
                self.pot2.raw(),
                self.pot3.raw(),
                u8::from(self.button)
            ),
        );
        msg
    }

    /// Decode a wire message into a frame
    ///
    /// Splits on `,` and matches each token against the known prefixes
    /// `P1:`, `P2:`, `P3:`, `BTN:`. Unrecognized tokens are skipped and
    /// absent fields keep their zero/false defaults; both are deliberate
    /// tolerance of truncated or foreign traffic. Numeric payloads of any
    /// magnitude clamp into the field domain; only a non-numeric (or
    /// empty) payload on a recognized prefix fails the whole message.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] naming the first field whose payload failed
    /// to parse. Fields decoded before the failure are discarded with it.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let mut frame = Self::default();
        for token in text.split(',') {
            if let Some(payload) = token.strip_prefix("P1:") {
                frame.pot1 = PotReading::from_wire(parse_value(payload, FrameField::Pot1)?);
            } else if let Some(payload) = token.strip_prefix("P2:") {
                frame.pot2 = PotReading::from_wire(parse_value(payload, FrameField::Pot2)?);
            } else if let Some(payload) = token.strip_prefix("P3:") {
                frame.pot3 = PotReading::from_wire(parse_value(payload, FrameField::Pot3)?);
            } else if let Some(payload) = token.strip_prefix("BTN:") {
                frame.button = parse_value(payload, FrameField::Button)? != 0;
            }
        }
        Ok(frame)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SensorFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Frame({}, {}, {}, btn={})",
            self.pot1,
            self.pot2,
            self.pot3,
            u8::from(self.button)
        );
    }
}

fn parse_value(payload: &str, field: FrameField) -> Result<i64, DecodeError> {
    payload.parse().map_err(|_| DecodeError { field })
}

/// Wire message field identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameField {
    /// Potentiometer 1 (`P1:`)
    Pot1,
    /// Potentiometer 2 (`P2:`)
    Pot2,
    /// Potentiometer 3 (`P3:`)
    Pot3,
    /// Push button (`BTN:`)
    Button,
}

impl FrameField {
    /// Get the wire prefix for this field
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Pot1 => "P1:",
            Self::Pot2 => "P2:",
            Self::Pot3 => "P3:",
            Self::Button => "BTN:",
        }
    }
}

/// Decode failure: a recognized field carried a non-numeric payload
///
/// The receiver drops the entire message on this error; no field parsed
/// before the failure is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    /// The field whose payload failed to parse
    pub field: FrameField,
}

#[cfg(feature = "embedded")]
impl defmt::Format for DecodeError {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DecodeError({})", self.field.prefix());
    }
}
