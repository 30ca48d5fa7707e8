//! Analog output channels and the level translation
use crate::vectrex::{COORD_MAX, COORD_MIN, LEVEL_OFFSET};

/// One of the two analog outputs positioning the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Horizontal deflection, connect the x-probe here
    X,
    /// Vertical deflection, connect the y-probe here
    Y,
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::X => write!(f, "X"),
            Channel::Y => write!(f, "Y"),
        }
    }
}

/// The connection to the analog output peripheral
///
/// Writes are synchronous: a call returns once the level is on the output.
pub trait ChannelOutput {
    /// Error reported by the peripheral
    type Error: core::fmt::Debug;

    /// Activate analog output on the channel
    fn enable_channel(&mut self, channel: Channel) -> Result<(), Self::Error>;

    /// Deactivate the channel
    fn disable_channel(&mut self, channel: Channel) -> Result<(), Self::Error>;

    /// Output the 8-bit level on the channel immediately
    fn write_level(&mut self, channel: Channel, level: u8) -> Result<(), Self::Error>;
}

impl<T: ChannelOutput + ?Sized> ChannelOutput for &mut T {
    type Error = T::Error;

    fn enable_channel(&mut self, channel: Channel) -> Result<(), Self::Error> {
        T::enable_channel(self, channel)
    }

    fn disable_channel(&mut self, channel: Channel) -> Result<(), Self::Error> {
        T::disable_channel(self, channel)
    }

    fn write_level(&mut self, channel: Channel, level: u8) -> Result<(), Self::Error> {
        T::write_level(self, channel, level)
    }
}

/// Translate a coordinate value into a DAC level
///
/// Adds 127, because the value is -127 to 128 and the level is 0 to 255.
/// Returns `None` outside that range instead of wrapping.
pub fn encode(value: i16) -> Option<u8> {
    if (COORD_MIN..=COORD_MAX).contains(&value) {
        Some((value + LEVEL_OFFSET) as u8)
    } else {
        None
    }
}

/// Translate a DAC level back into a coordinate value
pub fn decode(level: u8) -> i16 {
    i16::from(level) - LEVEL_OFFSET
}
