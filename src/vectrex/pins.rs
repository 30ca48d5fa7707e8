//! Pin definitions for the oscilloscope probes
//!
//! The ESP32 has its two 8-bit DACs on fixed pins, they cannot be remapped.

use crate::vectrex::channel::Channel;

/// Pin configuration constants for the DAC outputs
pub struct Pins;

impl Pins {
    /// DAC channel 1, connect the x-probe here
    pub const DAC_X_GPIO: u8 = 25;
    /// DAC channel 2, connect the y-probe here
    pub const DAC_Y_GPIO: u8 = 26;

    /// GPIO carrying the given channel
    pub const fn gpio(channel: Channel) -> u8 {
        match channel {
            Channel::X => Self::DAC_X_GPIO,
            Channel::Y => Self::DAC_Y_GPIO,
        }
    }
}
