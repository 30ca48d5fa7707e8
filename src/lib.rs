//! Oscilloscope vector display driven by the ESP32 DAC
pub mod vectrex;

#[cfg(target_os = "espidf")]
pub mod dac;

pub use crate::vectrex::channel::{Channel, ChannelOutput};
pub use crate::vectrex::coord::Coord;
pub use crate::vectrex::driver::{DrawResult, OscilloVectrex};
pub use crate::vectrex::error::VectrexError;
pub use crate::vectrex::pins::Pins;

#[cfg(target_os = "espidf")]
pub use crate::dac::EspDac;
