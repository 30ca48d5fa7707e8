//! OscilloVectrex vector display driver
//!
//! Turns an analog-input oscilloscope into a vector monitor. The beam is steered by
//! two DAC channels, X on GPIO25 and Y on GPIO26 (see [`pins::Pins`]).
//!
//! ### Screen layout
//!
//! Center of screen is coord(0,0). Bottom-left is (-127,-127), top-right is (128,128).
//!
//! ```text
//!     -127           0           128
//!  128  +------------+------------+ 128
//!       |            |            |
//!       |            | (0,0)      |
//!    0  +------------+------------+ 0
//!       |            |            |
//!       |            |            |
//!  -127 +------------+------------+ -127
//!     -127           0           128
//! ```
//!
//! ### Usage
//!
//! 1. wrap a [`channel::ChannelOutput`] in [`driver::OscilloVectrex`]
//! 1. call [`driver::OscilloVectrex::begin`] once to enable both channels
//! 1. draw with `move_to`, `line`, `rect`, `arc` or any
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics) drawable
//!
//! Every write to a channel costs settling time and leaves a visible trace, so the
//! driver skips writes whenever the level would not change.
#![deny(missing_docs)]

pub mod channel;
pub mod coord;
pub mod driver;
pub mod error;
pub mod graphics;
pub mod pins;

#[cfg(test)]
pub(crate) mod mock;

/// Lowest coordinate value on either axis
pub const COORD_MIN: i16 = -127;

/// Highest coordinate value on either axis
pub const COORD_MAX: i16 = 128;

/// Added to a coordinate to get the 8-bit DAC level
pub const LEVEL_OFFSET: i16 = 127;

/// Number of distinct levels per axis
pub const LEVELS: u32 = 256;
