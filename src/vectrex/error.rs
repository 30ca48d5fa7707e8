//! Driver errors
use crate::vectrex::channel::Channel;

/// Errors raised while moving the beam
///
/// `E` is the error type of the [`ChannelOutput`](crate::vectrex::channel::ChannelOutput)
/// in use.
#[derive(Debug, thiserror::Error)]
pub enum VectrexError<E: core::fmt::Debug> {
    /// A value outside -127..=128 was about to be written
    #[error("value {value} is out of range for channel {channel} (expected -127..=128)")]
    OutOfRange {
        /// Axis the value belongs to
        channel: Channel,
        /// Offending value
        value: i16,
    },

    /// The analog output peripheral failed
    #[error("output on channel {channel} failed: {error:?}")]
    Output {
        /// Channel being accessed
        channel: Channel,
        /// Peripheral error
        error: E,
    },
}

impl<E: core::fmt::Debug> VectrexError<E> {
    /// True for [`VectrexError::OutOfRange`]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, VectrexError::OutOfRange { .. })
    }
}
