//! ESP32 DAC output using the ESP-IDF oneshot driver
//!
//! DAC channel 1 is attached to GPIO25, DAC channel 2 is attached to GPIO26.
//! Therefore the x-probe should be connected to pin 25, and the y-probe to pin 26.
use esp_idf_svc::sys::{
    self, dac_channel_t, dac_oneshot_config_t, dac_oneshot_handle_t, EspError,
    ESP_ERR_INVALID_STATE,
};

use crate::vectrex::channel::{Channel, ChannelOutput};
use crate::vectrex::pins::Pins;

/// Both DAC channels, each live between enable and disable
pub struct EspDac {
    x: Option<dac_oneshot_handle_t>,
    y: Option<dac_oneshot_handle_t>,
}

impl EspDac {
    /// Create the output, no channel is enabled yet
    pub fn new() -> Self {
        EspDac { x: None, y: None }
    }

    /// ESP-IDF channel id for the given channel
    fn channel_id(channel: Channel) -> dac_channel_t {
        match channel {
            Channel::X => sys::dac_channel_t_DAC_CHAN_0,
            Channel::Y => sys::dac_channel_t_DAC_CHAN_1,
        }
    }

    fn handle(&mut self, channel: Channel) -> &mut Option<dac_oneshot_handle_t> {
        match channel {
            Channel::X => &mut self.x,
            Channel::Y => &mut self.y,
        }
    }
}

impl Default for EspDac {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelOutput for EspDac {
    type Error = EspError;

    fn enable_channel(&mut self, channel: Channel) -> Result<(), EspError> {
        if self.handle(channel).is_some() {
            log::warn!("DAC channel {} already enabled", channel);
            return Ok(());
        }

        let config = dac_oneshot_config_t {
            chan_id: Self::channel_id(channel),
        };
        let mut handle: dac_oneshot_handle_t = core::ptr::null_mut();
        sys::esp!(unsafe { sys::dac_oneshot_new_channel(&config, &mut handle) })?;

        log::info!("DAC channel {} enabled on GPIO{}", channel, Pins::gpio(channel));
        *self.handle(channel) = Some(handle);
        Ok(())
    }

    fn disable_channel(&mut self, channel: Channel) -> Result<(), EspError> {
        let Some(handle) = self.handle(channel).take() else {
            return Ok(());
        };

        sys::esp!(unsafe { sys::dac_oneshot_del_channel(handle) })?;
        log::info!("DAC channel {} disabled", channel);
        Ok(())
    }

    fn write_level(&mut self, channel: Channel, level: u8) -> Result<(), EspError> {
        let Some(handle) = *self.handle(channel) else {
            log::error!("Write to DAC channel {} before enabling it", channel);
            return Err(EspError::from_infallible::<ESP_ERR_INVALID_STATE>());
        };

        sys::esp!(unsafe { sys::dac_oneshot_output_voltage(handle, level) })
    }
}

impl Drop for EspDac {
    fn drop(&mut self) {
        for channel in [Channel::X, Channel::Y] {
            if let Err(e) = self.disable_channel(channel) {
                log::error!("Failed to release DAC channel {}: {:?}", channel, e);
            }
        }
    }
}
