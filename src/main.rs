// Host builds only get the stub main below
#![cfg_attr(not(target_os = "espidf"), allow(dead_code))]

#[cfg(target_os = "espidf")]
use embedded_graphics::{
    mono_font::{iso_8859_15::FONT_5X8, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};
#[cfg(target_os = "espidf")]
use embedded_hal::delay::DelayNs;

#[cfg(target_os = "espidf")]
use oscillovectrex::{EspDac, OscilloVectrex, Pins};

/// Full screen rectangle
const OUTER_RECT: ((i16, i16), (i16, i16)) = ((-127, -127), (128, 128));

/// Smaller rectangle (less than half screen)
const INNER_RECT: ((i16, i16), (i16, i16)) = ((-50, -50), (50, 50));

/// Label drawn below the inner rectangle, top-left based embedded-graphics position
const LABEL: &str = "VECTREX";
const LABEL_POSITION: (i32, i32) = (110, 200);

/// Pause between frames, lets FreeRTOS run the idle task and feed the watchdog
const FRAME_YIELD_MS: u32 = 10;

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!(
        "Connect the x-probe to GPIO{} and the y-probe to GPIO{}",
        Pins::DAC_X_GPIO,
        Pins::DAC_Y_GPIO
    );

    let mut vectrex = OscilloVectrex::new(EspDac::new());
    if let Err(e) = vectrex.begin() {
        log::error!("Could not start the DAC channels: {}", e);
        return Err(e.into());
    }

    let label_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
    let label = Text::new(
        LABEL,
        Point::new(LABEL_POSITION.0, LABEL_POSITION.1),
        label_style,
    );

    let mut delay = esp_idf_svc::hal::delay::FreeRtos;
    let mut frames: u32 = 0;

    log::info!("Drawing frames");
    loop {
        vectrex.rect(OUTER_RECT.0, OUTER_RECT.1)?;
        vectrex.rect(INNER_RECT.0, INNER_RECT.1)?;
        label.draw(&mut vectrex)?;

        frames = frames.wrapping_add(1);
        if frames % 1000 == 0 {
            log::debug!("{} frames drawn", frames);
        }

        delay.delay_ms(FRAME_YIELD_MS);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("This firmware drives the ESP32 DAC, build it for an ESP-IDF target")
}
