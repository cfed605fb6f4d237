//! Meridian - Time Zone Watch Face Firmware
//!
//! Firmware for an RP2040 board driving a 128x64 SH1106 OLED. Every minute
//! the face shows the current UTC time alongside the one time zone where
//! it is five in the afternoon.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;

mod channels;
mod clock;
mod config;
mod sh1106;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// OLED bus speed
const I2C_FREQUENCY: u32 = 400_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Meridian watch face starting...");

    let p = embassy_rp::init(Default::default());

    let config = config::load();

    // OLED on I2C0: GP5 = SCL, GP4 = SDA
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut display: tasks::Display = Sh1106::new(i2c);
    match display.init().await {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }
    if let Err(e) = display.set_contrast(config.display.contrast).await {
        warn!("Failed to set contrast: {:?}", e);
    }
    if let Err(e) = display.set_inverted(config.display.inverted).await {
        warn!("Failed to set inversion: {:?}", e);
    }

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::face_task(config, display)).unwrap();

    info!("All tasks spawned");
}
