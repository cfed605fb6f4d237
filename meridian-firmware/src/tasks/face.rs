//! Watch face task
//!
//! Owns the watch face, its screen buffer and the OLED. Draws once at
//! startup, then on every minute tick.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use meridian_core::clock::WallClock;
use meridian_core::config::FaceConfig;
use meridian_core::zones::{offset_label, zone_record};
use meridian_core::Watchface;
use meridian_display::{BackdropStore, FaceScreen};

use crate::channels::MINUTE_TICK;
use crate::clock::wall_clock;
use crate::sh1106::Sh1106;

/// The OLED as wired on the board
pub type Display = Sh1106<I2c<'static, I2C0, Async>>;

/// Face task - applies minute ticks and flushes the result
#[embassy_executor::task]
pub async fn face_task(config: FaceConfig, mut display: Display) {
    info!("Face task started");

    let mut face = Watchface::new(config, BackdropStore::new());
    let mut screen = FaceScreen::new();

    // Draw right away so the face is not blank until the first tick
    refresh(&mut face, &mut screen, &mut display, wall_clock()).await;

    loop {
        let now = MINUTE_TICK.wait().await;
        refresh(&mut face, &mut screen, &mut display, now).await;
    }
}

async fn refresh(
    face: &mut Watchface<BackdropStore>,
    screen: &mut FaceScreen,
    display: &mut Display,
    now: WallClock,
) {
    debug!("UTC hour: {}", now.hour());

    match face.on_minute_tick(now, screen) {
        Ok(report) => {
            debug!("Time zone: {}", report.zone.get());
            if report.swapped {
                let record = zone_record(report.zone);
                info!(
                    "Zone changed: {} ({})",
                    record.name,
                    offset_label(record).as_str()
                );
                debug!("{}, store {}", screen, face.background().store());
            }
        }
        // The text is already updated; a failed swap is retried next tick
        Err(e) => warn!("Face update failed: {:?}", e),
    }

    if screen.is_dirty() {
        if let Err(e) = display.flush(screen.render()).await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
