//! Configuration loading
//!
//! The configuration is compiled into the firmware from watchface.toml and
//! parsed at boot with the no_std parser. The build script has already
//! rejected files this parser cannot read, so the fallback should never run.

use defmt::*;

use meridian_core::config::{parse_config, ClockStyle, FaceConfig};

/// Embedded configuration (compiled into firmware)
/// Edit watchface.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watchface.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load() -> FaceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: {} clock, contrast {}, inverted {}",
                match config.clock.style {
                    ClockStyle::TwelveHour => "12h",
                    ClockStyle::TwentyFourHour => "24h",
                },
                config.display.contrast,
                config.display.inverted
            );
            config
        }
        Err(e) => {
            warn!("Embedded config invalid ({:?}), using defaults", e);
            FaceConfig::default()
        }
    }
}
