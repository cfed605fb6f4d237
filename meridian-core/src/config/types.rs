//! Configuration type definitions
//!
//! These types represent the watch-face configuration. The firmware
//! embeds a TOML file; the build script deserializes it with serde to
//! reject bad files early, and the firmware parses it again at boot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::clock::ClockStyle;

/// Default display contrast (SH1106 reset value is 0x80; brighter reads better)
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// Clock section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ClockConfig {
    /// 12-hour or 24-hour time label
    pub style: ClockStyle,
}

/// Display section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Panel contrast (0-255)
    pub contrast: u8,
    /// Light background with dark text
    pub inverted: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            inverted: false,
        }
    }
}

/// Complete watch-face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FaceConfig {
    pub clock: ClockConfig,
    pub display: DisplayConfig,
}
