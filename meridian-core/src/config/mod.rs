//! Configuration types
//!
//! Board-agnostic watch-face configuration, parsed from the TOML file
//! embedded in the firmware.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
