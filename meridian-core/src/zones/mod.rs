//! Time-zone table and resolver
//!
//! Maps the UTC hour to the one of 24 zones where the local time is
//! currently five in the afternoon.

pub mod resolver;
pub mod table;

pub use resolver::{resolve_zone, ZoneIndex, REFERENCE_HOUR, REFERENCE_INDEX};
pub use table::{
    offset_label, zone_record, OffsetLabel, ZoneRecord, OFFSET_LABEL_LEN, OFFSET_PREFIX,
    ZONES, ZONE_COUNT,
};
