//! Pure record pipeline stages: decode, route, group.

mod decoder;
mod grouper;
mod router;

pub use decoder::RecordDecoder;
pub use grouper::{group_by_zone, ZoneGroup, ZoneGroups};
pub use router::{ZoneRouter, DEFAULT_ZONE_LABELS};
