//! Zone authority implementations

mod pdnsutil;

pub use pdnsutil::PdnsUtilAuthority;
