//! Utility functions

pub mod input;

pub use input::{parse_json_lines, parse_record_lines, parse_subdomain_lines};
