//! Line-delimited JSON input parsing.
//!
//! Both input files carry one JSON document per line. Any malformed line
//! fails the whole parse; blank lines are skipped.

use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::types::{RawRecord, RecordEnvelope, SubdomainEntry};

/// Parse every non-blank line of `content` as a `T`.
///
/// `file` is only used in error messages.
pub fn parse_json_lines<T: DeserializeOwned>(file: &str, content: &str) -> CoreResult<Vec<T>> {
    numbered_lines(content)
        .map(|(line, text)| parse_line(file, line, text))
        .collect()
}

/// Parse the captured records file.
///
/// Each line is an envelope whose `content` field is itself a JSON-encoded
/// record, so both layers must parse.
pub fn parse_record_lines(file: &str, content: &str) -> CoreResult<Vec<RawRecord>> {
    numbered_lines(content)
        .map(|(line, text)| {
            let envelope: RecordEnvelope = parse_line(file, line, text)?;
            parse_line(file, line, &envelope.content)
        })
        .collect()
}

/// Parse the subdomains file.
pub fn parse_subdomain_lines(file: &str, content: &str) -> CoreResult<Vec<SubdomainEntry>> {
    parse_json_lines(file, content)
}

fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text))
        .filter(|(_, text)| !text.trim().is_empty())
}

fn parse_line<T: DeserializeOwned>(file: &str, line: usize, text: &str) -> CoreResult<T> {
    serde_json::from_str(text).map_err(|e| CoreError::InputParse {
        file: file.to_string(),
        line,
        detail: e.to_string(),
    })
}
