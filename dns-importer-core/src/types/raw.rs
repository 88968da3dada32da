//! Captured record representation.
//!
//! Records arrive in the JSON shape of a generic resource record: a `Hdr`
//! object plus type-specific fields whose presence depends on `Rrtype`.

use serde::{Deserialize, Serialize};

/// One line of the captured records file.
///
/// Only `content` is used; it holds the JSON-encoded [`RawRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope {
    pub content: String,
}

/// Resource record header.
///
/// Bookkeeping fields (`Class`, `Rdlength`) are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHeader {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rrtype")]
    pub rrtype: u16,
    #[serde(rename = "Ttl")]
    pub ttl: u32,
}

/// A captured resource record before decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Hdr")]
    pub header: RecordHeader,
    /// Type-specific fields, keyed as captured (`A`, `Ns`, `Target`, `Txt`, ...).
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Type-specific payload of a supported record.
///
/// Each variant carries exactly what its content string is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Type 1
    A { address: String },
    /// Type 2
    Ns { nameserver: String },
    /// Type 5
    Cname { target: String },
    /// Type 16
    Txt { chunks: Vec<String> },
    /// Type 28
    Aaaa { address: String },
    /// Type 15
    Mx { preference: u16, exchange: String },
}
