//! Record decoding: raw type-tagged records to canonical content strings.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::pipeline::ZoneRouter;
use crate::types::{CanonicalRecord, DnsRecordType, RawRecord, RecordBody};

impl RecordBody {
    /// Extract the type-specific payload for `raw.header.rrtype`.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, DecodeError> {
        let fields = &raw.fields;
        match raw.header.rrtype {
            1 => Ok(Self::A {
                address: field(fields, DnsRecordType::A, "A")?,
            }),
            2 => Ok(Self::Ns {
                nameserver: field(fields, DnsRecordType::Ns, "Ns")?,
            }),
            5 => Ok(Self::Cname {
                target: field(fields, DnsRecordType::Cname, "Target")?,
            }),
            16 => Ok(Self::Txt {
                chunks: field(fields, DnsRecordType::Txt, "Txt")?,
            }),
            28 => Ok(Self::Aaaa {
                address: field(fields, DnsRecordType::Aaaa, "AAAA")?,
            }),
            15 => Ok(Self::Mx {
                preference: field(fields, DnsRecordType::Mx, "Preference")?,
                exchange: field(fields, DnsRecordType::Mx, "Mx")?,
            }),
            other => Err(DecodeError::UnknownRecordType(other)),
        }
    }

    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::Ns { .. } => DnsRecordType::Ns,
            Self::Cname { .. } => DnsRecordType::Cname,
            Self::Txt { .. } => DnsRecordType::Txt,
            Self::Aaaa { .. } => DnsRecordType::Aaaa,
            Self::Mx { .. } => DnsRecordType::Mx,
        }
    }

    /// Content string in the zone tool's presentation format.
    pub fn into_content(self) -> String {
        match self {
            Self::A { address } | Self::Aaaa { address } => address,
            Self::Ns { nameserver } => nameserver,
            Self::Cname { target } => target,
            Self::Txt { chunks } => format!("\"{}\"", chunks.concat()),
            Self::Mx {
                preference,
                exchange,
            } => format!("{preference} {exchange}"),
        }
    }
}

fn field<T: DeserializeOwned>(
    fields: &serde_json::Map<String, serde_json::Value>,
    record_type: DnsRecordType,
    name: &'static str,
) -> Result<T, DecodeError> {
    let value = fields.get(name).ok_or(DecodeError::MissingField {
        record_type,
        field: name,
    })?;
    serde_json::from_value(value.clone()).map_err(|e| DecodeError::MalformedField {
        record_type,
        field: name,
        detail: e.to_string(),
    })
}

/// Converts raw records into [`CanonicalRecord`]s, tagging each with its zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder {
    router: ZoneRouter,
}

impl RecordDecoder {
    #[must_use]
    pub fn new(router: ZoneRouter) -> Self {
        Self { router }
    }

    pub fn decode(&self, raw: &RawRecord) -> Result<CanonicalRecord, DecodeError> {
        let body = RecordBody::from_raw(raw)?;
        Ok(CanonicalRecord {
            name: raw.header.name.clone(),
            zone: self.router.zone_of(&raw.header.name),
            record_type: body.record_type(),
            ttl: raw.header.ttl,
            content: body.into_content(),
        })
    }
}
