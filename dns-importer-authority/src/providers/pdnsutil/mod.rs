//! PowerDNS authority driven through the `pdnsutil` command-line tool.

mod command;
mod error;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{AuthorityErrorMapper, ErrorContext, ZoneAuthority};
use crate::types::{CanonicalRecord, ZoneCreation};

use command::CommandOutcome;

/// Runs one `pdnsutil` process per mutation.
pub struct PdnsUtilAuthority {
    program: String,
    base_args: Vec<String>,
    timeout: Duration,
}

impl PdnsUtilAuthority {
    pub(crate) const NAME: &'static str = "pdnsutil";

    /// Create an authority that runs `<program> <base_args...> <subcommand> ...`.
    pub fn new(program: String, base_args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program,
            base_args,
            timeout,
        }
    }

    fn args(&self, subcommand: &str, rest: &[&str]) -> Vec<String> {
        self.base_args
            .iter()
            .cloned()
            .chain(std::iter::once(subcommand.to_string()))
            .chain(rest.iter().map(|s| (*s).to_string()))
            .collect()
    }
}

#[async_trait]
impl ZoneAuthority for PdnsUtilAuthority {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    async fn create_zone(&self, zone: &str) -> Result<ZoneCreation> {
        let args = self.args("create-zone", &[zone]);
        match self.run("create-zone", &args).await? {
            CommandOutcome::Success => Ok(ZoneCreation::Created),
            CommandOutcome::Failure(raw) if error::is_zone_exists(&raw.message) => {
                log::debug!("Zone {zone} already exists: {}", raw.message);
                Ok(ZoneCreation::AlreadyExists)
            }
            CommandOutcome::Failure(raw) => Err(self.map_error(
                raw,
                ErrorContext {
                    zone: Some(zone.to_string()),
                    ..ErrorContext::default()
                },
            )),
        }
    }

    async fn add_record(&self, record: &CanonicalRecord) -> Result<()> {
        let ttl = record.ttl.to_string();
        let args = self.args(
            "add-record",
            &[
                &record.zone,
                &record.name,
                record.record_type.as_str(),
                &ttl,
                &record.content,
            ],
        );
        match self.run("add-record", &args).await? {
            CommandOutcome::Success => Ok(()),
            CommandOutcome::Failure(raw) => Err(self.map_error(
                raw,
                ErrorContext {
                    record_name: Some(record.name.clone()),
                    zone: Some(record.zone.clone()),
                },
            )),
        }
    }
}
