//! Subprocess execution with a bounded runtime.

use std::process::Stdio;

use tokio::process::Command;

use crate::error::{AuthorityError, Result};
use crate::traits::{AuthorityErrorMapper, RawCommandError};

use super::PdnsUtilAuthority;

/// Result of a process that ran to completion.
#[derive(Debug)]
pub(super) enum CommandOutcome {
    Success,
    Failure(RawCommandError),
}

impl PdnsUtilAuthority {
    /// Run the tool once.
    ///
    /// Spawn failures become [`AuthorityError::Unavailable`]; exceeding the
    /// timeout kills the child and yields [`AuthorityError::Timeout`]. Once the
    /// child is running, any other failure only affects this invocation.
    pub(super) async fn run(&self, operation: &str, args: &[String]) -> Result<CommandOutcome> {
        log::debug!("Running {} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AuthorityError::Unavailable {
                authority: self.authority_name().to_string(),
                detail: format!("failed to launch '{}': {e}", self.program),
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(self.output_error(&e)),
            Err(_) => {
                return Err(AuthorityError::Timeout {
                    authority: self.authority_name().to_string(),
                    operation: operation.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        if output.status.success() {
            return Ok(CommandOutcome::Success);
        }

        let mut message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if !stdout.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(stdout);
        }

        Ok(CommandOutcome::Failure(RawCommandError::new(
            output.status.code(),
            message,
        )))
    }

    /// The child was launched but its output could not be collected.
    fn output_error(&self, e: &std::io::Error) -> AuthorityError {
        self.rejected(RawCommandError::new(
            None,
            format!("failed to collect output of '{}': {e}", self.program),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn output_collection_failure_is_not_fatal() {
        let authority =
            PdnsUtilAuthority::new("pdnsutil".to_string(), Vec::new(), Duration::from_secs(1));
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");

        let err = authority.output_error(&io);

        assert!(!err.is_fatal());
        assert!(matches!(
            err,
            AuthorityError::Rejected { exit_code: None, ref raw_message, .. }
                if raw_message.contains("broken pipe")
        ));
    }
}
