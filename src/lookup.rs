//! DNS lookup worker.
//!
//! One short-lived task per query: build a resolver, run a single lookup, and
//! hand the formatted outcome back to the window over a channel. Every failure
//! folds into one `Error: `-prefixed message; timeouts are whatever the
//! resolver defaults to.

use std::net::IpAddr;
use std::sync::mpsc::{self, Receiver};

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;
use tracing::{debug, warn};

use crate::types::{LookupOutcome, LookupRequest};

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid nameserver address: {0}")]
    InvalidNameserver(String),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Starts a lookup on the runtime and returns the receiver the window polls.
///
/// The task requests a repaint once the outcome is queued so the result shows
/// up without waiting for another input event.
pub fn spawn(
    runtime: &tokio::runtime::Handle,
    request: LookupRequest,
    ctx: egui::Context,
) -> Receiver<LookupOutcome> {
    let (tx, rx) = mpsc::channel();
    runtime.spawn(async move {
        let outcome = run(request).await;
        if tx.send(outcome).is_err() {
            warn!("lookup finished after the window dropped its receiver");
        }
        ctx.request_repaint();
    });
    rx
}

/// Runs a single query to completion.
pub async fn run(request: LookupRequest) -> LookupOutcome {
    match execute(&request).await {
        Ok(text) => LookupOutcome::Success(text),
        Err(e) => LookupOutcome::Failure(format!("Error: {e}")),
    }
}

async fn execute(request: &LookupRequest) -> Result<String, LookupError> {
    let resolver = build_resolver(request.nameserver.as_deref())?;

    debug!(
        domain = %request.domain,
        record_type = %request.record_type,
        "sending query"
    );
    let lookup = resolver
        .lookup(request.domain.as_str(), request.record_type)
        .await?;

    Ok(format_results(
        &request.domain,
        request.record_type,
        lookup.iter().map(|record| record.to_string()),
    ))
}

fn build_resolver(nameserver: Option<&str>) -> Result<TokioAsyncResolver, LookupError> {
    match nameserver {
        Some(address) => {
            let ip: IpAddr = address
                .parse()
                .map_err(|_| LookupError::InvalidNameserver(address.to_string()))?;
            let servers = NameServerConfigGroup::from_ips_clear(&[ip], 53, true);
            let config = ResolverConfig::from_parts(None, Vec::new(), servers);
            Ok(TokioAsyncResolver::tokio(config, ResolverOpts::default()))
        }
        None => Ok(TokioAsyncResolver::tokio_from_system_conf()?),
    }
}

/// Header, fixed-width separator, then one line per record in resolver order.
fn format_results(
    domain: &str,
    record_type: RecordType,
    records: impl Iterator<Item = String>,
) -> String {
    let mut out = format!("\nQuery Results for {domain} ({record_type}):\n");
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for record in records {
        out.push_str(&record);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_header_separator_and_records() {
        let records = vec!["93.184.215.14".to_string(), "93.184.215.15".to_string()];
        let text = format_results("example.com", RecordType::A, records.into_iter());

        let separator = "=".repeat(50);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Query Results for example.com (A):"));
        assert_eq!(lines.next(), Some(separator.as_str()));
        assert_eq!(lines.next(), Some("93.184.215.14"));
        assert_eq!(lines.next(), Some("93.184.215.15"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_answer_keeps_header_and_separator() {
        let text = format_results("example.com", RecordType::TXT, std::iter::empty());
        assert!(text.contains("Query Results for example.com (TXT):"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn unparseable_nameserver_is_rejected() {
        let err = build_resolver(Some("not-an-ip")).unwrap_err();
        assert!(matches!(err, LookupError::InvalidNameserver(_)));
        assert_eq!(err.to_string(), "invalid nameserver address: not-an-ip");
    }

    #[tokio::test]
    async fn failure_outcome_carries_error_prefix() {
        let request = LookupRequest {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            nameserver: Some("bogus".to_string()),
        };

        match run(request).await {
            LookupOutcome::Failure(text) => {
                assert!(text.starts_with("Error: "));
                assert!(text.len() > "Error: ".len());
            }
            LookupOutcome::Success(text) => panic!("expected a failure, got: {text}"),
        }
    }
}
