//! Pull the authority part out of every recorded request URL.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::HostnameSet;

use super::parse::HarLog;

/// `http://` or `https://` at the start, then everything up to the next `/`.
const HOST_PATTERN: &str = r"^https?://([^/]+)";

fn host_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HOST_PATTERN).expect("static host pattern compiles"))
}

/// Returns the hostname (with port, if any) of an HTTP(S) URL.
///
/// No normalisation: case and port are kept as recorded. Non-HTTP schemes and
/// URLs without an authority yield `None`.
pub fn hostname_from_url(url: &str) -> Option<&str> {
    host_regex()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Collects the distinct hostnames of every entry in an already parsed HAR.
pub fn hostnames_from_har(har: &HarLog, verbose: bool) -> HostnameSet {
    let mut hosts = HostnameSet::new();
    for entry in &har.log.entries {
        let url = entry.request.url.as_str();
        match hostname_from_url(url) {
            Some(host) => {
                if verbose {
                    println!("Extracted domain: {host}");
                }
                hosts.insert(host.to_string());
            }
            None => tracing::debug!(url, "skipping HAR entry without http(s) host"),
        }
    }
    hosts
}

/// Reads a HAR file and returns the set of hostnames its requests touched.
///
/// Invalid JSON or a missing `log.entries[*].request.url` is an
/// [`Error::MalformedInput`]; entries whose URL is not HTTP(S) are skipped.
pub fn extract_hostnames(path: &Path, verbose: bool) -> Result<HostnameSet> {
    let bytes = std::fs::read(path).map_err(|e| Error::read(path, e))?;
    let har: HarLog = serde_json::from_slice(&bytes).map_err(|source| Error::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;

    let hosts = hostnames_from_har(&har, verbose);
    tracing::info!(
        "extracted {} hosts from {} HAR entries in {}",
        hosts.len(),
        har.log.entries.len(),
        path.display()
    );
    Ok(hosts)
}
