//! Read-modify-write of the dnsmasq override file.

use std::path::Path;

use crate::error::{Error, Result};
use crate::HostnameSet;

use super::entry::{upsert_entry, EntryChange};

/// Format of the `added on` annotation.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as used in appended entries.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Per-host result of [`update_conf_file`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfSummary {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

/// Makes every host in `hosts` resolve to `ip` in the dnsmasq file at `path`.
///
/// The whole file is edited in memory and written back in one go. The file
/// must already exist; a missing one is a read error and nothing is written.
pub fn update_conf_file(path: &Path, ip: &str, hosts: &HostnameSet, verbose: bool) -> Result<ConfSummary> {
    let mut config = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let timestamp = timestamp_now();
    let mut summary = ConfSummary::default();

    for host in hosts {
        match upsert_entry(&mut config, host, ip, &timestamp) {
            EntryChange::Added => {
                if verbose {
                    println!("Added entry for {} to {}", host, path.display());
                }
                tracing::debug!(host = %host, ip, "added dnsmasq entry");
                summary.added.push(host.clone());
            }
            EntryChange::Updated => {
                if verbose {
                    println!("Updated entry for {} in {}", host, path.display());
                }
                tracing::debug!(host = %host, ip, "updated dnsmasq entry");
                summary.updated.push(host.clone());
            }
            EntryChange::Unchanged => summary.unchanged.push(host.clone()),
        }
    }

    std::fs::write(path, config.as_bytes()).map_err(|e| Error::write(path, e))?;
    if verbose {
        println!("Updated {} to resolve to IP: {}", path.display(), ip);
    }
    tracing::info!(
        "{}: {} added, {} updated, {} unchanged -> {}",
        path.display(),
        summary.added.len(),
        summary.updated.len(),
        summary.unchanged.len(),
        ip
    );

    Ok(summary)
}
