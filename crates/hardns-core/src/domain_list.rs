//! Append-only hostname list (`proxy-domains.txt` by default).
//!
//! One hostname per line. Existing lines are never rewritten; hosts not yet
//! listed are appended at the end.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{read_optional, Error, Result};
use crate::HostnameSet;

/// Hosts that were written by [`append_new_hostnames`], in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub appended: Vec<String>,
}

impl AppendOutcome {
    pub fn is_empty(&self) -> bool {
        self.appended.is_empty()
    }
}

/// Hostnames already present in the list file. A missing file is an empty list.
pub fn read_existing(path: &Path) -> Result<HostnameSet> {
    Ok(read_optional(path)?
        .map(|text| parse_list(&text))
        .unwrap_or_default())
}

fn parse_list(text: &str) -> HostnameSet {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Appends every host of `hosts` that the file at `path` does not list yet.
///
/// Writes nothing (and does not create the file) when there is nothing new.
pub fn append_new_hostnames(hosts: &HostnameSet, path: &Path, verbose: bool) -> Result<AppendOutcome> {
    let existing_text = read_optional(path)?;
    let existing = existing_text.as_deref().map(parse_list).unwrap_or_default();

    let new: Vec<&String> = hosts.difference(&existing).collect();
    if new.is_empty() {
        if verbose {
            println!("No new domains to append.");
        }
        tracing::debug!("no new hosts for {}", path.display());
        return Ok(AppendOutcome::default());
    }

    let mut buf = String::new();
    if existing_text
        .as_deref()
        .is_some_and(|t| !t.is_empty() && !t.ends_with('\n'))
    {
        buf.push('\n');
    }
    for host in &new {
        buf.push_str(host);
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::write(path, e))?;
    file.write_all(buf.as_bytes())
        .map_err(|e| Error::write(path, e))?;

    if verbose {
        for host in &new {
            println!("Appended domain to {}: {}", path.display(), host);
        }
    }
    tracing::info!("appended {} hosts to {}", new.len(), path.display());

    Ok(AppendOutcome {
        appended: new.into_iter().cloned().collect(),
    })
}
