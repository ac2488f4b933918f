//! In-memory find-or-append of `address=/<host>/<ipv4>` lines.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// What [`upsert_entry`] did to the config text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryChange {
    /// No line for the host existed; one was appended.
    Added,
    /// At least one existing line now carries the requested address.
    Updated,
    /// Every existing line already pointed at the requested address.
    Unchanged,
}

const ENTRY_PREFIX: &str = "address=/";

/// IPv4-shaped token. Digit groups are not range checked, so `999.1.1.1` matches.
fn ipv4_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("static ipv4 pattern compiles"))
}

/// Byte range of the address in `line` when it reads `address=/<host>/<ipv4>...`.
///
/// The host is compared literally; `line` may carry its trailing newline.
pub fn entry_address_span(line: &str, host: &str) -> Option<Range<usize>> {
    let rest = line
        .strip_prefix(ENTRY_PREFIX)?
        .strip_prefix(host)?
        .strip_prefix('/')?;
    let start = line.len() - rest.len();
    let token = ipv4_token().find(rest)?;
    Some(start..start + token.end())
}

/// The line appended for a host that has no entry yet (without newline).
pub fn entry_line(host: &str, ip: &str, timestamp: &str) -> String {
    format!("{ENTRY_PREFIX}{host}/{ip} ### added on {timestamp} ####")
}

/// Points `host` at `ip` inside `config`.
///
/// Existing lines keep their position and trailing annotation; only the
/// address token is swapped. A missing host gets a fresh annotated line at
/// the end.
pub fn upsert_entry(config: &mut String, host: &str, ip: &str, timestamp: &str) -> EntryChange {
    let mut found = false;
    let mut rewritten = String::with_capacity(config.len());
    for line in config.split_inclusive('\n') {
        match entry_address_span(line, host) {
            Some(span) => {
                found = true;
                rewritten.push_str(&line[..span.start]);
                rewritten.push_str(ip);
                rewritten.push_str(&line[span.end..]);
            }
            None => rewritten.push_str(line),
        }
    }

    if !found {
        if !config.is_empty() && !config.ends_with('\n') {
            config.push('\n');
        }
        config.push_str(&entry_line(host, ip, timestamp));
        config.push('\n');
        return EntryChange::Added;
    }

    if rewritten == *config {
        return EntryChange::Unchanged;
    }
    *config = rewritten;
    EntryChange::Updated
}
