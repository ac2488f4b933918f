//! dnsmasq override updater.
//!
//! Keeps one `address=/<host>/<ip>` line per host pointing at the proxy IP.
//! Lines are matched by literal host name; existing lines are edited in place
//! and new ones are appended with an `### added on <time> ####` annotation.

mod entry;
mod update;

pub use entry::{entry_address_span, entry_line, upsert_entry, EntryChange};
pub use update::{timestamp_now, update_conf_file, ConfSummary};
