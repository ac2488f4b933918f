//! hardns: collect the hosts a browser session talked to and point them at a
//! proxy through dnsmasq overrides.
//!
//! The pipeline is [`har::extract_hostnames`] → [`domain_list::append_new_hostnames`]
//! → optionally [`dnsmasq::update_conf_file`].

use std::collections::BTreeSet;

pub mod config;
pub mod error;
pub mod logging;

pub mod dnsmasq;
pub mod domain_list;
pub mod har;

pub use error::{Error, Result};

/// Distinct hostnames, compared as exact case-sensitive strings.
pub type HostnameSet = BTreeSet<String>;
