//! Extract → append → (optionally) rewrite dnsmasq, in that order.

use anyhow::{Context, Result};
use hardns_core::{dnsmasq, domain_list, har};
use std::path::PathBuf;

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub har_file: PathBuf,
    pub output_file: PathBuf,
    pub external_ip: Option<String>,
    pub dnsmasq_conf: PathBuf,
    pub verbose: bool,
}

pub fn run_pipeline(settings: &RunSettings) -> Result<()> {
    let verbose = settings.verbose;
    if verbose {
        println!("Verbose mode enabled.");
    }

    let hosts = har::extract_hostnames(&settings.har_file, verbose)
        .context("extract domains from HAR")?;

    domain_list::append_new_hostnames(&hosts, &settings.output_file, verbose)
        .context("update domain list")?;

    if let Some(ip) = settings.external_ip.as_deref() {
        dnsmasq::update_conf_file(&settings.dnsmasq_conf, ip, &hosts, verbose)
            .context("update dnsmasq config")?;
    }

    Ok(())
}
