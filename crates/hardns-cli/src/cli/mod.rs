//! CLI for hardns.

mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use hardns_core::config::{self, HardnsConfig};
use std::path::PathBuf;

use pipeline::{run_pipeline, RunSettings};

/// Extract domains from a .har file and update dnsmasq.conf file.
#[derive(Debug, Parser)]
#[command(name = "hardns")]
#[command(about = "Extract domains from a .har file and update dnsmasq.conf file.", long_about = None)]
pub struct Cli {
    /// Path to the .har file.
    pub har_file: PathBuf,

    /// Output file to append domains (default: proxy-domains.txt).
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// External IP address to update or append to dnsmasq.conf.
    #[arg(short = 'e', long = "external-ip", value_name = "IP")]
    pub external_ip: Option<String>,

    /// dnsmasq config to update when --external-ip is given (default: dnsmasq.conf).
    #[arg(short = 'c', long = "dnsmasq-conf", value_name = "FILE")]
    pub dnsmasq_conf: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge flags over config-file values (flags win).
    pub fn into_settings(self, cfg: HardnsConfig) -> RunSettings {
        RunSettings {
            har_file: self.har_file,
            output_file: self.output_file.unwrap_or(cfg.output_file),
            external_ip: self.external_ip,
            dnsmasq_conf: self.dnsmasq_conf.unwrap_or(cfg.dnsmasq_conf),
            verbose: self.verbose || cfg.verbose,
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default().context("load config")?;
        let settings = cli.into_settings(cfg);
        tracing::debug!("settings: {:?}", settings);
        run_pipeline(&settings)
    }
}
