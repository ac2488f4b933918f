use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{read_optional, Error, Result};

/// Domain list written when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_FILE: &str = "proxy-domains.txt";
/// dnsmasq override file, relative to the working directory.
pub const DEFAULT_DNSMASQ_CONF: &str = "dnsmasq.conf";

/// Optional defaults loaded from `~/.config/hardns/config.toml`.
///
/// CLI flags always override these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HardnsConfig {
    /// Append-only hostname list.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// dnsmasq file updated when an external IP is given.
    #[serde(default = "default_dnsmasq_conf")]
    pub dnsmasq_conf: PathBuf,
    /// Print per-step diagnostics.
    #[serde(default)]
    pub verbose: bool,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_dnsmasq_conf() -> PathBuf {
    PathBuf::from(DEFAULT_DNSMASQ_CONF)
}

impl Default for HardnsConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            dnsmasq_conf: default_dnsmasq_conf(),
            verbose: false,
        }
    }
}

/// `~/.config/hardns/config.toml`, or `None` when no home/XDG dirs are known.
pub fn config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hardns").ok()?;
    Some(xdg_dirs.get_config_home().join("hardns").join("config.toml"))
}

/// Parse a config file; a missing file yields the defaults.
pub fn load_from_path(path: &Path) -> Result<HardnsConfig> {
    match read_optional(path)? {
        Some(data) => toml::from_str(&data).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(HardnsConfig::default()),
    }
}

/// Load the user config if there is one. Never creates the file.
pub fn load_or_default() -> Result<HardnsConfig> {
    match config_path() {
        Some(path) => {
            let cfg = load_from_path(&path)?;
            tracing::debug!("config from {}: {:?}", path.display(), cfg);
            Ok(cfg)
        }
        None => Ok(HardnsConfig::default()),
    }
}
