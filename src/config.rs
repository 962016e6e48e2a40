//! Configuration file support
//!
//! Settings come from a TOML file. Lookup order: an explicit path, then
//! `$CAPTABLE_CONFIG`, then `<config dir>/captable/config.toml`. Missing
//! files in the implicit locations fall back to defaults.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::reports::ZeroSharesPolicy;

pub const CONFIG_ENV_VAR: &str = "CAPTABLE_CONFIG";
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the JSON report is written
    pub output: PathBuf,
    /// Pretty-print the JSON report
    pub pretty: bool,
    /// CSV field delimiter
    pub delimiter: char,
    pub zero_shares: ZeroSharesPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: false,
            delimiter: ',',
            zero_shares: ZeroSharesPolicy::Fail,
        }
    }
}

impl Config {
    /// Resolve and load the configuration
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {:?}", path);
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// The delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        u8::try_from(self.delimiter).map_err(|e| anyhow!("invalid delimiter: {}", e))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join("captable").join("config.toml"))
}
