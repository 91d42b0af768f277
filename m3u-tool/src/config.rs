use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use m3u_rs::Format;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub default_format: Option<OutputFormat>,
    pub show_duration: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Extended,
    Simple,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Extended => Format::Extended,
            OutputFormat::Simple => Format::Simple,
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Open config {}", path.as_ref().display()))?;
    let config: Config = serde_yaml::from_reader(file)
        .with_context(|| format!("Parse config {}", path.as_ref().display()))?;
    Ok(config)
}

/// Loads the config at `path`, or the defaults when no path is given.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    debug!("Using config: {:?}", config);
    Ok(config)
}
