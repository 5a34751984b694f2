use crate::models::config::Config;
use anyhow::{Context, Result};
use std::fs::File;

const CONFIG_FILE: &str = "config.yaml";

/// Reads the YAML configuration file.
pub fn read() -> Result<Config> {
    let file = File::open(CONFIG_FILE)
        .with_context(|| format!("could not open {}", CONFIG_FILE))?;

    serde_yaml::from_reader(file)
        .with_context(|| format!("could not parse {}", CONFIG_FILE))
}
