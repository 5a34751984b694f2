use serde::Deserialize;

/// The data in the configuration file for setting up Verba.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub port: Option<u16>,
}
