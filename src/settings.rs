//! Settings for the `strainer` binary.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `strainer.toml` in the working directory, if present
//! 3. `STRAINER_*` environment variables (`STRAINER_WORKLOAD_ITERATIONS`,
//!    `STRAINER_ROSTER`, `STRAINER_LOG`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ITERATIONS: u64 = 100_000_000;
pub const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub workload_iterations: u64,
    #[serde(default)]
    pub roster: Option<PathBuf>,
    pub log: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from("strainer")
    }

    /// `file` is a path without extension; any format `config` knows is accepted.
    pub fn load_from(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("workload_iterations", DEFAULT_ITERATIONS)?
            .set_default("log", DEFAULT_LOG)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("STRAINER").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { workload_iterations: DEFAULT_ITERATIONS, roster: None, log: DEFAULT_LOG.to_owned() }
    }
}
