//! Configuration System
//!
//! Layered configuration for the dummy store tools. Sources, lowest to highest
//! precedence: built-in defaults, an optional TOML file, then environment
//! variables prefixed with `DUMMY_STORE_` (nested keys separated by `__`, e.g.
//! `DUMMY_STORE_LOGGING__LEVEL=debug`).
//!
//! The root directory is an explicit value handed to
//! [`DummyStore::new`](crate::store::DummyStore::new); nothing here is global.

use crate::error::StoreError;
use crate::fixtures::{Fixtures, RandomFixtures, SequenceFixtures};
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_PREFIX: &str = "DUMMY_STORE";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DummyStoreConfig {
    /// Directory under which stores are generated
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// Fixture selection for generated content
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How generated names and attributes are produced
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed for random fixtures; a fresh seed per run when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Use deterministic "Category #n" / "Item #n" sequences instead of random words
    #[serde(default)]
    pub sequential: bool,
}

impl GenerationConfig {
    pub fn fixtures(&self) -> Box<dyn Fixtures> {
        if self.sequential {
            return Box::new(SequenceFixtures::new());
        }
        match self.seed {
            Some(seed) => Box::new(RandomFixtures::new(seed)),
            None => Box::new(RandomFixtures::from_entropy()),
        }
    }
}

/// Loads [`DummyStoreConfig`] from files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then `path` if given and present, then the environment.
    pub fn load(path: Option<&Path>) -> Result<DummyStoreConfig, StoreError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }
        let config = builder.add_source(env_source()).build()?;
        let config: DummyStoreConfig = config.try_deserialize()?;
        debug!(root_dir = ?config.root_dir, "Configuration loaded");
        Ok(config)
    }

    /// Like [`load`](Self::load) but the file must exist.
    pub fn load_from_file(path: &Path) -> Result<DummyStoreConfig, StoreError> {
        if !path.is_file() {
            return Err(StoreError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(env_source())
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
