//! CLI route: single route table and run context. Dispatches to the store and generator.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, ShowFormat};
use crate::cli::presentation::{format_tree_json, format_tree_text, StoreTree};
use crate::config::{ConfigLoader, DummyStoreConfig, GenerationConfig};
use crate::error::StoreError;
use crate::store::DummyStore;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, info_span};

/// Runtime context for CLI execution: resolved configuration and store factory.
pub struct RunContext {
    config: DummyStoreConfig,
    store: DummyStore,
}

impl RunContext {
    /// Load configuration, apply `--root`, and build the store factory.
    pub fn new(root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let mut config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(None)?,
        };
        if root.is_some() {
            config.root_dir = root;
        }
        Self::from_config(config)
    }

    pub fn from_config(config: DummyStoreConfig) -> Result<Self, StoreError> {
        let store = DummyStore::new(&config)?;
        Ok(Self { config, store })
    }

    pub fn store(&self) -> &DummyStore {
        &self.store
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, StoreError> {
        let _span = info_span!("command", name = command_name(command)).entered();
        let start = Instant::now();

        let output = match command {
            Commands::Generate {
                store,
                categories,
                sub_categories,
                items,
                seed,
                sequential,
                wipe,
            } => {
                let generation = GenerationConfig {
                    seed: seed.or(self.config.generation.seed),
                    sequential: *sequential || self.config.generation.sequential,
                };
                self.generate(store, *categories, *sub_categories, *items, &generation, *wipe)?
            }
            Commands::Uri { store } => self.store.uri(store)?,
            Commands::Show { store, format } => {
                if !self.store.root_path(store).exists() {
                    return Err(StoreError::NotFound(self.store.root_path(store)));
                }
                let tree = StoreTree::load(&self.store.open(store)?)?;
                match format {
                    ShowFormat::Text => format_tree_text(&tree),
                    ShowFormat::Json => format_tree_json(&tree)?,
                }
            }
            Commands::Wipe { store: Some(store) } => {
                self.store.wipe_out_store(store)?;
                format!("Wiped store {}", store)
            }
            Commands::Wipe { store: None } => {
                self.store.wipe_out()?;
                format!("Wiped {}", self.store.root_dir().display())
            }
        };

        info!(duration_ms = start.elapsed().as_millis() as u64, "Command finished");
        Ok(output)
    }

    fn generate(
        &self,
        store_name: &str,
        categories: usize,
        sub_categories: usize,
        items: usize,
        generation: &GenerationConfig,
        wipe: bool,
    ) -> Result<String, StoreError> {
        if wipe {
            self.store.wipe_out_store(store_name)?;
        }
        let mut fixtures = generation.fixtures();
        let attributes = self
            .store
            .open(store_name)?
            .generate(categories, fixtures.as_mut())
            .categories()?
            .and(sub_categories)
            .categories()?
            .and(items)
            .items()?;

        info!(
            store = store_name,
            items = attributes.len(),
            "Store generated"
        );
        self.store.uri(store_name)
    }
}
