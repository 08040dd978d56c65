//! Configuration at ~/.config/drunksched/config.toml
//!
//! Every key can be overridden with a `DRUNKSCHED_` environment variable,
//! e.g. `DRUNKSCHED_DATA_DIR` or `DRUNKSCHED_LISTEN`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{SchedError, SchedResult};
use crate::store::{EventStore, FileStore, MemoryStore};

static DEFAULT_DATA_DIR: &str = "~/.local/share/drunksched";
static DEFAULT_LISTEN: &str = "127.0.0.1:3001";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3001))
}

/// Where events are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    #[serde(default)]
    pub store: StoreKind,
}

impl Default for SchedConfig {
    fn default() -> Self {
        SchedConfig {
            data_dir: default_data_dir(),
            listen: default_listen(),
            store: StoreKind::default(),
        }
    }
}

impl SchedConfig {
    pub fn config_path() -> SchedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedError::Config("Could not determine config directory".into()))?
            .join("drunksched");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default file first if
    /// there is none.
    pub fn load() -> SchedResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> SchedResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DRUNKSCHED"))
            .build()
            .map_err(|e| SchedError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SchedError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn open_store(&self) -> SchedResult<Arc<dyn EventStore>> {
        match self.store {
            StoreKind::File => Ok(Arc::new(FileStore::open(self.data_path())?)),
            StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SchedResult<()> {
        let contents = format!(
            "\
# drunksched configuration

# Where events are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Address the HTTP server listens on:
# listen = \"{DEFAULT_LISTEN}\"

# \"file\" keeps events in data_dir, \"memory\" forgets them on exit:
# store = \"file\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SchedError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SchedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
