use crate::config::Config;
use anyhow::Result;
use catchlog_engine::CatchStore;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation context: resolves the data directory, lazily loads the
/// config, and opens the catch store on demand. Each command opens the
/// store once and owns it for the duration of the invocation.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }

    pub fn data_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir.join(self.config()?.data_file()))
    }

    pub fn open_store(&self) -> Result<CatchStore> {
        CatchStore::load(self.data_file()?)
    }
}
