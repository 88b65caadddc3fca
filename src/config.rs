//! Configuration for TreeKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, TreeKvError};

/// Main configuration for a TreeKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Snapshot file written by `save` and read by `reload`
    pub data_path: PathBuf,

    /// Load `data_path` in `Store::open` when the file exists
    pub load_on_open: bool,

    // -------------------------------------------------------------------------
    // I/O Configuration
    // -------------------------------------------------------------------------
    /// Capacity of the buffered reader/writer used for snapshots (in bytes)
    pub io_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data.bin"),
            load_on_open: true,
            io_buffer_size: 64 * 1024, // 64 KB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Whether `Store::open` loads an existing snapshot
    pub fn load_on_open(mut self, load: bool) -> Self {
        self.config.load_on_open = load;
        self
    }

    /// Set the snapshot I/O buffer size (in bytes)
    pub fn io_buffer_size(mut self, size: usize) -> Self {
        self.config.io_buffer_size = size;
        self
    }

    /// Validate and build
    pub fn try_build(self) -> Result<Config> {
        if self.config.io_buffer_size == 0 {
            return Err(TreeKvError::Config(
                "io_buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.config.data_path.as_os_str().is_empty() {
            return Err(TreeKvError::Config("data_path must not be empty".to_string()));
        }
        Ok(self.config)
    }

    /// Build without validation
    pub fn build(self) -> Config {
        self.config
    }
}
