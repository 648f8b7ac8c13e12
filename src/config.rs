//! Configuration for Postbox
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Postbox instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the backing file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── posts.json       (all posts, rewritten on every mutation)
    pub data_dir: PathBuf,

    /// Sync strategy: whether to fsync after each rewrite
    pub sync_strategy: SyncStrategy,

    /// Insert the two sample posts when the store opens empty
    pub seed_sample_posts: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

/// Backing file sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the file after every rewrite (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS page cache
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./postbox_data"),
            sync_strategy: SyncStrategy::EveryWrite,
            seed_sample_posts: false,
            listen_addr: "0.0.0.0:5002".to_string(),
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
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Seed the sample posts into an empty store on open
    pub fn seed_sample_posts(mut self, seed: bool) -> Self {
        self.config.seed_sample_posts = seed;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
