//! Configuration for BisectKV
//!
//! Centralized configuration with sensible defaults.

/// Configuration for a deterministically populated table
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Population Configuration
    // -------------------------------------------------------------------------
    /// Number of entries the table is populated with
    ///
    /// Entry `i` receives `key = i`; a count of zero yields an empty table
    /// against which every lookup misses.
    pub entry_count: usize,

    /// Multiplier applied to each index to produce its data value
    /// (`data = i * data_multiplier`)
    pub data_multiplier: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_count: 100,
            data_multiplier: 123,
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
    /// Set the number of entries to populate
    pub fn entry_count(mut self, count: usize) -> Self {
        self.config.entry_count = count;
        self
    }

    /// Set the data multiplier
    pub fn data_multiplier(mut self, multiplier: i64) -> Self {
        self.config.data_multiplier = multiplier;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
