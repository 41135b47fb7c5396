//! Configuration system for the memory simulator.
//!
//! This module defines all configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** baseline constants (cache capacity, RAM ceiling, strategy knobs).
//! 2. **Structures:** hierarchical config for the cache store, backing store, and prefetcher.
//! 3. **Selection:** the [`PrefetcherKind`] enum the strategy factory matches on.
//!
//! Configuration is supplied via JSON (see [`Config::from_json_file`]) or use
//! `Config::default()` for the CLI's built-in baseline. Every field carries a
//! serde default, so partial config files work.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cache store capacity in entries.
    ///
    /// The cache is entry-count bounded, not byte bounded; 128 entries
    /// matches the reference trace runs this tool was built around.
    pub const CACHE_CAPACITY: usize = 128;

    /// Backing store ceiling in megabytes.
    pub const RAM_SIZE_MB: usize = 2048;

    /// Fixed prediction offset for the best-offset strategy, in bytes.
    pub const PREFETCH_OFFSET: u64 = 64;

    /// Number of recent addresses forming a reinforcement-learning state.
    pub const RL_STATE_SIZE: usize = 4;

    /// Number of candidate offsets the reinforcement learner chooses among.
    pub const RL_ACTION_SPACE: usize = 16;

    /// Exploration rate for the epsilon-greedy policy.
    pub const RL_EPSILON: f64 = 0.1;

    /// Learning rate for the temporal-difference update.
    pub const RL_ALPHA: f64 = 0.1;

    /// Discount factor for the temporal-difference update.
    pub const RL_GAMMA: f64 = 0.9;

    /// Seed for the exploration PRNG. Fixed so replays are bit-identical.
    pub const RL_SEED: u64 = 123_456_789;
}

/// Prefetch strategy selection.
///
/// Strategies are selected once at construction and held behind the
/// [`Prefetcher`](crate::prefetch::Prefetcher) trait; call sites never branch
/// on identity.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrefetcherKind {
    /// No prefetching; misses fall through unaided.
    #[default]
    None,
    /// Two-access warm-up stride detector.
    Stride,
    /// Constant-offset predictor.
    BestOffset,
    /// Global history buffer: second-order stride confirmation over the last 3 addresses.
    Ghb,
    /// Access-map pattern matching at 4 KiB page granularity.
    Ampm,
    /// Spatial memory streaming: emit the untouched regions of a page.
    Sms,
    /// Supervised-learning predictor (externally trained regression).
    Ml,
    /// Reinforcement-learning predictor (epsilon-greedy over a sparse Q-table).
    Rl,
}

impl PrefetcherKind {
    /// All selectable strategies, in report order. Excludes `None`.
    pub const ALL: &'static [Self] = &[
        Self::Stride,
        Self::BestOffset,
        Self::Ghb,
        Self::Ampm,
        Self::Sms,
        Self::Ml,
        Self::Rl,
    ];
}

/// Cache store configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of resident entries.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,
}

impl CacheConfig {
    /// Returns the default cache capacity in entries.
    fn default_capacity() -> usize {
        defaults::CACHE_CAPACITY
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_CAPACITY,
        }
    }
}

/// Backing store configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct MemoryConfig {
    /// Byte ceiling in megabytes.
    #[serde(default = "MemoryConfig::default_ram_size_mb")]
    pub ram_size_mb: usize,
}

impl MemoryConfig {
    /// Returns the default backing store ceiling in megabytes.
    fn default_ram_size_mb() -> usize {
        defaults::RAM_SIZE_MB
    }

    /// Byte ceiling converted to bytes.
    pub fn ram_size_bytes(&self) -> u64 {
        (self.ram_size_mb as u64) * 1024 * 1024
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size_mb: defaults::RAM_SIZE_MB,
        }
    }
}

/// Prefetch strategy configuration.
///
/// Only the fields relevant to the selected [`kind`](Self::kind) are read;
/// the rest are ignored by construction.
#[derive(Clone, Debug, Deserialize)]
pub struct PrefetchConfig {
    /// Which strategy to run.
    #[serde(default)]
    pub kind: PrefetcherKind,

    /// Fixed byte offset for the best-offset strategy.
    #[serde(default = "PrefetchConfig::default_offset")]
    pub offset: u64,

    /// Recent-address window length forming a reinforcement-learning state.
    #[serde(default = "PrefetchConfig::default_state_size")]
    pub state_size: usize,

    /// Number of candidate offsets for the reinforcement learner.
    #[serde(default = "PrefetchConfig::default_action_space")]
    pub action_space: usize,

    /// Exploration rate of the epsilon-greedy policy.
    #[serde(default = "PrefetchConfig::default_epsilon")]
    pub epsilon: f64,

    /// Learning rate of the temporal-difference update.
    #[serde(default = "PrefetchConfig::default_alpha")]
    pub alpha: f64,

    /// Discount factor of the temporal-difference update.
    #[serde(default = "PrefetchConfig::default_gamma")]
    pub gamma: f64,

    /// Seed for the exploration PRNG.
    #[serde(default = "PrefetchConfig::default_seed")]
    pub seed: u64,
}

impl PrefetchConfig {
    /// Returns the default best-offset prediction distance.
    fn default_offset() -> u64 {
        defaults::PREFETCH_OFFSET
    }

    /// Returns the default reinforcement-learning state window length.
    fn default_state_size() -> usize {
        defaults::RL_STATE_SIZE
    }

    /// Returns the default reinforcement-learning action space size.
    fn default_action_space() -> usize {
        defaults::RL_ACTION_SPACE
    }

    /// Returns the default exploration rate.
    fn default_epsilon() -> f64 {
        defaults::RL_EPSILON
    }

    /// Returns the default learning rate.
    fn default_alpha() -> f64 {
        defaults::RL_ALPHA
    }

    /// Returns the default discount factor.
    fn default_gamma() -> f64 {
        defaults::RL_GAMMA
    }

    /// Returns the default PRNG seed.
    fn default_seed() -> u64 {
        defaults::RL_SEED
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            kind: PrefetcherKind::default(),
            offset: defaults::PREFETCH_OFFSET,
            state_size: defaults::RL_STATE_SIZE,
            action_space: defaults::RL_ACTION_SPACE,
            epsilon: defaults::RL_EPSILON,
            alpha: defaults::RL_ALPHA,
            gamma: defaults::RL_GAMMA,
            seed: defaults::RL_SEED,
        }
    }
}

/// Root simulator configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Cache store parameters.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Backing store parameters.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Prefetch strategy parameters.
    #[serde(default)]
    pub prefetch: PrefetchConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path).map_err(|e| SimError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SimError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Validates the configuration.
    ///
    /// Malformed configuration is fatal to the run; the driver surfaces the
    /// error rather than running with silently clamped values.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.cache.capacity == 0 {
            return Err(SimError::Config("cache capacity must be nonzero".into()));
        }
        if self.memory.ram_size_mb == 0 {
            return Err(SimError::Config("RAM size must be nonzero".into()));
        }
        if self.prefetch.action_space == 0 {
            return Err(SimError::Config("RL action space must be nonzero".into()));
        }
        if self.prefetch.state_size == 0 {
            return Err(SimError::Config("RL state size must be nonzero".into()));
        }
        if !(0.0..=1.0).contains(&self.prefetch.epsilon) {
            return Err(SimError::Config(format!(
                "RL epsilon must be within [0, 1], got {}",
                self.prefetch.epsilon
            )));
        }
        Ok(())
    }
}
