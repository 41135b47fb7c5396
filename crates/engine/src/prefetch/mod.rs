//! Prefetch strategy implementations.
//!
//! This module contains the interface and implementations for the prefetch
//! strategies the simulator can run. Strategies observe miss addresses and
//! speculate on future ones; the engine materializes their candidates into
//! the cache and scores them against subsequent accesses.

/// Access-map pattern matching at page granularity.
pub mod ampm;
/// Constant-offset predictor.
pub mod best_offset;
/// Global history buffer with second-order stride confirmation.
pub mod ghb;
/// Supervised-learning predictor over a capped example buffer.
pub mod linear;
/// Reinforcement-learning predictor over a sparse Q-table.
pub mod qlearn;
/// Spatial memory streaming at page granularity.
pub mod sms;
/// Two-access warm-up stride detector.
pub mod stride;

pub use self::ampm::AmpmPrefetcher;
pub use self::best_offset::BestOffsetPrefetcher;
pub use self::ghb::GhbPrefetcher;
pub use self::linear::LinearPrefetcher;
pub use self::qlearn::QLearnPrefetcher;
pub use self::sms::SmsPrefetcher;
pub use self::stride::StridePrefetcher;

use crate::config::{PrefetchConfig, PrefetcherKind};

/// Label used in reports when no strategy is configured.
pub const NO_PREFETCHER: &str = "no_prefetcher";

/// Trait for prefetch strategy implementations.
///
/// Strategies are stateful across calls within one simulation run and are
/// never shared between runs. The engine calls [`prefetch`](Self::prefetch)
/// once per real miss, in trace order; the training hooks are driven by an
/// external collaborator with realized-outcome feedback, never by the engine
/// itself. That split keeps the simulator agnostic to whether a strategy is
/// static or learned.
pub trait Prefetcher: Send {
    /// Stable name token for report labeling. Never drives behavior.
    fn name(&self) -> &'static str;

    /// Observes a miss address, updates internal state, and returns the
    /// addresses to speculate on (possibly none), in issue order.
    fn prefetch(&mut self, addr: u64) -> Vec<u64>;

    /// Supervised hook: records one training example.
    ///
    /// `recent` is the address history leading up to `next`; only the most
    /// recent pair is retained. Default: no-op.
    fn record_example(&mut self, recent: &[u64], next: u64) {
        let _ = (recent, next);
    }

    /// Supervised hook: refits the internal model from recorded examples.
    /// Default: no-op.
    fn fit(&mut self) {}

    /// Reinforcement hook: applies a realized reward for the most recent
    /// prediction relative to `addr`. Default: no-op.
    fn apply_reward(&mut self, addr: u64, reward: f64) {
        let _ = (addr, reward);
    }
}

/// Constructs the configured strategy, or `None` when prefetching is off.
pub fn build(config: &PrefetchConfig) -> Option<Box<dyn Prefetcher>> {
    match config.kind {
        PrefetcherKind::None => None,
        PrefetcherKind::Stride => Some(Box::new(StridePrefetcher::new())),
        PrefetcherKind::BestOffset => Some(Box::new(BestOffsetPrefetcher::new(config.offset))),
        PrefetcherKind::Ghb => Some(Box::new(GhbPrefetcher::new())),
        PrefetcherKind::Ampm => Some(Box::new(AmpmPrefetcher::new())),
        PrefetcherKind::Sms => Some(Box::new(SmsPrefetcher::new())),
        PrefetcherKind::Ml => Some(Box::new(LinearPrefetcher::new())),
        PrefetcherKind::Rl => Some(Box::new(QLearnPrefetcher::new(
            config.state_size,
            config.action_space,
            config.epsilon,
            config.alpha,
            config.gamma,
            config.seed,
        ))),
    }
}
