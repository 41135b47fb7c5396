//! Supervised-Learning Prefetcher.
//!
//! Predicts the next miss address with a least-squares model over the last
//! two observed addresses. The strategy only holds state and predicts;
//! training is driven externally: a collaborator feeds realized
//! (history, next-address) pairs through [`Prefetcher::record_example`] and
//! refits via [`Prefetcher::fit`]. Until more than [`MIN_EXAMPLES`] examples
//! exist and a fit has happened, `prefetch` stays silent.
//!
//! The example buffer is hard-capped: past [`EXAMPLE_CAP`] entries it is
//! trimmed to the most recent [`EXAMPLE_TRIM`].
//!
//! Internally the model regresses the next delta on the observed stride
//! rather than fitting raw 64-bit coordinates, which keeps the arithmetic
//! inside f64 precision and is exact on arithmetic progressions.

use super::Prefetcher;

/// Hard cap on retained training examples.
pub const EXAMPLE_CAP: usize = 10_000;

/// Retained suffix after an overflow trim.
pub const EXAMPLE_TRIM: usize = 1_000;

/// Examples required before the model predicts.
pub const MIN_EXAMPLES: usize = 10;

/// One training example: the feature pair and the realized next address.
#[derive(Clone, Copy, Debug)]
struct Example {
    prev: u64,
    last: u64,
    next: u64,
}

/// Fitted one-dimensional least-squares model: `delta ≈ intercept + slope·stride`.
#[derive(Clone, Copy, Debug)]
struct DeltaModel {
    intercept: f64,
    slope: f64,
}

/// Supervised-learning prefetcher state.
#[derive(Debug, Default)]
pub struct LinearPrefetcher {
    examples: Vec<Example>,
    /// Last two observed miss addresses (prev, last).
    window: (Option<u64>, Option<u64>),
    model: Option<DeltaModel>,
}

impl LinearPrefetcher {
    /// Creates an untrained supervised prefetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently retained training examples.
    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// True once a model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }
}

impl Prefetcher for LinearPrefetcher {
    fn name(&self) -> &'static str {
        "ml"
    }

    /// Records the address and, with a fitted model and enough examples,
    /// predicts one address from the last two observed.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        let (_, last) = self.window;
        self.window = (last, Some(addr));

        let Some(last) = last else {
            return Vec::new();
        };
        if self.examples.len() <= MIN_EXAMPLES {
            return Vec::new();
        }
        let Some(model) = self.model else {
            return Vec::new();
        };

        let stride = (addr as i64).wrapping_sub(last as i64) as f64;
        let predicted = addr as f64 + model.intercept + model.slope * stride;
        vec![predicted.round().max(0.0) as u64]
    }

    /// Appends one example, trimming the buffer past its cap.
    fn record_example(&mut self, recent: &[u64], next: u64) {
        let [.., prev, last] = recent else {
            return;
        };
        self.examples.push(Example {
            prev: *prev,
            last: *last,
            next,
        });
        if self.examples.len() > EXAMPLE_CAP {
            let cut = self.examples.len() - EXAMPLE_TRIM;
            let _ = self.examples.drain(..cut);
        }
    }

    /// Refits the delta model, if enough examples have accumulated.
    fn fit(&mut self) {
        if self.examples.len() <= MIN_EXAMPLES {
            return;
        }
        let n = self.examples.len() as f64;
        let mut mean_x = 0.0;
        let mut mean_y = 0.0;
        for ex in &self.examples {
            mean_x += (ex.last as i64).wrapping_sub(ex.prev as i64) as f64;
            mean_y += (ex.next as i64).wrapping_sub(ex.last as i64) as f64;
        }
        mean_x /= n;
        mean_y /= n;

        let mut var_x = 0.0;
        let mut cov_xy = 0.0;
        for ex in &self.examples {
            let dx = (ex.last as i64).wrapping_sub(ex.prev as i64) as f64 - mean_x;
            let dy = (ex.next as i64).wrapping_sub(ex.last as i64) as f64 - mean_y;
            var_x += dx * dx;
            cov_xy += dx * dy;
        }

        // Constant-stride corpora have zero variance; the mean delta is then
        // the whole model.
        let slope = if var_x > 0.0 { cov_xy / var_x } else { 0.0 };
        let intercept = mean_y - slope * mean_x;
        self.model = Some(DeltaModel { intercept, slope });
    }
}
