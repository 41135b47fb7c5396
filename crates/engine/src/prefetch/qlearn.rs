//! Reinforcement-Learning Prefetcher.
//!
//! Casts prefetching as a bandit-style control problem: the state is the
//! window of recently observed miss addresses (zero-padded while warming
//! up), an action is an offset in `0..action_space`, and an epsilon-greedy
//! policy either explores a pseudo-random offset or exploits the
//! highest-valued action for the current state. The prediction is always
//! `addr + chosen_offset`.
//!
//! Value learning is external: a collaborator that knows the realized
//! outcome calls [`Prefetcher::apply_reward`], which applies a standard
//! temporal-difference update
//! `Q[s,a] ← (1-α)·Q[s,a] + α·(reward + γ·max Q[s,·])`.
//!
//! The Q-table is sparse and grows with distinct states observed; no
//! eviction is applied. Exploration draws come from a seeded xorshift
//! generator so identical runs stay bit-identical.

use std::collections::HashMap;

use super::Prefetcher;

/// Reinforcement-learning prefetcher state.
#[derive(Debug)]
pub struct QLearnPrefetcher {
    /// Addresses per state tuple.
    state_size: usize,
    /// Number of candidate offsets.
    action_space: usize,
    /// Sparse state → action-value table.
    q_table: HashMap<Vec<u64>, Vec<f64>>,
    /// Exploration rate.
    epsilon: f64,
    /// Learning rate.
    alpha: f64,
    /// Discount factor.
    gamma: f64,
    /// Recent address window, oldest first. Bounded at `state_size`.
    history: Vec<u64>,
    /// Xorshift PRNG state for exploration draws.
    rng_state: u64,
}

impl QLearnPrefetcher {
    /// Creates a reinforcement-learning prefetcher.
    ///
    /// Zero sizes are clamped to one so action selection always has a
    /// candidate; the validated config never passes them.
    pub fn new(
        state_size: usize,
        action_space: usize,
        epsilon: f64,
        alpha: f64,
        gamma: f64,
        seed: u64,
    ) -> Self {
        Self {
            state_size: state_size.max(1),
            action_space: action_space.max(1),
            q_table: HashMap::new(),
            epsilon,
            alpha,
            gamma,
            history: Vec::new(),
            rng_state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Number of distinct states with learned values.
    pub fn table_len(&self) -> usize {
        self.q_table.len()
    }

    /// Learned value for a raw state tuple and action, if present.
    pub fn q_value(&self, state: &[u64], action: usize) -> Option<f64> {
        self.q_table.get(state).and_then(|row| row.get(action)).copied()
    }

    /// Current state: the last `state_size` addresses, zero-padded in front.
    fn state(&self) -> Vec<u64> {
        let mut state = vec![0; self.state_size.saturating_sub(self.history.len())];
        let skip = self.history.len().saturating_sub(self.state_size);
        state.extend(&self.history[skip..]);
        state
    }

    /// Epsilon-greedy action selection.
    fn choose_action(&mut self, state: &[u64]) -> usize {
        if self.next_f64() < self.epsilon {
            return (self.next_u64() as usize) % self.action_space;
        }
        let row = self
            .q_table
            .entry(state.to_vec())
            .or_insert_with(|| vec![0.0; self.action_space]);
        argmax(row)
    }

    /// Xorshift64 step.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        x
    }

    /// Uniform draw in [0, 1) from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Index of the largest value; first wins on ties.
fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}

impl Prefetcher for QLearnPrefetcher {
    fn name(&self) -> &'static str {
        "rl"
    }

    /// Records the address, picks an offset action, predicts `addr + action`.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        self.history.push(addr);
        if self.history.len() > self.state_size {
            let _ = self.history.remove(0);
        }
        let state = self.state();
        let action = self.choose_action(&state);
        vec![addr.wrapping_add(action as u64)]
    }

    /// Temporal-difference update for the action realized relative to `addr`.
    ///
    /// The action is recovered as `last_observed - addr`; rewards whose
    /// recovered action falls outside the action space are ignored.
    fn apply_reward(&mut self, addr: u64, reward: f64) {
        let Some(&last) = self.history.last() else {
            return;
        };
        let action = last.wrapping_sub(addr);
        if action >= self.action_space as u64 {
            return;
        }
        let action = action as usize;

        let state = self.state();
        let row = self
            .q_table
            .entry(state)
            .or_insert_with(|| vec![0.0; self.action_space]);
        let max_q = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        row[action] = (1.0 - self.alpha) * row[action] + self.alpha * (reward + self.gamma * max_q);
    }
}
