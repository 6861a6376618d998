//! Maximum-likelihood MDP model built from experience counters

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use mdp_core::{ExperienceSource, Model};

use crate::config::RLModelConfig;

/// Transition probabilities indexed `[s][s1][a]`
pub type TransitionTable = Array3<f64>;

/// Expected rewards indexed `[s][s1][a]`
pub type RewardTable = Array3<f64>;

/// MDP model estimated from recorded visits and rewards.
///
/// For each `(s, a)` the transition row is the empirical distribution of
/// next states and each reward is the mean of the rewards observed on that
/// transition. Pairs never tried fall back to a self-loop with zero reward.
///
/// The tables only change on [`sync`](Self::sync): recording more
/// experience has no effect until then.
#[derive(Debug)]
pub struct RLModel<E, R = StdRng> {
    experience: E,
    states: usize,
    actions: usize,
    transitions: TransitionTable,
    rewards: RewardTable,
    rng: R,
}

impl<E: ExperienceSource> RLModel<E> {
    /// Create a model over `experience` with an entropy-seeded generator.
    ///
    /// With `sync` the tables are computed from the counters immediately;
    /// otherwise every state-action pair starts as a self-loop.
    pub fn new(experience: E, sync: bool) -> Self {
        Self::with_rng(experience, sync, StdRng::from_entropy())
    }

    /// Create a model as described by `config`
    pub fn with_config(experience: E, config: &RLModelConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(experience, config.sync_on_construction, rng)
    }
}

impl<E: ExperienceSource, R: Rng> RLModel<E, R> {
    /// Create a model that samples with `rng`
    pub fn with_rng(experience: E, sync: bool, rng: R) -> Self {
        let states = experience.state_count();
        let actions = experience.action_count();
        let mut model = Self {
            experience,
            states,
            actions,
            transitions: Array3::zeros((states, states, actions)),
            rewards: Array3::zeros((states, states, actions)),
            rng,
        };

        if sync {
            model.sync();
        } else {
            for s in 0..states {
                for a in 0..actions {
                    model.transitions[[s, s, a]] = 1.0;
                }
            }
        }
        debug!(states, actions, synced = sync, "created empirical model");
        model
    }

    /// Recompute every transition and reward from the counters
    pub fn sync(&mut self) {
        for s in 0..self.states {
            self.sync_state(s);
        }
        debug!(states = self.states, actions = self.actions, "synchronized model");
    }

    /// Recompute all actions of state `s`
    pub fn sync_state(&mut self, s: usize) {
        for a in 0..self.actions {
            self.sync_state_action(s, a);
        }
    }

    /// Recompute the transitions and rewards of the pair `(s, a)`
    #[allow(clippy::cast_precision_loss)]
    pub fn sync_state_action(&mut self, s: usize, a: usize) {
        let total = (0..self.states)
            .map(|s1| self.experience.visits(s, s1, a))
            .fold(0u64, u64::saturating_add);

        if total == 0 {
            // Never tried: stay put, no reward.
            for s1 in 0..self.states {
                self.transitions[[s, s1, a]] = if s1 == s { 1.0 } else { 0.0 };
                self.rewards[[s, s1, a]] = 0.0;
            }
            trace!(s, a, "no visits, using self-loop");
            return;
        }

        let total = total as f64;
        for s1 in 0..self.states {
            let visits = self.experience.visits(s, s1, a);
            self.transitions[[s, s1, a]] = visits as f64 / total;
            self.rewards[[s, s1, a]] = if visits > 0 {
                self.experience.reward_sum(s, s1, a) / visits as f64
            } else {
                0.0
            };
        }
        trace!(s, a, total, "normalized state-action pair");
    }

    /// Sample a next state and reward for taking `a` in `s`.
    ///
    /// When rounding leaves the cumulative probability short of the drawn
    /// value, the last state is returned.
    pub fn sample(&mut self, s: usize, a: usize) -> (usize, f64) {
        debug_assert!(self.states > 0, "sampling an empty model");
        let mut p: f64 = self.rng.gen();
        for s1 in 0..self.states {
            let t = self.transitions[[s, s1, a]];
            if t > p {
                return (s1, self.rewards[[s, s1, a]]);
            }
            p -= t;
        }
        let last = self.states - 1;
        (last, self.rewards[[s, last, a]])
    }

    /// Probability of reaching `s1` when taking `a` in `s`
    #[must_use]
    pub fn transition_probability(&self, s: usize, s1: usize, a: usize) -> f64 {
        self.transitions[[s, s1, a]]
    }

    /// Expected reward of the `(s, s1, a)` transition
    #[must_use]
    pub fn expected_reward(&self, s: usize, s1: usize, a: usize) -> f64 {
        self.rewards[[s, s1, a]]
    }

    /// The whole transition table
    #[must_use]
    pub fn transition_table(&self) -> &TransitionTable {
        &self.transitions
    }

    /// The whole reward table
    #[must_use]
    pub fn reward_table(&self) -> &RewardTable {
        &self.rewards
    }

    /// Number of states
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states
    }

    /// Number of actions
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions
    }

    /// The counters this model reads
    #[must_use]
    pub fn experience(&self) -> &E {
        &self.experience
    }

    /// Mutable access to the counters, e.g. to record new transitions.
    ///
    /// Changes are picked up by the next sync.
    pub fn experience_mut(&mut self) -> &mut E {
        &mut self.experience
    }

    /// Give back the counters
    pub fn into_experience(self) -> E {
        self.experience
    }
}

impl<E: ExperienceSource, R: Rng> Model for RLModel<E, R> {
    fn state_count(&self) -> usize {
        self.states
    }

    fn action_count(&self) -> usize {
        self.actions
    }

    fn sample(&mut self, s: usize, a: usize) -> (usize, f64) {
        Self::sample(self, s, a)
    }

    fn transition_probability(&self, s: usize, s1: usize, a: usize) -> f64 {
        Self::transition_probability(self, s, s1, a)
    }

    fn expected_reward(&self, s: usize, s1: usize, a: usize) -> f64 {
        Self::expected_reward(self, s, s1, a)
    }
}
