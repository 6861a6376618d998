//! Visit and reward counters gathered while interacting with an environment

use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::{MdpError, Result};

/// Read-only view over recorded `(state, next_state, action)` statistics.
///
/// Models built from experience only ever read through this trait, so any
/// storage able to answer these four questions can back them.
pub trait ExperienceSource {
    /// Number of states of the underlying MDP
    fn state_count(&self) -> usize;

    /// Number of actions of the underlying MDP
    fn action_count(&self) -> usize;

    /// How many times `a` taken in `s` led to `s1`
    fn visits(&self, s: usize, s1: usize, a: usize) -> u64;

    /// Sum of the rewards obtained over those visits
    fn reward_sum(&self, s: usize, s1: usize, a: usize) -> f64;
}

/// Dense experience counter indexed `[s][s1][a]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    visits: Array3<u64>,
    rewards: Array3<f64>,
}

impl Experience {
    /// Create an empty counter for `states` states and `actions` actions
    #[must_use]
    pub fn new(states: usize, actions: usize) -> Self {
        Self {
            visits: Array3::zeros((states, states, actions)),
            rewards: Array3::zeros((states, states, actions)),
        }
    }

    /// Record one observed transition
    pub fn record(&mut self, s: usize, s1: usize, a: usize, reward: f64) -> Result<()> {
        self.check(s, s1, a)?;
        self.visits[[s, s1, a]] += 1;
        self.rewards[[s, s1, a]] += reward;
        Ok(())
    }

    /// Overwrite the counters of a single triple
    pub fn set(&mut self, s: usize, s1: usize, a: usize, visits: u64, reward_sum: f64) -> Result<()> {
        self.check(s, s1, a)?;
        self.visits[[s, s1, a]] = visits;
        self.rewards[[s, s1, a]] = reward_sum;
        Ok(())
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        self.visits.fill(0);
        self.rewards.fill(0.0);
    }

    /// Total number of times `a` was taken in `s`
    #[must_use]
    pub fn action_visits(&self, s: usize, a: usize) -> u64 {
        (0..self.state_count())
            .map(|s1| self.visits[[s, s1, a]])
            .fold(0, u64::saturating_add)
    }

    /// The raw visit table
    #[must_use]
    pub fn visit_table(&self) -> &Array3<u64> {
        &self.visits
    }

    /// The raw reward-sum table
    #[must_use]
    pub fn reward_table(&self) -> &Array3<f64> {
        &self.rewards
    }

    fn check(&self, s: usize, s1: usize, a: usize) -> Result<()> {
        let states = self.state_count();
        if s >= states {
            return Err(MdpError::OutOfRange { what: "state", index: s, bound: states });
        }
        if s1 >= states {
            return Err(MdpError::OutOfRange { what: "next state", index: s1, bound: states });
        }
        let actions = self.action_count();
        if a >= actions {
            return Err(MdpError::OutOfRange { what: "action", index: a, bound: actions });
        }
        Ok(())
    }
}

impl ExperienceSource for Experience {
    fn state_count(&self) -> usize {
        self.visits.dim().0
    }

    fn action_count(&self) -> usize {
        self.visits.dim().2
    }

    fn visits(&self, s: usize, s1: usize, a: usize) -> u64 {
        self.visits[[s, s1, a]]
    }

    fn reward_sum(&self, s: usize, s1: usize, a: usize) -> f64 {
        self.rewards[[s, s1, a]]
    }
}

impl<E: ExperienceSource + ?Sized> ExperienceSource for &E {
    fn state_count(&self) -> usize {
        (**self).state_count()
    }

    fn action_count(&self) -> usize {
        (**self).action_count()
    }

    fn visits(&self, s: usize, s1: usize, a: usize) -> u64 {
        (**self).visits(s, s1, a)
    }

    fn reward_sum(&self, s: usize, s1: usize, a: usize) -> f64 {
        (**self).reward_sum(s, s1, a)
    }
}
