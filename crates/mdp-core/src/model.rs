//! Generative model interface for finite MDPs

/// A finite MDP that can be queried and sampled.
pub trait Model {
    /// Number of states
    fn state_count(&self) -> usize;

    /// Number of actions
    fn action_count(&self) -> usize;

    /// Sample a next state and reward for taking `a` in `s`
    fn sample(&mut self, s: usize, a: usize) -> (usize, f64);

    /// Probability of landing in `s1` after taking `a` in `s`
    fn transition_probability(&self, s: usize, s1: usize, a: usize) -> f64;

    /// Expected reward of the `(s, s1, a)` transition
    fn expected_reward(&self, s: usize, s1: usize, a: usize) -> f64;
}
