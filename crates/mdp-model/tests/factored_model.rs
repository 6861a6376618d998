//! Learning a model over a factored state space

use approx::assert_relative_eq;
use mdp_core::{Experience, Model};
use mdp_factored::{
    factor_space, to_factors, to_index, to_index_partial_factors, PartialFactors,
    PartialFactorsEnumerator,
};
use mdp_model::{RLModel, RLModelConfig};

/// Two binary variables; action 0 flips the first one, action 1 the second.
fn flip_experience(space: &[usize]) -> Experience {
    let states = factor_space(space);
    let mut exp = Experience::new(states, 2);
    for s in 0..states {
        for a in 0..2 {
            let mut next = to_factors(space, s);
            next[a] = 1 - next[a];
            let reward = if next.iter().all(|&v| v == 1) { 1.0 } else { 0.0 };
            exp.record(s, to_index(space, &next), a, reward).unwrap();
        }
    }
    exp
}

#[test]
fn learns_deterministic_factored_dynamics() {
    let space = vec![2, 2];
    let config = RLModelConfig { seed: Some(11), ..RLModelConfig::default() };
    let mut model = RLModel::with_config(flip_experience(&space), &config);

    let origin = to_index(&space, &[0, 0]);
    let first = to_index(&space, &[1, 0]);
    let goal = to_index(&space, &[1, 1]);

    assert_relative_eq!(model.transition_probability(origin, first, 0), 1.0);
    assert_relative_eq!(model.expected_reward(first, goal, 1), 1.0);
    assert_eq!(Model::sample(&mut model, first, 1), (goal, 1.0));
}

#[test]
fn enumerated_neighborhood_indexes_every_state_once() {
    let space = vec![2, 3, 2];
    let mut seen = vec![false; factor_space(&space)];
    for pf in PartialFactorsEnumerator::new(space.clone(), vec![0, 1, 2]) {
        let index = to_index_partial_factors(&space, &pf);
        assert!(!seen[index]);
        seen[index] = true;
    }
    assert!(seen.iter().all(|&v| v));
}

#[test]
fn skipped_factor_keeps_states_with_zero_in_that_slot() {
    let space = vec![2, 3, 2];
    let states: Vec<_> = PartialFactorsEnumerator::with_skip(space.clone(), vec![0, 1, 2], 1)
        .map(|pf| to_factors(&space, to_index_partial_factors(&space, &pf)))
        .collect();
    assert_eq!(states.len(), 4);
    assert!(states.iter().all(|f| f[1] == 0));

    let fixed = PartialFactors::new(vec![1], vec![0]).unwrap();
    assert!(states
        .iter()
        .all(|f| mdp_factored::matches(&mdp_factored::to_partial_factors(f), &fixed)));
}
