//! Example: learning a noisy chain MDP from simulated experience

use mdp_core::{Experience, Model};
use mdp_model::{RLModel, RLModelConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const STATES: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Action 0 moves right with probability 0.8, action 1 resets to 0.
    let mut env_rng = StdRng::seed_from_u64(1);
    let mut experience = Experience::new(STATES, 2);
    for _ in 0..2_000 {
        let s = env_rng.gen_range(0..STATES);
        let a = env_rng.gen_range(0..2);
        let s1 = match a {
            0 if env_rng.gen_bool(0.8) => (s + 1).min(STATES - 1),
            0 => s,
            _ => 0,
        };
        let reward = if s1 == STATES - 1 { 1.0 } else { 0.0 };
        experience.record(s, s1, a, reward)?;
    }

    let config = RLModelConfig::from_json(r#"{"seed": 42}"#)?;
    let mut model = RLModel::with_config(experience, &config);

    for s in 0..STATES {
        println!(
            "P(s={s} -> s'={}) = {:.3}",
            (s + 1).min(STATES - 1),
            model.transition_probability(s, (s + 1).min(STATES - 1), 0)
        );
    }

    // Roll out the learned model
    let mut s = 0;
    let mut total = 0.0;
    for _ in 0..20 {
        let (s1, r) = Model::sample(&mut model, s, 0);
        total += r;
        s = s1;
    }
    println!("\nReturn of a 20-step rollout: {total:.1}");

    Ok(())
}
