//! Decision functions: the opaque policy seam and the skill-modulated agent
//! wrapper around it.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::league::env::Observation;

/// An opaque policy mapping an observation to its preferred action.
pub trait Policy {
    fn best_action(&mut self, obs: &Observation) -> usize;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn best_action(&mut self, obs: &Observation) -> usize {
        (**self).best_action(obs)
    }
}

/// Wraps a policy with a skill level: with probability `skill_level` play the
/// policy's best action, otherwise uniformly pick a different legal action
/// (a "mistake"). An empty legal set falls back to action 0.
pub struct SkillAgent<P> {
    policy: P,
    skill: f64,
    rng: SmallRng,
}

impl<P: Policy> SkillAgent<P> {
    /// `skill_level: None` means fully faithful to the policy.
    pub fn new(policy: P, skill_level: Option<f64>, seed: u64) -> Self {
        Self {
            policy,
            skill: skill_level.unwrap_or(1.0).clamp(0.0, 1.0),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn decide(&mut self, obs: &Observation) -> usize {
        let legal = obs.legal_actions();
        if legal.is_empty() {
            return 0;
        }
        let best = self.policy.best_action(obs);
        if self.rng.random::<f64>() < self.skill {
            return best;
        }
        let mistakes: Vec<usize> = legal.iter().copied().filter(|&a| a != best).collect();
        mistakes.choose(&mut self.rng).copied().unwrap_or(best)
    }
}
