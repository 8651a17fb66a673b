use image::RgbImage;

/// What a decision function sees each turn.
#[derive(Clone, Debug)]
pub struct Observation {
    /// Legality per action id; `true` means playable this turn.
    pub action_mask: Vec<bool>,
    /// Flattened numeric feature planes, layout defined per game.
    pub features: Vec<f32>,
}

impl Observation {
    pub fn legal_actions(&self) -> Vec<usize> {
        self.action_mask
            .iter()
            .enumerate()
            .filter_map(|(i, &legal)| legal.then_some(i))
            .collect()
    }
}

/// Result of advancing the environment by one action.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    /// Per-team signed rewards for this ply, indexed by player.
    pub rewards: [f64; 2],
    pub terminated: bool,
    pub truncated: bool,
}

/// An opaque turn-based two-player stepper. Game rules and legality live
/// entirely behind this seam.
pub trait MatchEnv {
    fn reset(&mut self);
    /// Player (0 or 1) whose action the next [`MatchEnv::step`] consumes.
    fn current_player(&self) -> usize;
    fn observe(&self) -> Observation;
    fn step(&mut self, action: usize) -> Step;
    /// Raster snapshot of the current game state, if the game renders one.
    fn render_frame(&self) -> Option<RgbImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_actions_filters_the_mask() {
        let obs = Observation {
            action_mask: vec![true, false, true, false],
            features: Vec::new(),
        };
        assert_eq!(obs.legal_actions(), vec![0, 2]);
    }
}
