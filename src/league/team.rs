use std::path::{Path, PathBuf};

/// A competing team. Immutable for the duration of a match; the compositor
/// only reads it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Display color token, a 6-hex-digit string with optional `#`.
    pub color: String,
    /// Probability in `[0, 1]` of playing the policy's best action; `None`
    /// plays it every time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<f64>,
}

impl Team {
    /// Trained model artifact location: `<models_dir>/<game>/<team>.policy`.
    pub fn model_path(&self, models_dir: &Path, game_id: &str) -> PathBuf {
        models_dir.join(game_id).join(format!("{}.policy", self.id))
    }

    /// A team is "trained" exactly when its artifact exists; no metadata is
    /// inspected.
    pub fn trained(&self, models_dir: &Path, game_id: &str) -> bool {
        self.model_path(models_dir, game_id).exists()
    }
}
