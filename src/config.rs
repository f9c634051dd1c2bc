//! Editor configuration.
//!
//! Tunable interaction parameters, serializable so the host application can
//! persist them alongside its own settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HIT_EPSILON, DEFAULT_NUDGE_STEP, DEFAULT_ROTATE_STEP_COARSE, DEFAULT_ROTATE_STEP_FINE,
};

/// Interaction tuning for the [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Vertex/edge hit-test tolerance in image pixels at scale 1.0. The
    /// effective tolerance is divided by the canvas scale.
    pub hit_epsilon: f32,
    /// Translation per arrow-key press, in image pixels.
    pub nudge_step: f32,
    /// Coarse rotation step in radians.
    pub rotate_step_coarse: f32,
    /// Fine rotation step in radians.
    pub rotate_step_fine: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_epsilon: DEFAULT_HIT_EPSILON,
            nudge_step: DEFAULT_NUDGE_STEP,
            rotate_step_coarse: DEFAULT_ROTATE_STEP_COARSE,
            rotate_step_fine: DEFAULT_ROTATE_STEP_FINE,
        }
    }
}
