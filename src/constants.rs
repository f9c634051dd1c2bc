//! Crate-wide constants for the shape-editing engine.

/// Reserved label marking a shape as an "include this region" hint for
/// auto-labeling models.
pub const AUTOLABEL_ADD: &str = "AUTOLABEL_ADD";

/// Reserved label marking a shape as an "exclude this region" hint for
/// auto-labeling models.
pub const AUTOLABEL_REMOVE: &str = "AUTOLABEL_REMOVE";

/// Label assigned to shapes finalized while auto-labeling mode is active.
pub const AUTOLABEL_OBJECT: &str = "AUTOLABEL_OBJECT";

/// Maximum number of collection snapshots kept in the undo history.
pub const MAX_HISTORY_LEN: usize = 11;

/// Default hit-test tolerance for vertices and edges, in image pixels at
/// scale 1.0.
pub const DEFAULT_HIT_EPSILON: f32 = 10.0;

/// Distance below which a new vertex closes the shape onto its first vertex.
/// Only consulted once the shape has enough vertices to form an area.
pub const SHAPE_CLOSE_EPSILON: f32 = 10.0;

/// Translation applied per arrow-key press, in image pixels.
pub const DEFAULT_NUDGE_STEP: f32 = 5.0;

/// Coarse rotation step for the dedicated rotation keys, in radians.
pub const DEFAULT_ROTATE_STEP_COARSE: f32 = 0.1;

/// Fine rotation step for the dedicated rotation keys, in radians.
pub const DEFAULT_ROTATE_STEP_FINE: f32 = 0.01;

/// Offset applied to duplicated shapes so the copies do not sit exactly on
/// top of the originals, in image pixels.
pub const DUPLICATE_SHIFT: f32 = 2.0;

/// Minimum vertex count for a closed polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;
