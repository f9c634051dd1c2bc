//! Projection of reserved-label shapes into prompt marks.
//!
//! Shapes labeled with the reserved auto-labeling names are not annotations;
//! they are prompts for an interactive segmentation model. This module
//! projects them into the integer-coordinate mark records such models
//! consume, leaving every ordinary shape untouched.

use serde::Serialize;

use crate::collection::ShapeCollection;
use crate::constants::{AUTOLABEL_ADD, AUTOLABEL_REMOVE};
use crate::shape::{Shape, ShapeKind};

/// Whether a mark tells the model to include or exclude a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkPolarity {
    Include,
    Exclude,
}

/// Integer-pixel geometry of a prompt mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MarkGeometry {
    Point { x: i32, y: i32 },
    Rectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// One prompt mark for a segmentation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutoLabelMark {
    pub polarity: MarkPolarity,
    #[serde(flatten)]
    pub geometry: MarkGeometry,
}

/// Project the reserved-label shapes of a collection into prompt marks,
/// in insertion order. Ordinary shapes do not contribute.
pub fn project_marks(collection: &ShapeCollection) -> Vec<AutoLabelMark> {
    collection
        .shapes()
        .iter()
        .filter_map(project_shape)
        .collect()
}

fn project_shape(shape: &Shape) -> Option<AutoLabelMark> {
    let polarity = match shape.label.as_str() {
        AUTOLABEL_ADD => MarkPolarity::Include,
        AUTOLABEL_REMOVE => MarkPolarity::Exclude,
        _ => return None,
    };
    let geometry = match shape.kind {
        ShapeKind::Point => {
            let p = shape.points.first()?;
            MarkGeometry::Point {
                x: p.x.round() as i32,
                y: p.y.round() as i32,
            }
        }
        ShapeKind::Rectangle => {
            let rect = shape.bounding_rect()?;
            MarkGeometry::Rectangle {
                x1: rect.x.round() as i32,
                y1: rect.y.round() as i32,
                x2: rect.right().round() as i32,
                y2: rect.bottom().round() as i32,
            }
        }
        _ => {
            log::warn!(
                "ignoring {:?} shape {} with reserved label {:?}",
                shape.kind,
                shape.id,
                shape.label
            );
            return None;
        }
    };
    Some(AutoLabelMark { polarity, geometry })
}
