//! The live shape collection for the current image, with selection,
//! grouping and the bounded undo history.
//!
//! Every mutating operation records a full snapshot of the shape list, so
//! the top of the history stack always mirrors the last committed state.

use std::collections::HashSet;

use crate::constants::{DUPLICATE_SHIFT, MAX_HISTORY_LEN};
use crate::geometry::ImageBounds;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// Insertion-ordered storage for the shapes on a single image.
#[derive(Debug, Clone, Default)]
pub struct ShapeCollection {
    /// All shapes in insertion order.
    shapes: Vec<Shape>,
    /// Counter for generating unique shape IDs. Never reused.
    next_id: ShapeId,
    /// Bounded stack of full deep copies of `shapes`.
    history: Vec<Vec<Shape>>,
    /// Dirty flag - set when shapes change, cleared by the host after saving.
    dirty: bool,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
            history: Vec::new(),
            dirty: false,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// All shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if there are no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    // ========================================================================
    // Dirty flag
    // ========================================================================

    /// Check if the collection changed since the last [`clear_dirty`].
    ///
    /// [`clear_dirty`]: ShapeCollection::clear_dirty
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Call after persisting.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Mark the collection as dirty.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a shape, assign its ID and record a snapshot. Returns the ID.
    pub fn add(&mut self, mut shape: Shape) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        shape.id = id;
        log::debug!("added shape {} ({:?})", id, shape.kind);
        self.shapes.push(shape);
        self.snapshot();
        self.mark_dirty();
        id
    }

    /// Remove a shape by ID, recording a snapshot when one was removed.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        let removed = self.shapes.remove(index);
        log::debug!("removed shape {}", id);
        self.snapshot();
        self.mark_dirty();
        Some(removed)
    }

    /// Remove every selected shape, returning them in insertion order.
    pub fn delete_selected(&mut self) -> Vec<Shape> {
        let mut removed = Vec::new();
        self.shapes.retain_mut(|s| {
            if s.is_selected {
                removed.push(s.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            log::debug!("deleted {} selected shapes", removed.len());
            self.snapshot();
            self.mark_dirty();
        }
        removed
    }

    /// Replace the contents with shapes from an external source (loader or
    /// prediction model). Resets identity, selection and history.
    pub fn load(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        for shape in &mut self.shapes {
            shape.id = self.next_id;
            self.next_id += 1;
            shape.is_selected = false;
            shape.close();
        }
        self.history.clear();
        self.dirty = false;
        log::debug!("loaded {} shapes", self.shapes.len());
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// IDs of the selected shapes, in insertion order.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.is_selected)
            .map(|s| s.id)
            .collect()
    }

    /// Set the selection flag on one shape. Returns whether it changed.
    pub fn set_selected(&mut self, id: ShapeId, selected: bool) -> bool {
        match self.get_mut(id) {
            Some(shape) if shape.is_selected != selected => {
                shape.is_selected = selected;
                true
            }
            _ => false,
        }
    }

    /// Deselect everything. Returns whether anything changed.
    pub fn clear_selection(&mut self) -> bool {
        let mut changed = false;
        for shape in &mut self.shapes {
            if shape.is_selected {
                shape.is_selected = false;
                changed = true;
            }
        }
        changed
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Push a deep copy of the current shape list onto the history stack,
    /// dropping the oldest entries beyond the capacity.
    pub fn snapshot(&mut self) {
        self.history.push(self.shapes.clone());
        while self.history.len() > MAX_HISTORY_LEN {
            self.history.remove(0);
        }
    }

    /// Check if undo is available. Requires at least two snapshots: the
    /// last entry is the current state, the one below it the previous.
    pub fn can_undo(&self) -> bool {
        self.history.len() >= 2
    }

    /// Restore the previous snapshot, discarding the current one.
    ///
    /// The selection is cleared and the restored state becomes the new top
    /// of the stack. A no-op returning `false` when fewer than two
    /// snapshots exist.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            log::debug!("undo requested with no previous snapshot");
            return false;
        }
        self.history.pop();
        let Some(previous) = self.history.last() else {
            return false;
        };
        self.shapes = previous.clone();
        for shape in &mut self.shapes {
            shape.is_selected = false;
        }
        self.mark_dirty();
        log::debug!("undo: restored {} shapes", self.shapes.len());
        true
    }

    /// Number of snapshots currently held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ========================================================================
    // Grouping
    // ========================================================================

    /// Merge the selected shapes into one group.
    ///
    /// If any of them already carry a group id the minimum of those ids is
    /// chosen; otherwise a fresh id is generated as `max(existing) + 1`.
    /// Every id found among the selection is rewritten to the chosen id
    /// across the whole collection. Returns the chosen id, or `None` when
    /// nothing is selected.
    pub fn group_selected(&mut self) -> Option<u32> {
        let selected: Vec<ShapeId> = self.selected_ids();
        if selected.is_empty() {
            return None;
        }
        let merged: HashSet<u32> = self
            .shapes
            .iter()
            .filter(|s| s.is_selected)
            .filter_map(|s| s.group_id)
            .collect();
        let target = match merged.iter().min() {
            Some(min) => *min,
            None => self
                .shapes
                .iter()
                .filter_map(|s| s.group_id)
                .max()
                .map_or(1, |max| max + 1),
        };
        for shape in &mut self.shapes {
            let absorbed = shape.group_id.is_some_and(|g| merged.contains(&g));
            if shape.is_selected || absorbed {
                shape.group_id = Some(target);
            }
        }
        log::debug!("grouped {} shapes under id {}", selected.len(), target);
        self.snapshot();
        self.mark_dirty();
        Some(target)
    }

    /// Dissolve the groups of the selected shapes.
    ///
    /// Ungrouping is collection-wide per id: every shape sharing a group id
    /// with any selected shape has its id cleared, selected or not.
    pub fn ungroup_selected(&mut self) {
        let ids: HashSet<u32> = self
            .shapes
            .iter()
            .filter(|s| s.is_selected)
            .filter_map(|s| s.group_id)
            .collect();
        if ids.is_empty() {
            return;
        }
        let mut cleared = 0usize;
        for shape in &mut self.shapes {
            if shape.group_id.is_some_and(|g| ids.contains(&g)) {
                shape.group_id = None;
                cleared += 1;
            }
        }
        log::debug!("ungrouped {} shapes ({} group ids)", cleared, ids.len());
        self.snapshot();
        self.mark_dirty();
    }

    // ========================================================================
    // Duplication
    // ========================================================================

    /// Deep-copy the selected shapes, shifting the copies by a small
    /// diagonal offset so they do not cover the originals.
    ///
    /// The shift tries one direction first and falls back to the opposite
    /// when it would push any copy outside the image; rotation shapes are
    /// exempt from the bounds check. The copies become the new selection.
    /// Returns the IDs of the copies.
    pub fn duplicate_selected(&mut self, bounds: &ImageBounds) -> Vec<ShapeId> {
        let mut copies: Vec<Shape> = self
            .shapes
            .iter()
            .filter(|s| s.is_selected)
            .cloned()
            .collect();
        if copies.is_empty() {
            return Vec::new();
        }
        let fits = |shapes: &[Shape], delta: f32| {
            shapes.iter().all(|s| {
                s.kind == ShapeKind::Rotation
                    || s.points.iter().all(|p| bounds.contains(&p.offset(delta, delta)))
            })
        };
        let delta = if fits(&copies, -DUPLICATE_SHIFT) {
            -DUPLICATE_SHIFT
        } else if fits(&copies, DUPLICATE_SHIFT) {
            DUPLICATE_SHIFT
        } else {
            0.0
        };
        self.clear_selection();
        let mut ids = Vec::with_capacity(copies.len());
        for copy in &mut copies {
            copy.move_by(delta, delta);
            copy.id = self.next_id;
            self.next_id += 1;
            copy.is_selected = true;
            ids.push(copy.id);
        }
        self.shapes.append(&mut copies);
        log::debug!("duplicated {} shapes (shift {})", ids.len(), delta);
        self.snapshot();
        self.mark_dirty();
        ids
    }

    // ========================================================================
    // Import/Export
    // ========================================================================

    /// Serialize the full ordered shape list for the persistence layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.shapes)
    }

    /// Build a collection from serialized shape records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let shapes: Vec<Shape> = serde_json::from_str(json)?;
        let mut collection = Self::new();
        collection.load(shapes);
        Ok(collection)
    }
}
