//! The interaction state machine.
//!
//! Consumes pointer and keyboard events in canvas-space coordinates and
//! drives shape creation, hit-testing, constrained move/rotate and history
//! recording. The editor owns the [`ShapeCollection`] for the current image
//! and reports side effects through an injected [`EventSink`]; it never
//! reaches into UI chrome or global state.
//!
//! Every recoverable fault (invalid cardinality, mixed-kind moves,
//! degenerate geometry) is logged and skipped: a dropped input event must
//! never corrupt the collection or the undo history.

use crate::collection::ShapeCollection;
use crate::config::EditorConfig;
use crate::constants::{AUTOLABEL_OBJECT, MIN_POLYGON_VERTICES};
use crate::error::ShapeError;
use crate::event::{EditorEvent, EventSink};
use crate::geometry::{ImageBounds, Point, Rect, box_edge_intersection};
use crate::shape::{Shape, ShapeId, ShapeKind};

/// Top-level editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drawing a new shape.
    Create,
    /// Selecting and moving existing shapes.
    #[default]
    Edit,
}

/// Pointer buttons the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Keyboard modifier state accompanying a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

/// Keys the editor reacts to. The host maps physical bindings onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Coarse clockwise rotation step.
    RotateCwCoarse,
    /// Fine clockwise rotation step.
    RotateCwFine,
    /// Coarse counter-clockwise rotation step.
    RotateCcwCoarse,
    /// Fine counter-clockwise rotation step.
    RotateCcwFine,
    Escape,
    Enter,
}

impl Key {
    /// Keys whose repeated presses coalesce into one history entry,
    /// committed on release.
    fn is_edit_key(&self) -> bool {
        matches!(
            self,
            Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
                | Key::RotateCwCoarse
                | Key::RotateCwFine
                | Key::RotateCcwCoarse
                | Key::RotateCcwFine
        )
    }
}

/// Result of the hover hit-test, in priority order: a vertex wins over an
/// insertable edge, which wins over plain containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    /// A vertex within the hit tolerance.
    Vertex { id: ShapeId, index: usize },
    /// An edge of a shape that supports point insertion.
    Edge { id: ShapeId, index: usize },
    /// The pointer is inside the shape's outline.
    Inside { id: ShapeId },
}

/// What a left-button drag is currently moving.
#[derive(Debug, Clone, Copy)]
enum Drag {
    Vertex { id: ShapeId, index: usize },
    Selection,
}

/// Point lists captured when an edit gesture starts, compared on release
/// to decide whether a snapshot and notification are due.
#[derive(Debug, Clone)]
struct PendingEdit {
    rotated: bool,
    before: Vec<(ShapeId, Vec<Point>)>,
}

/// The interactive shape editor for one loaded image.
pub struct Editor<S: EventSink> {
    collection: ShapeCollection,
    bounds: ImageBounds,
    sink: S,
    config: EditorConfig,
    mode: Mode,
    create_kind: ShapeKind,
    auto_labeling: bool,
    default_label: String,
    scale: f32,
    /// Shape currently being drawn, if any.
    current: Option<Shape>,
    /// Rubber-band preview segment while drawing.
    rubber_band: Option<(Point, Point)>,
    /// Whether the preview is snapped onto the first vertex (imminent close).
    snapped_to_start: bool,
    hover: Option<Hover>,
    drag: Option<Drag>,
    /// Last bounded pointer position during a selection drag.
    prev_point: Point,
    /// Offsets from the pointer to the selection's union bounding box.
    offsets: (Point, Point),
    active_edit: Option<PendingEdit>,
}

impl<S: EventSink> Editor<S> {
    /// Create an editor for an image of the given size.
    pub fn new(bounds: ImageBounds, sink: S) -> Self {
        Self::with_config(bounds, sink, EditorConfig::default())
    }

    /// Create an editor with custom interaction tuning.
    pub fn with_config(bounds: ImageBounds, sink: S, config: EditorConfig) -> Self {
        Self {
            collection: ShapeCollection::new(),
            bounds,
            sink,
            config,
            mode: Mode::default(),
            create_kind: ShapeKind::Rectangle,
            auto_labeling: false,
            default_label: String::new(),
            scale: 1.0,
            current: None,
            rubber_band: None,
            snapped_to_start: false,
            hover: None,
            drag: None,
            prev_point: Point::new(0.0, 0.0),
            offsets: (Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
            active_edit: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn collection(&self) -> &ShapeCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut ShapeCollection {
        &mut self.collection
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. Entering edit mode aborts any drawing in progress.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Edit {
            self.cancel_drawing();
        }
        self.mode = mode;
    }

    pub fn create_kind(&self) -> ShapeKind {
        self.create_kind
    }

    pub fn set_create_kind(&mut self, kind: ShapeKind) {
        self.create_kind = kind;
    }

    pub fn auto_labeling(&self) -> bool {
        self.auto_labeling
    }

    pub fn set_auto_labeling(&mut self, on: bool) {
        self.auto_labeling = on;
    }

    /// Label assigned to finalized shapes outside auto-labeling mode.
    pub fn set_default_label(&mut self, label: impl Into<String>) {
        self.default_label = label.into();
    }

    /// Canvas zoom factor; the hit tolerance shrinks as the zoom grows.
    pub fn set_scale(&mut self, scale: f32) {
        if scale > 0.0 {
            self.scale = scale;
        }
    }

    /// Effective hit-test tolerance in image pixels.
    pub fn hit_epsilon(&self) -> f32 {
        self.config.hit_epsilon / self.scale
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// The shape currently being drawn.
    pub fn current_shape(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    /// The rubber-band preview segment while drawing.
    pub fn rubber_band(&self) -> Option<(Point, Point)> {
        self.rubber_band
    }

    /// Whether the preview cursor is snapped onto the first vertex.
    pub fn is_snapped_to_start(&self) -> bool {
        self.snapped_to_start
    }

    /// Last hover hit-test result.
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    /// Replace the image: new bounds, new shape list, fresh history.
    pub fn load_image(&mut self, bounds: ImageBounds, shapes: Vec<Shape>) {
        self.bounds = bounds;
        self.collection.load(shapes);
        self.current = None;
        self.rubber_band = None;
        self.snapped_to_start = false;
        self.hover = None;
        self.drag = None;
        self.active_edit = None;
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    pub fn pointer_down(&mut self, pos: Point, button: PointerButton, mods: Modifiers) {
        if button != PointerButton::Left {
            return;
        }
        match self.mode {
            Mode::Create => self.handle_create_click(pos, mods),
            Mode::Edit => self.handle_edit_press(pos, mods),
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        match self.mode {
            Mode::Create => self.update_rubber_band(pos),
            Mode::Edit => match self.drag {
                Some(Drag::Vertex { id, index }) => self.bounded_move_vertex(id, index, pos),
                Some(Drag::Selection) => {
                    self.bounded_move_selection(pos);
                }
                None => self.hover = self.hit_test(pos),
            },
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button != PointerButton::Left {
            return;
        }
        if self.drag.take().is_some() {
            self.commit_edit();
        }
    }

    /// A double click finalizes an open polygon or line strip.
    pub fn double_click(&mut self) {
        if self.mode != Mode::Create {
            return;
        }
        self.finalize_open_shape();
    }

    // ========================================================================
    // Keyboard events
    // ========================================================================

    pub fn key_press(&mut self, key: Key) {
        let nudge = self.config.nudge_step;
        match key {
            Key::Escape => self.cancel_drawing(),
            Key::Enter => self.finalize_open_shape(),
            Key::ArrowLeft => self.nudge_selected(-nudge, 0.0),
            Key::ArrowRight => self.nudge_selected(nudge, 0.0),
            Key::ArrowUp => self.nudge_selected(0.0, -nudge),
            Key::ArrowDown => self.nudge_selected(0.0, nudge),
            Key::RotateCwCoarse => self.rotate_selected(self.config.rotate_step_coarse),
            Key::RotateCwFine => self.rotate_selected(self.config.rotate_step_fine),
            Key::RotateCcwCoarse => self.rotate_selected(-self.config.rotate_step_coarse),
            Key::RotateCcwFine => self.rotate_selected(-self.config.rotate_step_fine),
        }
    }

    /// Repeated nudge/rotate presses coalesce into one history entry,
    /// committed when the key is released.
    pub fn key_release(&mut self, key: Key) {
        if key.is_edit_key() {
            self.commit_edit();
        }
    }

    // ========================================================================
    // Collection shortcuts
    // ========================================================================

    /// Delete the selected shapes, notifying the selection change.
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.collection.delete_selected();
        if !removed.is_empty() {
            self.sink.notify(EditorEvent::SelectionChanged(Vec::new()));
        }
        removed.len()
    }

    /// Undo the last committed edit, resetting interaction state.
    pub fn undo(&mut self) -> bool {
        if !self.collection.undo() {
            return false;
        }
        self.drag = None;
        self.hover = None;
        self.active_edit = None;
        self.sink.notify(EditorEvent::SelectionChanged(Vec::new()));
        true
    }

    // ========================================================================
    // Creation
    // ========================================================================

    fn handle_create_click(&mut self, pos: Point, mods: Modifiers) {
        if self.current.is_none() {
            // First click starts a new shape; clamp it onto the image for
            // everything except rotation boxes, which may start outside.
            let p = if self.create_kind != ShapeKind::Rotation && !self.bounds.contains(&pos) {
                self.bounds.clamp(&pos)
            } else {
                pos
            };
            let mut shape = Shape::new(self.create_kind, "");
            shape.add_point(p);
            self.current = Some(shape);
            self.sink.notify(EditorEvent::DrawingStateChanged(true));
            if self.create_kind == ShapeKind::Point {
                self.finalize_current();
            }
            return;
        }

        let (p, _) = self.create_point_at(pos);
        match self.create_kind {
            ShapeKind::Polygon => {
                if let Some(current) = self.current.as_mut() {
                    current.add_point(p);
                }
                if self.current.as_ref().is_some_and(|c| c.is_closed) {
                    self.finalize_current();
                }
            }
            ShapeKind::Rectangle | ShapeKind::Rotation => {
                // Second click: expand the diagonal into four corners,
                // clockwise from the first click.
                if let Some(current) = self.current.as_mut() {
                    if let Some(&first) = current.points.first() {
                        current.points = vec![
                            first,
                            Point::new(p.x, first.y),
                            p,
                            Point::new(first.x, p.y),
                        ];
                    }
                }
                self.finalize_current();
            }
            ShapeKind::Circle | ShapeKind::Line => {
                if let Some(current) = self.current.as_mut() {
                    current.add_point(p);
                }
                self.finalize_current();
            }
            ShapeKind::LineStrip => {
                if let Some(current) = self.current.as_mut() {
                    current.add_point(p);
                }
                if mods.ctrl {
                    self.finalize_current();
                }
            }
            ShapeKind::Point => {}
        }
    }

    /// Bound the cursor for drawing and snap it onto the first polygon
    /// vertex when close enough. Returns the effective point and whether
    /// it snapped.
    fn create_point_at(&self, pos: Point) -> (Point, bool) {
        let Some(current) = self.current.as_ref() else {
            return (pos, false);
        };
        let mut p = pos;
        if current.kind != ShapeKind::Rotation && !self.bounds.contains(&p) {
            let anchor = current.points.last().copied().unwrap_or(p);
            p = box_edge_intersection(&anchor, &p, &self.bounds.corners())
                .unwrap_or_else(|| self.bounds.clamp(&p));
        }
        if current.kind == ShapeKind::Polygon && current.points.len() >= MIN_POLYGON_VERTICES {
            if let Some(first) = current.points.first() {
                if p.distance_to(first) <= self.hit_epsilon() {
                    return (*first, true);
                }
            }
        }
        (p, false)
    }

    fn update_rubber_band(&mut self, pos: Point) {
        let (p, snapped) = self.create_point_at(pos);
        let Some(current) = self.current.as_ref() else {
            self.rubber_band = None;
            self.snapped_to_start = false;
            return;
        };
        let anchor = current.points.last().copied().unwrap_or(p);
        self.rubber_band = Some((anchor, p));
        self.snapped_to_start = snapped;
    }

    /// Close and commit the in-progress shape.
    ///
    /// A shape whose point count is invalid for its kind is rejected with a
    /// logged diagnostic; open-ended kinds stay in progress so the user can
    /// keep drawing.
    fn finalize_current(&mut self) {
        let Some(mut shape) = self.current.take() else {
            return;
        };
        shape.close();
        if let Err(err) = shape.validate() {
            log::warn!("rejecting shape finalize: {err}");
            if shape.can_add_point() {
                shape.is_closed = false;
                self.current = Some(shape);
            } else {
                self.rubber_band = None;
                self.snapped_to_start = false;
                self.sink.notify(EditorEvent::DrawingStateChanged(false));
            }
            return;
        }
        shape.label = if self.auto_labeling {
            AUTOLABEL_OBJECT.to_string()
        } else {
            self.default_label.clone()
        };
        let id = self.collection.add(shape);
        self.rubber_band = None;
        self.snapped_to_start = false;
        self.sink.notify(EditorEvent::ShapeCreated(id));
        self.sink.notify(EditorEvent::DrawingStateChanged(false));
    }

    /// Finalize an open polygon or line strip (double click / Enter).
    fn finalize_open_shape(&mut self) {
        let finalizable = self.current.as_ref().is_some_and(|c| {
            matches!(c.kind, ShapeKind::Polygon | ShapeKind::LineStrip) && c.points.len() > 2
        });
        if finalizable {
            self.finalize_current();
        }
    }

    /// Discard the in-progress shape without touching the history.
    fn cancel_drawing(&mut self) {
        if self.current.take().is_some() {
            self.rubber_band = None;
            self.snapped_to_start = false;
            log::debug!("drawing aborted");
            self.sink.notify(EditorEvent::DrawingStateChanged(false));
        }
    }

    // ========================================================================
    // Edit mode
    // ========================================================================

    /// Hover hit-test: topmost-drawn shape wins, and within a shape a
    /// vertex beats an insertable edge beats containment.
    fn hit_test(&self, pos: Point) -> Option<Hover> {
        let epsilon = self.hit_epsilon();
        for shape in self.collection.shapes().iter().rev() {
            if !shape.is_visible {
                continue;
            }
            if let Some(index) = shape.nearest_vertex(&pos, epsilon) {
                return Some(Hover::Vertex {
                    id: shape.id,
                    index,
                });
            }
            if shape.can_add_point() {
                if let Some(index) = shape.nearest_edge(&pos, epsilon) {
                    return Some(Hover::Edge {
                        id: shape.id,
                        index,
                    });
                }
            }
            if shape.contains_point(&pos) {
                return Some(Hover::Inside { id: shape.id });
            }
        }
        None
    }

    fn handle_edit_press(&mut self, pos: Point, mods: Modifiers) {
        let hover = self.hit_test(pos);
        self.hover = hover;
        match hover {
            Some(Hover::Vertex { id, index }) => {
                self.update_selection(id, mods.ctrl || mods.shift);
                self.begin_edit(&[id], false);
                self.drag = Some(Drag::Vertex { id, index });
            }
            Some(Hover::Edge { id, index }) => {
                self.update_selection(id, mods.ctrl || mods.shift);
                self.begin_edit(&[id], false);
                let inserted = match self.collection.get_mut(id) {
                    Some(shape) => match shape.insert_point(index, pos) {
                        Ok(()) => true,
                        Err(err) => {
                            log::warn!("edge insert failed: {err}");
                            false
                        }
                    },
                    None => false,
                };
                if inserted {
                    self.drag = Some(Drag::Vertex { id, index });
                } else {
                    self.active_edit = None;
                }
            }
            Some(Hover::Inside { id }) => {
                self.update_selection(id, mods.ctrl || mods.shift);
                if let Err(err) = self.selection_move_allowed() {
                    log::warn!("rejecting selection drag: {err}");
                    return;
                }
                self.calculate_offsets(pos);
                self.prev_point = pos;
                let ids = self.collection.selected_ids();
                self.begin_edit(&ids, false);
                self.drag = Some(Drag::Selection);
            }
            None => {
                if self.collection.clear_selection() {
                    self.sink.notify(EditorEvent::SelectionChanged(Vec::new()));
                }
            }
        }
    }

    /// Make `id` part of the selection: additive with a modifier held,
    /// exclusive otherwise. Already-selected shapes are left alone so a
    /// drag can start on a multi-selection.
    fn update_selection(&mut self, id: ShapeId, additive: bool) {
        let already = self.collection.get(id).is_some_and(|s| s.is_selected);
        if already {
            return;
        }
        let mut changed = false;
        if !additive {
            changed |= self.collection.clear_selection();
        }
        changed |= self.collection.set_selected(id, true);
        if changed {
            let ids = self.collection.selected_ids();
            self.sink.notify(EditorEvent::SelectionChanged(ids));
        }
    }

    /// Rotation shapes cannot be moved together with other kinds: the
    /// bounds check applies to one half of the selection only, so the whole
    /// move is rejected instead of partially applied.
    fn selection_move_allowed(&self) -> Result<(), ShapeError> {
        let mut has_rotation = false;
        let mut has_other = false;
        for shape in self.collection.shapes().iter().filter(|s| s.is_selected) {
            if shape.kind == ShapeKind::Rotation {
                has_rotation = true;
            } else {
                has_other = true;
            }
        }
        if has_rotation && has_other {
            Err(ShapeError::MixedShapeKinds)
        } else {
            Ok(())
        }
    }

    fn selection_is_rotation_only(&self) -> bool {
        let mut any = false;
        for shape in self.collection.shapes().iter().filter(|s| s.is_selected) {
            if shape.kind != ShapeKind::Rotation {
                return false;
            }
            any = true;
        }
        any
    }

    /// Union bounding rect of the selected shapes.
    fn selection_rect(&self) -> Option<Rect> {
        self.collection
            .shapes()
            .iter()
            .filter(|s| s.is_selected)
            .filter_map(|s| s.bounding_rect())
            .reduce(|a, b| a.union(&b))
    }

    /// Capture the pointer-to-bounding-box offsets so a whole selection
    /// drag can be clamped as one unit.
    fn calculate_offsets(&mut self, pos: Point) {
        let Some(rect) = self.selection_rect() else {
            return;
        };
        self.offsets = (
            Point::new(rect.x - pos.x, rect.y - pos.y),
            Point::new(rect.right() - pos.x, rect.bottom() - pos.y),
        );
    }

    /// Drag one vertex, clamping it onto the image through the box-edge
    /// intersection. Rotation shapes may extend outside the image.
    fn bounded_move_vertex(&mut self, id: ShapeId, index: usize, pos: Point) {
        let Some(shape) = self.collection.get(id) else {
            return;
        };
        let Some(anchor) = shape.points.get(index).copied() else {
            return;
        };
        let mut target = pos;
        if shape.kind != ShapeKind::Rotation && !self.bounds.contains(&target) {
            target = box_edge_intersection(&anchor, &target, &self.bounds.corners())
                .unwrap_or_else(|| self.bounds.clamp(&target));
        }
        let dx = target.x - anchor.x;
        let dy = target.y - anchor.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        if let Some(shape) = self.collection.get_mut(id) {
            shape.move_point(index, dx, dy);
        }
    }

    /// Translate the whole selection toward `pos`, bounded so its union
    /// bounding box stays on the image. Rotation-only selections skip the
    /// bounds check. Returns whether anything moved.
    fn bounded_move_selection(&mut self, pos: Point) -> bool {
        let ids = self.collection.selected_ids();
        if ids.is_empty() {
            return false;
        }
        let mut pos = pos;
        if !self.selection_is_rotation_only() {
            if !self.bounds.contains(&pos) {
                return false;
            }
            let low = pos.offset(self.offsets.0.x, self.offsets.0.y);
            if !self.bounds.contains(&low) {
                pos = pos.offset(-low.x.min(0.0), -low.y.min(0.0));
            }
            let high = pos.offset(self.offsets.1.x, self.offsets.1.y);
            if !self.bounds.contains(&high) {
                pos = pos.offset(
                    (self.bounds.width - 1.0 - high.x).min(0.0),
                    (self.bounds.height - 1.0 - high.y).min(0.0),
                );
            }
        }
        let dx = pos.x - self.prev_point.x;
        let dy = pos.y - self.prev_point.y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        for id in ids {
            if let Some(shape) = self.collection.get_mut(id) {
                shape.move_by(dx, dy);
            }
        }
        self.prev_point = pos;
        true
    }

    // ========================================================================
    // Keyboard nudges
    // ========================================================================

    /// Translate the selection by a key step, clamped to the image for
    /// non-rotation selections.
    fn nudge_selected(&mut self, dx: f32, dy: f32) {
        if self.current.is_some() {
            return;
        }
        let ids = self.collection.selected_ids();
        if ids.is_empty() {
            return;
        }
        if let Err(err) = self.selection_move_allowed() {
            log::warn!("rejecting selection nudge: {err}");
            return;
        }
        self.begin_edit(&ids, false);
        let (mut dx, mut dy) = (dx, dy);
        if !self.selection_is_rotation_only() {
            if let Some(rect) = self.selection_rect() {
                dx = dx
                    .max(-rect.x)
                    .min(self.bounds.width - 1.0 - rect.right());
                dy = dy
                    .max(-rect.y)
                    .min(self.bounds.height - 1.0 - rect.bottom());
            }
        }
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        for id in ids {
            if let Some(shape) = self.collection.get_mut(id) {
                shape.move_by(dx, dy);
            }
        }
    }

    /// Rotate the selection by a key step. Only pure rotation-shape
    /// selections qualify; anything else is rejected as a whole.
    fn rotate_selected(&mut self, delta: f32) {
        if self.current.is_some() {
            return;
        }
        let ids = self.collection.selected_ids();
        if ids.is_empty() {
            return;
        }
        if !self.selection_is_rotation_only() {
            log::warn!("rotation keys ignored: selection contains non-rotation shapes");
            return;
        }
        self.begin_edit(&ids, true);
        for id in ids {
            if let Some(shape) = self.collection.get_mut(id) {
                shape.rotate_by(delta);
            }
        }
    }

    // ========================================================================
    // Edit commit
    // ========================================================================

    /// Capture the affected point lists at the start of a gesture. A
    /// gesture already in flight keeps its original baseline.
    fn begin_edit(&mut self, ids: &[ShapeId], rotated: bool) {
        if self.active_edit.is_some() {
            return;
        }
        let before = ids
            .iter()
            .filter_map(|id| self.collection.get(*id).map(|s| (*id, s.points.clone())))
            .collect();
        self.active_edit = Some(PendingEdit { rotated, before });
    }

    /// Compare the affected shapes against the captured baseline; commit a
    /// snapshot and notify only when something actually changed. This is
    /// the sole interaction path that marks the document dirty for moves.
    fn commit_edit(&mut self) {
        let Some(edit) = self.active_edit.take() else {
            return;
        };
        let changed = edit.before.iter().any(|(id, points)| {
            self.collection
                .get(*id)
                .map_or(true, |s| &s.points != points)
        });
        if !changed {
            return;
        }
        self.collection.snapshot();
        self.collection.mark_dirty();
        self.sink.notify(if edit.rotated {
            EditorEvent::ShapeRotated
        } else {
            EditorEvent::ShapeMoved
        });
    }
}
