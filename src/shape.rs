//! The annotation shape primitive.
//!
//! A [`Shape`] is an ordered vertex list plus labeling metadata. Geometric
//! queries (nearest vertex/edge, containment, bounding rect) never mutate
//! interaction flags; those are owned by the collection and the editor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{MIN_POLYGON_VERTICES, SHAPE_CLOSE_EPSILON};
use crate::error::ShapeError;
use crate::geometry::{
    Point, Rect, adjacent_rotation_points, distance_to_segment, midpoint, rotate_point, wrap_angle,
};

/// Runtime identity of a shape within a collection. Never reused.
pub type ShapeId = u64;

// ============================================================================
// Shape Kind
// ============================================================================

/// The geometric kind of a shape. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A single point marker.
    Point,
    /// An axis-aligned rectangle stored as 4 corner points.
    Rectangle,
    /// A closed polygon with an unbounded number of vertices.
    Polygon,
    /// A circle stored as center plus one point on the outline.
    Circle,
    /// A two-point line segment.
    Line,
    /// A rectangle with a free rotation angle, stored as 4 corner points.
    Rotation,
    /// An open polyline with an unbounded number of vertices.
    LineStrip,
}

impl ShapeKind {
    /// Human-readable point cardinality, used in diagnostics.
    fn expected_points(&self) -> &'static str {
        match self {
            ShapeKind::Point => "1",
            ShapeKind::Line | ShapeKind::Circle => "2",
            ShapeKind::Rectangle => "2 or 4",
            ShapeKind::Rotation => "4",
            ShapeKind::Polygon => "at least 3",
            ShapeKind::LineStrip => "at least 2",
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

fn default_true() -> bool {
    true
}

/// A single annotation shape on an image.
///
/// Serialization covers the persistence-facing record (label, points,
/// grouping, metadata). Interaction-only state (`is_selected`, the cached
/// rotation center) is skipped and rebuilt at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Runtime identity, assigned by the collection.
    #[serde(skip)]
    pub id: ShapeId,
    /// The geometric kind. Never changes after creation.
    #[serde(rename = "shape_type")]
    pub kind: ShapeKind,
    /// The assigned label.
    #[serde(default)]
    pub label: String,
    /// Ordered vertices in image-pixel coordinates.
    pub points: Vec<Point>,
    /// Rotation angle in radians, kept in `[0, 2π)`. Rotation shapes only.
    #[serde(default)]
    pub direction: f32,
    /// Cached rotation center (midpoint of the diagonal), recomputed on close.
    #[serde(skip)]
    pub center: Option<Point>,
    /// Optional grouping key linking shapes into one logical object.
    #[serde(default)]
    pub group_id: Option<u32>,
    /// Optional model confidence for predicted shapes.
    #[serde(default)]
    pub score: Option<f32>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Named boolean flags. Unknown keys round-trip untouched.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
    /// Named enumeration attributes. Unknown keys round-trip untouched.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Directed key→value relations between group ids (KIE annotation).
    #[serde(default)]
    pub kie_linking: Vec<(u32, u32)>,
    /// Whether the shape is marked as difficult.
    #[serde(default, rename = "difficult")]
    pub is_difficult: bool,
    /// Selection flag, managed by the collection and editor.
    #[serde(skip)]
    pub is_selected: bool,
    /// Visibility flag.
    #[serde(skip, default = "default_true")]
    pub is_visible: bool,
    /// Whether the shape outline has been closed.
    #[serde(skip, default = "default_true")]
    pub is_closed: bool,
}

impl Shape {
    /// Create a new, empty shape of the given kind.
    pub fn new(kind: ShapeKind, label: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            label: label.into(),
            points: Vec::new(),
            direction: 0.0,
            center: None,
            group_id: None,
            score: None,
            description: String::new(),
            flags: BTreeMap::new(),
            attributes: BTreeMap::new(),
            kie_linking: Vec::new(),
            is_difficult: false,
            is_selected: false,
            is_visible: true,
            is_closed: false,
        }
    }

    // ========================================================================
    // Structural edits
    // ========================================================================

    /// Append a point while drawing.
    ///
    /// Rectangles and rotation boxes accumulate up to 4 points and then
    /// ignore further additions. For other kinds, a point landing within
    /// [`SHAPE_CLOSE_EPSILON`] of the first vertex closes the shape instead
    /// of being appended, once enough vertices exist to form an outline.
    pub fn add_point(&mut self, point: Point) {
        if matches!(self.kind, ShapeKind::Rectangle | ShapeKind::Rotation) {
            if self.points.len() < 4 {
                self.points.push(point);
            }
            return;
        }
        let closes = self.points.len() >= MIN_POLYGON_VERTICES
            && self
                .points
                .first()
                .is_some_and(|first| first.distance_to(&point) < SHAPE_CLOSE_EPSILON);
        if closes {
            self.close();
        } else {
            self.points.push(point);
        }
    }

    /// Insert a point before index `i`. Fails on an out-of-range index.
    pub fn insert_point(&mut self, i: usize, point: Point) -> Result<(), ShapeError> {
        if i > self.points.len() {
            return Err(ShapeError::index_out_of_range(i, self.points.len()));
        }
        self.points.insert(i, point);
        Ok(())
    }

    /// Remove the point at index `i`, returning it, or `None` when absent.
    pub fn remove_point(&mut self, i: usize) -> Option<Point> {
        if i >= self.points.len() {
            return None;
        }
        Some(self.points.remove(i))
    }

    /// Remove and return the last point.
    pub fn pop_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    // ========================================================================
    // Constrained movement
    // ========================================================================

    /// Move one vertex by an offset, preserving the kind's invariants.
    ///
    /// Rectangles stay axis-aligned: the two adjacent corners each follow
    /// along a single axis while the opposite corner is untouched. Rotation
    /// boxes re-derive the two adjacent corners from the rotation angle.
    /// All other kinds move the vertex freely.
    ///
    /// Returns `false` when the index is out of range or the rotation
    /// adjacency is degenerate; the shape is left unchanged in that case.
    pub fn move_point(&mut self, index: usize, dx: f32, dy: f32) -> bool {
        if index >= self.points.len() {
            return false;
        }
        let target = self.points[index].offset(dx, dy);
        match self.kind {
            ShapeKind::Rectangle if self.points.len() == 4 => {
                self.points[index] = target;
                let left = (index + 1) % 4;
                let right = (index + 3) % 4;
                if index % 2 == 0 {
                    self.points[right].x += dx;
                    self.points[left].y += dy;
                } else {
                    self.points[right].y += dy;
                    self.points[left].x += dx;
                }
                true
            }
            ShapeKind::Rotation if self.points.len() == 4 => {
                let opposite = self.points[(index + 2) % 4];
                let Some((a, b)) =
                    adjacent_rotation_points(self.direction, &opposite, &target, index)
                else {
                    return false;
                };
                self.points[index] = target;
                self.points[(index + 1) % 4] = a;
                self.points[(index + 3) % 4] = b;
                self.center = Some(midpoint(&self.points[0], &self.points[2]));
                true
            }
            _ => {
                self.points[index] = target;
                true
            }
        }
    }

    /// Translate every point (and the cached center) uniformly.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        for p in &mut self.points {
            *p = p.offset(dx, dy);
        }
        if let Some(center) = &mut self.center {
            *center = center.offset(dx, dy);
        }
    }

    /// Rotate a rotation box about its cached center.
    ///
    /// Positive `delta` is clockwise on screen. Returns `false` for other
    /// kinds or when no center has been computed yet.
    pub fn rotate_by(&mut self, delta: f32) -> bool {
        if self.kind != ShapeKind::Rotation {
            return false;
        }
        let Some(center) = self.center else {
            return false;
        };
        for p in &mut self.points {
            *p = rotate_point(p, &center, delta);
        }
        self.direction = wrap_angle(self.direction + delta);
        true
    }

    // ========================================================================
    // Geometric queries
    // ========================================================================

    /// Index of the vertex closest to `point` within `epsilon`, or `None`.
    /// Equidistant candidates resolve to the lowest index.
    pub fn nearest_vertex(&self, point: &Point, epsilon: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = p.distance_to(point);
            if d <= epsilon && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Index `i` of the edge `(points[i-1], points[i])` closest to `point`
    /// within `epsilon`, or `None`. The scan includes the wraparound edge
    /// `(points[last], points[0])` at `i == 0`.
    pub fn nearest_edge(&self, point: &Point, epsilon: f32) -> Option<usize> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for i in 0..n {
            let a = &self.points[(i + n - 1) % n];
            let b = &self.points[i];
            let d = distance_to_segment(point, a, b);
            if d <= epsilon && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Check if a point lies inside the shape's closed outline.
    ///
    /// Rectangles in the two-point drawing form use the min/max box; circles
    /// use the center+edge radius; everything else runs an even-odd ray cast
    /// over the vertex sequence.
    pub fn contains_point(&self, point: &Point) -> bool {
        match self.kind {
            ShapeKind::Point => false,
            ShapeKind::Circle => {
                if self.points.len() < 2 {
                    return false;
                }
                let radius = self.points[0].distance_to(&self.points[1]);
                self.points[0].distance_to(point) <= radius
            }
            ShapeKind::Rectangle if self.points.len() == 2 => {
                Rect::from_points(&self.points).is_some_and(|r| r.contains(point))
            }
            _ => ray_cast_contains(&self.points, point),
        }
    }

    /// Smallest axis-aligned rectangle covering the shape.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(&self.points)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Close the shape. Idempotent.
    ///
    /// For a rotation box with 4 points this also caches the center as the
    /// midpoint of the diagonal.
    pub fn close(&mut self) {
        if self.kind == ShapeKind::Rotation && self.points.len() == 4 {
            self.center = Some(midpoint(&self.points[0], &self.points[2]));
        }
        self.is_closed = true;
    }

    /// Whether more points may still be added interactively. Only polygons
    /// and line strips have open-ended cardinality; every other kind is
    /// finalized once its fixed point count is reached.
    pub fn can_add_point(&self) -> bool {
        matches!(self.kind, ShapeKind::Polygon | ShapeKind::LineStrip)
    }

    /// Validate the point cardinality for this kind.
    ///
    /// Callers must validate before geometry-dependent rendering or export;
    /// a rectangle with 3 points is reported here instead of drawing garbage.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let n = self.points.len();
        let ok = match self.kind {
            ShapeKind::Point => n == 1,
            ShapeKind::Line | ShapeKind::Circle => n == 2,
            ShapeKind::Rectangle => n == 2 || n == 4,
            ShapeKind::Rotation => n == 4,
            ShapeKind::Polygon => {
                if self.is_closed {
                    n >= MIN_POLYGON_VERTICES
                } else {
                    n >= 1
                }
            }
            ShapeKind::LineStrip => {
                if self.is_closed {
                    n >= 2
                } else {
                    n >= 1
                }
            }
        };
        if ok {
            Ok(())
        } else {
            Err(ShapeError::invalid_point_count(
                self.kind,
                self.kind.expected_points(),
                n,
            ))
        }
    }
}

/// Even-odd ray containment test over a closed vertex sequence.
fn ray_cast_contains(points: &[Point], point: &Point) -> bool {
    let n = points.len();
    if n < MIN_POLYGON_VERTICES {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = &points[i];
        let vj = &points[j];
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    fn rectangle(x1: f32, y1: f32, x2: f32, y2: f32) -> Shape {
        let mut shape = Shape::new(ShapeKind::Rectangle, "box");
        shape.points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        shape.close();
        shape
    }

    fn rotation_box(cx: f32, cy: f32, w: f32, h: f32, theta: f32) -> Shape {
        let center = Point::new(cx, cy);
        let base = [
            Point::new(cx - w / 2.0, cy - h / 2.0),
            Point::new(cx + w / 2.0, cy - h / 2.0),
            Point::new(cx + w / 2.0, cy + h / 2.0),
            Point::new(cx - w / 2.0, cy + h / 2.0),
        ];
        let mut shape = Shape::new(ShapeKind::Rotation, "obb");
        shape.points = base
            .iter()
            .map(|p| rotate_point(p, &center, theta))
            .collect();
        shape.direction = wrap_angle(theta);
        shape.close();
        shape
    }

    #[test]
    fn test_rectangle_caps_at_four_points() {
        let mut shape = Shape::new(ShapeKind::Rectangle, "box");
        for i in 0..6 {
            shape.add_point(Point::new(i as f32, 0.0));
        }
        assert_eq!(shape.points.len(), 4);
    }

    #[test]
    fn test_polygon_closes_near_first_vertex() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        shape.add_point(Point::new(0.0, 0.0));
        shape.add_point(Point::new(100.0, 0.0));
        shape.add_point(Point::new(100.0, 100.0));
        // Within the closing tolerance of the first vertex
        shape.add_point(Point::new(1.0, 1.0));
        assert!(shape.is_closed);
        assert_eq!(shape.points.len(), 3);
    }

    #[test]
    fn test_polygon_does_not_close_before_three_points() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        shape.add_point(Point::new(0.0, 0.0));
        shape.add_point(Point::new(1.0, 1.0));
        assert!(!shape.is_closed);
        assert_eq!(shape.points.len(), 2);
    }

    #[test]
    fn test_insert_and_remove_point_bounds() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        shape.add_point(Point::new(0.0, 0.0));
        assert!(shape.insert_point(5, Point::new(1.0, 1.0)).is_err());
        assert!(shape.insert_point(1, Point::new(1.0, 1.0)).is_ok());
        assert_eq!(shape.remove_point(7), None);
        assert_eq!(shape.remove_point(0), Some(Point::new(0.0, 0.0)));
        assert_eq!(shape.pop_point(), Some(Point::new(1.0, 1.0)));
        assert_eq!(shape.pop_point(), None);
    }

    #[test]
    fn test_move_point_keeps_rectangle_axis_aligned() {
        let mut shape = rectangle(10.0, 10.0, 50.0, 40.0);
        assert!(shape.move_point(0, 5.0, -3.0));
        let p = &shape.points;
        // Opposite corner untouched
        assert_eq!(p[2], Point::new(50.0, 40.0));
        // Adjacent corners follow along one axis each
        assert_eq!(p[0], Point::new(15.0, 7.0));
        assert_eq!(p[1], Point::new(50.0, 7.0));
        assert_eq!(p[3], Point::new(15.0, 40.0));
        // Still a rectangle: opposite corners share one coordinate each
        assert_eq!(p[0].x, p[3].x);
        assert_eq!(p[0].y, p[1].y);
        assert_eq!(p[2].x, p[1].x);
        assert_eq!(p[2].y, p[3].y);
    }

    #[test]
    fn test_move_point_rectangle_any_corner() {
        for index in 0..4 {
            let mut shape = rectangle(10.0, 10.0, 50.0, 40.0);
            assert!(shape.move_point(index, 4.0, 6.0));
            let p = &shape.points;
            assert_eq!(p[(index + 2) % 4], rectangle(10.0, 10.0, 50.0, 40.0).points[(index + 2) % 4]);
            assert!(approx_eq(p[0].x, p[3].x) && approx_eq(p[1].x, p[2].x));
            assert!(approx_eq(p[0].y, p[1].y) && approx_eq(p[2].y, p[3].y));
        }
    }

    #[test]
    fn test_move_point_rotation_preserves_angle() {
        let theta = 0.4;
        let mut shape = rotation_box(50.0, 50.0, 20.0, 10.0, theta);
        let opposite = shape.points[2];
        assert!(shape.move_point(0, 3.0, -2.0));
        // Opposite corner untouched
        assert_eq!(shape.points[2], opposite);
        // The first edge still runs at the rotation angle
        let e = Point::new(
            shape.points[1].x - shape.points[0].x,
            shape.points[1].y - shape.points[0].y,
        );
        assert!(approx_eq(e.y / e.x, theta.tan()));
        // Adjacent sides stay perpendicular
        let f = Point::new(
            shape.points[3].x - shape.points[0].x,
            shape.points[3].y - shape.points[0].y,
        );
        assert!((e.x * f.x + e.y * f.y).abs() < 0.01);
    }

    #[test]
    fn test_move_point_rotation_axis_aligned_branch() {
        let mut shape = rotation_box(50.0, 50.0, 20.0, 10.0, 0.0);
        assert!(shape.move_point(0, 2.0, 2.0));
        let p = &shape.points;
        assert_eq!(p[0], Point::new(42.0, 47.0));
        assert_eq!(p[1], Point::new(60.0, 47.0));
        assert_eq!(p[2], Point::new(60.0, 55.0));
        assert_eq!(p[3], Point::new(42.0, 55.0));
    }

    #[test]
    fn test_move_point_out_of_range() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        assert!(!shape.move_point(0, 1.0, 1.0));
    }

    #[test]
    fn test_move_by_translates_center() {
        let mut shape = rotation_box(50.0, 50.0, 20.0, 10.0, 0.3);
        shape.move_by(5.0, -5.0);
        let center = shape.center.unwrap();
        assert!(approx_eq(center.x, 55.0) && approx_eq(center.y, 45.0));
    }

    #[test]
    fn test_rotate_by_wraps_direction() {
        let mut shape = rotation_box(50.0, 50.0, 20.0, 10.0, 0.0);
        assert!(shape.rotate_by(FRAC_PI_2));
        assert!(approx_eq(shape.direction, FRAC_PI_2));
        // Center is unchanged by rotation
        let center = shape.center.unwrap();
        assert!(approx_eq(center.x, 50.0) && approx_eq(center.y, 50.0));
        // Full wrap comes back to zero
        for _ in 0..3 {
            shape.rotate_by(FRAC_PI_2);
        }
        assert!(shape.direction.abs() < 0.001 || (shape.direction - std::f32::consts::TAU).abs() < 0.001);
    }

    #[test]
    fn test_rotate_by_rejects_other_kinds() {
        let mut shape = rectangle(0.0, 0.0, 10.0, 10.0);
        assert!(!shape.rotate_by(0.5));
    }

    #[test]
    fn test_nearest_vertex_tie_break_is_lowest_index() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        shape.points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        // (5, 5) is equidistant from all four corners
        assert_eq!(shape.nearest_vertex(&Point::new(5.0, 5.0), 10.0), Some(0));
        assert_eq!(shape.nearest_vertex(&Point::new(9.0, 0.5), 3.0), Some(1));
        assert_eq!(shape.nearest_vertex(&Point::new(50.0, 50.0), 3.0), None);
    }

    #[test]
    fn test_nearest_edge_includes_wraparound() {
        let mut shape = Shape::new(ShapeKind::Polygon, "poly");
        shape.points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        // Closest to the left edge, which is (points[3], points[0]) at i == 0
        assert_eq!(shape.nearest_edge(&Point::new(0.5, 5.0), 2.0), Some(0));
        // Top edge (points[0], points[1]) at i == 1
        assert_eq!(shape.nearest_edge(&Point::new(5.0, 0.5), 2.0), Some(1));
        assert_eq!(shape.nearest_edge(&Point::new(50.0, 50.0), 2.0), None);
    }

    #[test]
    fn test_contains_point_rectangle() {
        let shape = rectangle(0.0, 0.0, 10.0, 10.0);
        assert!(shape.contains_point(&Point::new(5.0, 5.0)));
        assert!(!shape.contains_point(&Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_contains_point_two_point_rectangle() {
        let mut shape = Shape::new(ShapeKind::Rectangle, "box");
        shape.points = vec![Point::new(10.0, 10.0), Point::new(30.0, 20.0)];
        assert!(shape.contains_point(&Point::new(20.0, 15.0)));
        assert!(!shape.contains_point(&Point::new(5.0, 15.0)));
    }

    #[test]
    fn test_contains_point_circle() {
        let mut shape = Shape::new(ShapeKind::Circle, "dot");
        shape.points = vec![Point::new(50.0, 50.0), Point::new(60.0, 50.0)];
        assert!(shape.contains_point(&Point::new(55.0, 55.0)));
        assert!(!shape.contains_point(&Point::new(62.0, 50.0)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut shape = rotation_box(50.0, 50.0, 20.0, 10.0, 0.25);
        let points = shape.points.clone();
        let center = shape.center;
        shape.close();
        shape.close();
        assert_eq!(shape.points, points);
        assert_eq!(shape.center, center);
        assert!(shape.is_closed);
    }

    #[test]
    fn test_can_add_point() {
        assert!(Shape::new(ShapeKind::Polygon, "").can_add_point());
        assert!(Shape::new(ShapeKind::LineStrip, "").can_add_point());
        assert!(!Shape::new(ShapeKind::Rectangle, "").can_add_point());
        assert!(!Shape::new(ShapeKind::Rotation, "").can_add_point());
        assert!(!Shape::new(ShapeKind::Circle, "").can_add_point());
    }

    #[test]
    fn test_validate_cardinality() {
        let mut shape = rectangle(0.0, 0.0, 10.0, 10.0);
        assert!(shape.validate().is_ok());
        shape.points.pop();
        let err = shape.validate().unwrap_err();
        assert_eq!(
            err,
            ShapeError::invalid_point_count(ShapeKind::Rectangle, "2 or 4", 3)
        );

        let mut poly = Shape::new(ShapeKind::Polygon, "poly");
        poly.points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        poly.is_closed = true;
        assert!(poly.validate().is_err());
    }

    #[test]
    fn test_shape_record_roundtrip() {
        let mut shape = rectangle(1.0, 2.0, 3.0, 4.0);
        shape.label = "car".to_string();
        shape.group_id = Some(7);
        shape.score = Some(0.92);
        shape.flags.insert("occluded".to_string(), true);
        shape
            .attributes
            .insert("color".to_string(), "red".to_string());
        shape.kie_linking.push((1, 2));
        shape.is_difficult = true;
        shape.is_selected = true;

        let json = serde_json::to_string(&shape).expect("serialize");
        let restored: Shape = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.label, "car");
        assert_eq!(restored.group_id, Some(7));
        assert_eq!(restored.kie_linking, vec![(1, 2)]);
        assert!(restored.is_difficult);
        assert_eq!(restored.points, shape.points);
        // Interaction flags are not persisted
        assert!(!restored.is_selected);
        assert!(restored.is_visible);
    }
}
