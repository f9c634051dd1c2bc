//! Pure geometry kernel backing hit-testing and constrained movement.
//!
//! Every function here is side-effect free and total: degenerate inputs
//! (parallel lines, zero-length segments) produce `None` or a documented
//! fallback value instead of an error, because these routines run on every
//! pointer-move event and must never interrupt interaction.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Return this point translated by the given offset.
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Midpoint of two points.
pub fn midpoint(a: &Point, b: &Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Euclidean distance between two points.
pub fn distance(p1: &Point, p2: &Point) -> f32 {
    p1.distance_to(p2)
}

/// Distance from a point to the segment `(a, b)`.
///
/// The projection onto the segment is clamped: if it falls outside the
/// segment the distance to the nearer endpoint is returned. A degenerate
/// (zero-length) segment yields 0.
pub fn distance_to_segment(point: &Point, a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return 0.0;
    }
    let t = ((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * dx, a.y + t * dy);
    point.distance_to(&proj)
}

/// Intersection of two infinite lines in slope-intercept form.
///
/// Returns `None` when the slopes are equal (parallel or coincident).
pub fn line_intersection(k1: f32, b1: f32, k2: f32, b2: f32) -> Option<Point> {
    if k1 == k2 {
        return None;
    }
    let x = (b2 - b1) / (k1 - k2);
    let y = k1 * x + b1;
    Some(Point::new(x, y))
}

/// Reconstruct the two remaining corners of a rotated rectangle.
///
/// `moving` is the corner being dragged, `opposite` its diagonal partner,
/// and `theta` the rectangle's rotation angle. The first returned corner
/// belongs at index `(index + 1) % 4`, the second at `(index + 3) % 4`;
/// the parity of `index` decides which derived corner is which.
///
/// The axis-aligned case (`tan(theta) == 0`) is handled as a separate
/// branch so the perpendicular slope `-1/tan(theta)` never divides by zero.
pub fn adjacent_rotation_points(
    theta: f32,
    opposite: &Point,
    moving: &Point,
    index: usize,
) -> Option<(Point, Point)> {
    let k1 = theta.tan();
    if k1 == 0.0 {
        let a = Point::new(opposite.x, moving.y);
        let b = Point::new(moving.x, opposite.y);
        return Some(if index % 2 == 0 { (a, b) } else { (b, a) });
    }
    let k2 = -1.0 / k1;
    let b1 = moving.y - k1 * moving.x;
    let b2 = moving.y - k2 * moving.x;
    let b3 = opposite.y - k1 * opposite.x;
    let b4 = opposite.y - k2 * opposite.x;
    let a = line_intersection(k1, b1, k2, b4)?;
    let b = line_intersection(k2, b2, k1, b3)?;
    Some(if index % 2 == 0 { (a, b) } else { (b, a) })
}

/// Intersection of the segment `p1 -> p2` with the edges of a quad.
///
/// Walks the four edges in order, solves the two-segment linear system per
/// edge (skipping parallel edges via the determinant test), keeps only
/// intersections whose parameters lie in `[0, 1]` on both segments, and
/// returns the one whose edge midpoint is closest to `p2`. Ties go to the
/// first edge found in scan order. Used to clamp a dragged point so it
/// stays inside the image box.
pub fn box_edge_intersection(p1: &Point, p2: &Point, corners: &[Point; 4]) -> Option<Point> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let mut best: Option<(f32, Point)> = None;
    for i in 0..4 {
        let e1 = corners[i];
        let e2 = corners[(i + 1) % 4];
        let (x3, y3) = (e1.x, e1.y);
        let (x4, y4) = (e2.x, e2.y);
        let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if denom == 0.0 {
            continue;
        }
        let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
        let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;
        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            let hit = Point::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1));
            let mid = midpoint(&e1, &e2);
            let d = mid.distance_to(p2);
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, hit));
            }
        }
    }
    best.map(|(_, p)| p)
}

/// Rotate a point about a center.
///
/// Positive `theta` rotates clockwise on screen (image coordinates are
/// left-handed, y grows downward).
pub fn rotate_point(p: &Point, center: &Point, theta: f32) -> Point {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    let (sin, cos) = theta.sin_cos();
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Normalize an angle into `[0, 2π)`.
pub fn wrap_angle(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(TAU);
    if wrapped == TAU { 0.0 } else { wrapped }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner X coordinate
    pub x: f32,
    /// Top-left corner Y coordinate
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle covering all of the given points.
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Rect> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Right edge X coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge Y coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Pixel dimensions of the loaded image. All out-of-bounds clamping is
/// computed against this; it is immutable for the duration of one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub width: f32,
    pub height: f32,
}

impl ImageBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if a point lies on the image, using the `[0, size - 1]` pixel
    /// convention.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= 0.0 && p.x <= self.width - 1.0 && p.y >= 0.0 && p.y <= self.height - 1.0
    }

    /// Clamp a point onto the image.
    pub fn clamp(&self, p: &Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.width - 1.0),
            p.y.clamp(0.0, self.height - 1.0),
        )
    }

    /// The image corners in clockwise order starting at the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width - 1.0, 0.0),
            Point::new(self.width - 1.0, self.height - 1.0),
            Point::new(0.0, self.height - 1.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_point(p: &Point, x: f32, y: f32) -> bool {
        approx_eq(p.x, x) && approx_eq(p.y, y)
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!(approx_eq(distance(&p1, &p2), 5.0));
    }

    #[test]
    fn test_distance_to_segment_perpendicular() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let d = distance_to_segment(&Point::new(5.0, 3.0), &a, &b);
        assert!(approx_eq(d, 3.0));
    }

    #[test]
    fn test_distance_to_segment_clamps_to_endpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        // Projection falls past b, so the distance is to b itself
        let d = distance_to_segment(&Point::new(13.0, 4.0), &a, &b);
        assert!(approx_eq(d, 5.0));
    }

    #[test]
    fn test_distance_to_degenerate_segment_is_zero() {
        let a = Point::new(4.0, 4.0);
        let d = distance_to_segment(&Point::new(10.0, 10.0), &a, &a);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_line_intersection_basic() {
        // y = x and y = -x + 4 cross at (2, 2)
        let p = line_intersection(1.0, 0.0, -1.0, 4.0).unwrap();
        assert!(approx_point(&p, 2.0, 2.0));
    }

    #[test]
    fn test_line_intersection_parallel_is_none() {
        assert!(line_intersection(2.0, 0.0, 2.0, 5.0).is_none());
    }

    #[test]
    fn test_rotate_point_quarter_turn_clockwise() {
        let center = Point::new(0.0, 0.0);
        let p = rotate_point(&Point::new(1.0, 0.0), &center, FRAC_PI_2);
        // Clockwise on screen: a point right of center moves downward (+y)
        assert!(approx_point(&p, 0.0, 1.0));
    }

    #[test]
    fn test_rotate_point_about_offset_center() {
        let center = Point::new(10.0, 10.0);
        let p = rotate_point(&Point::new(12.0, 10.0), &center, PI);
        assert!(approx_point(&p, 8.0, 10.0));
    }

    #[test]
    fn test_wrap_angle() {
        assert!(approx_eq(wrap_angle(TAU + 0.5), 0.5));
        assert!(approx_eq(wrap_angle(-0.5), TAU - 0.5));
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn test_adjacent_rotation_points_axis_aligned() {
        // Moving corner (0, 0) against opposite corner (10, 6) at theta = 0
        let moving = Point::new(0.0, 0.0);
        let opposite = Point::new(10.0, 6.0);
        let (a, b) = adjacent_rotation_points(0.0, &opposite, &moving, 0).unwrap();
        assert!(approx_point(&a, 10.0, 0.0));
        assert!(approx_point(&b, 0.0, 6.0));

        // Odd index swaps which derived corner is which
        let (a, b) = adjacent_rotation_points(0.0, &opposite, &moving, 1).unwrap();
        assert!(approx_point(&a, 0.0, 6.0));
        assert!(approx_point(&b, 10.0, 0.0));
    }

    /// Build the corners of a rectangle rotated clockwise by theta.
    fn rotated_corners(center: Point, w: f32, h: f32, theta: f32) -> [Point; 4] {
        let base = [
            Point::new(center.x - w / 2.0, center.y - h / 2.0),
            Point::new(center.x + w / 2.0, center.y - h / 2.0),
            Point::new(center.x + w / 2.0, center.y + h / 2.0),
            Point::new(center.x - w / 2.0, center.y + h / 2.0),
        ];
        [
            rotate_point(&base[0], &center, theta),
            rotate_point(&base[1], &center, theta),
            rotate_point(&base[2], &center, theta),
            rotate_point(&base[3], &center, theta),
        ]
    }

    #[test]
    fn test_adjacent_rotation_points_general() {
        let theta = 0.5;
        let c = rotated_corners(Point::new(50.0, 50.0), 20.0, 10.0, theta);
        // Reconstructing from the existing diagonal must reproduce the
        // remaining two corners exactly.
        let (a, b) = adjacent_rotation_points(theta, &c[2], &c[0], 0).unwrap();
        assert!(approx_point(&a, c[1].x, c[1].y));
        assert!(approx_point(&b, c[3].x, c[3].y));

        let (a, b) = adjacent_rotation_points(theta, &c[3], &c[1], 1).unwrap();
        assert!(approx_point(&a, c[2].x, c[2].y));
        assert!(approx_point(&b, c[0].x, c[0].y));
    }

    #[test]
    fn test_adjacent_rotation_points_near_vertical() {
        // tan grows without bound near pi/2; the reconstruction must stay
        // numerically sane there.
        let theta = 1.55;
        let c = rotated_corners(Point::new(100.0, 100.0), 40.0, 30.0, theta);
        let (a, b) = adjacent_rotation_points(theta, &c[2], &c[0], 0).unwrap();
        assert!(a.distance_to(&c[1]) < 0.1);
        assert!(b.distance_to(&c[3]) < 0.1);
    }

    #[test]
    fn test_box_edge_intersection_left_edge() {
        let corners = ImageBounds::new(100.0, 100.0).corners();
        // Dragging from inside toward x = -20 must exit through the left edge
        let hit = box_edge_intersection(
            &Point::new(10.0, 50.0),
            &Point::new(-20.0, 50.0),
            &corners,
        )
        .unwrap();
        assert!(approx_point(&hit, 0.0, 50.0));
    }

    #[test]
    fn test_box_edge_intersection_right_edge() {
        let corners = ImageBounds::new(100.0, 100.0).corners();
        let hit = box_edge_intersection(
            &Point::new(90.0, 10.0),
            &Point::new(120.0, 10.0),
            &corners,
        )
        .unwrap();
        assert!(approx_point(&hit, 99.0, 10.0));
    }

    #[test]
    fn test_box_edge_intersection_corner_tie_prefers_scan_order() {
        let corners = ImageBounds::new(100.0, 100.0).corners();
        // Exiting exactly through the bottom-right corner hits the right and
        // bottom edges at the same point with equal midpoint distance; the
        // strict comparison keeps the first edge found.
        let hit = box_edge_intersection(
            &Point::new(50.0, 50.0),
            &Point::new(148.0, 148.0),
            &corners,
        )
        .unwrap();
        assert!(approx_point(&hit, 99.0, 99.0));
    }

    #[test]
    fn test_box_edge_intersection_inside_segment_is_none() {
        let corners = ImageBounds::new(100.0, 100.0).corners();
        let hit = box_edge_intersection(
            &Point::new(10.0, 10.0),
            &Point::new(20.0, 20.0),
            &corners,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_rect_from_points_and_union() {
        let rect = Rect::from_points(&[
            Point::new(5.0, 8.0),
            Point::new(1.0, 2.0),
            Point::new(9.0, 4.0),
        ])
        .unwrap();
        assert_eq!(rect, Rect::new(1.0, 2.0, 8.0, 6.0));

        let other = Rect::new(0.0, 0.0, 2.0, 2.0);
        let union = rect.union(&other);
        assert_eq!(union, Rect::new(0.0, 0.0, 9.0, 8.0));
    }

    #[test]
    fn test_image_bounds_clamp() {
        let bounds = ImageBounds::new(100.0, 50.0);
        assert!(bounds.contains(&Point::new(0.0, 0.0)));
        assert!(!bounds.contains(&Point::new(99.5, 10.0)));
        let clamped = bounds.clamp(&Point::new(150.0, -3.0));
        assert_eq!(clamped, Point::new(99.0, 0.0));
    }
}
