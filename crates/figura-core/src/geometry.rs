//! Geometric primitives for diagram coordinates.
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box
//! - [`Segment`] - A straight line between two points
//!
//! # Coordinate System
//!
//! Figura uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! "Up" on a diagram is therefore negative Y, and a positive angle turns
//! clockwise on screen.

use serde::Serialize;

/// A 2D point in canvas space.
///
/// # Examples
///
/// ```
/// # use figura_core::geometry::Point;
/// let centre = Point::new(225.0, 200.0);
/// let rim = centre.add_point(Point::new(120.0, 0.0));
///
/// let mid = centre.midpoint(rim);
/// assert_eq!(mid.x(), 285.0);
/// assert_eq!(mid.y(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }
}

/// Width and height of a canvas or element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Smallest bounds containing every point, or `None` for no points.
    ///
    /// ```
    /// # use figura_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([Point::new(4.0, 1.0), Point::new(-2.0, 3.0)]).unwrap();
    /// assert_eq!(bounds.min_x(), -2.0);
    /// assert_eq!(bounds.max_y(), 3.0);
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, p| {
            let single = Self {
                min_x: p.x,
                min_y: p.y,
                max_x: p.x,
                max_y: p.y,
            };
            Some(acc.map_or(single, |b| b.merge(&single)))
        })
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Merges two bounds into the smallest bounds containing both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the point lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// A straight line segment, used for dimension lines and box edges.
///
/// ```
/// # use figura_core::geometry::{Point, Segment};
/// let radius = Segment::new(Point::new(225.0, 200.0), Point::new(345.0, 200.0));
/// assert!(radius.is_horizontal());
/// assert_eq!(radius.length(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> Point {
        self.start
    }

    pub fn end(self) -> Point {
        self.end
    }

    pub fn midpoint(self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn length(self) -> f32 {
        self.start.distance(self.end)
    }

    /// True when both endpoints share an x-coordinate.
    pub fn is_vertical(self) -> bool {
        self.start.x == self.end.x
    }

    /// True when both endpoints share a y-coordinate.
    pub fn is_horizontal(self) -> bool {
        self.start.y == self.end.y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(5.0, -5.0);

        assert_eq!(p1.add_point(p2), Point::new(15.0, 15.0));
        assert_eq!(p1.sub_point(p2), Point::new(5.0, 25.0));
        assert_eq!(p1.midpoint(p2), Point::new(7.5, 7.5));
        assert_eq!(p1.scale(0.5), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, p1.distance(p2), 5.0);
        assert_approx_eq!(f32, p2.hypot(), 5.0);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points([
            Point::new(10.0, 40.0),
            Point::new(30.0, 5.0),
            Point::new(-5.0, 20.0),
        ])
        .unwrap();

        assert_eq!(bounds.min_x(), -5.0);
        assert_eq!(bounds.min_y(), 5.0);
        assert_eq!(bounds.max_x(), 30.0);
        assert_eq!(bounds.max_y(), 40.0);
        assert_eq!(bounds.width(), 35.0);
        assert_eq!(bounds.height(), 35.0);
    }

    #[test]
    fn test_bounds_from_no_points() {
        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::from_points([Point::new(0.0, 0.0), Point::new(10.0, 10.0)]).unwrap();
        assert!(bounds.contains(Point::new(5.0, 5.0)));
        assert!(bounds.contains(Point::new(10.0, 0.0)));
        assert!(!bounds.contains(Point::new(10.5, 5.0)));
        assert_eq!(bounds.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_segment_orientation() {
        let vertical = Segment::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        assert!(vertical.is_vertical());
        assert!(!vertical.is_horizontal());
        assert_eq!(vertical.midpoint(), Point::new(5.0, 5.0));

        let diagonal = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!(!diagonal.is_vertical());
        assert!(!diagonal.is_horizontal());
        assert_approx_eq!(f32, diagonal.length(), 5.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Midpoint should always be between (or equal to) both points.
    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    /// Adding then subtracting a point should return the original.
    fn check_add_sub_inverse(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result = p1.add_point(p2).sub_point(p2);

        prop_assert!(approx_eq!(f32, result.x(), p1.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, result.y(), p1.y(), epsilon = 0.001));
        Ok(())
    }

    /// Bounds built from points contain every one of them.
    fn check_bounds_contain_their_points(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points.iter().copied());

        prop_assert_eq!(bounds.is_some(), !points.is_empty());
        if let Some(bounds) = bounds {
            for p in points {
                prop_assert!(bounds.contains(p));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn add_sub_inverse(p1 in point_strategy(), p2 in point_strategy()) {
            check_add_sub_inverse(p1, p2)?;
        }

        #[test]
        fn bounds_contain_their_points(points in prop::collection::vec(point_strategy(), 0..16)) {
            check_bounds_contain_their_points(points)?;
        }
    }
}
