//! Vector paths in the SVG path mini-language.
//!
//! A [`Path`] is a list of [`PathCommand`]s: moveto, lineto, circular arcto
//! and closepath. Paths are built with [`PathBuilder`], printed as SVG path
//! data through [`Display`](std::fmt::Display), and can be converted into
//! `svg` crate [`Data`] for rendering.
//!
//! Arcs are always circular (`rx == ry`) with no axis rotation; the
//! large-arc and sweep flags keep their SVG meaning. Because the Y axis
//! points down, `sweep = true` draws clockwise on screen.
//!
//! ```
//! # use figura_core::{geometry::Point, path::PathBuilder};
//! let path = PathBuilder::new()
//!     .move_to(Point::new(105.0, 200.0))
//!     .arc_to(120.0, false, true, Point::new(345.0, 200.0))
//!     .line_to(Point::new(105.0, 200.0))
//!     .close()
//!     .build();
//!
//! assert_eq!(path.to_string(), "M 105 200 A 120 120 0 0 1 345 200 L 105 200 Z");
//! ```

use std::{f32::consts::TAU, fmt};

use serde::{Serialize, Serializer};
use svg::node::element::path::Data;

use crate::geometry::{Bounds, Point, Segment};

/// A single command of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a straight line to a point.
    LineTo(Point),
    /// Draw a circular arc to a point.
    ArcTo {
        radius: f32,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    /// Close the current subpath with a line back to its start.
    Close,
}

/// A circular arc in endpoint form, as it appears in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    from: Point,
    to: Point,
    radius: f32,
    large_arc: bool,
    sweep: bool,
}

/// A circular arc in center form.
///
/// Angles are in radians, measured from the +X axis toward +Y (clockwise on
/// screen). `sweep_angle` is positive for clockwise arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcCenter {
    /// Point on the arc at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Point {
        let angle = self.start_angle + self.sweep_angle * t;
        Point::new(
            self.radius.mul_add(angle.cos(), self.center.x()),
            self.radius.mul_add(angle.sin(), self.center.y()),
        )
    }
}

impl CircularArc {
    pub fn new(from: Point, to: Point, radius: f32, large_arc: bool, sweep: bool) -> Self {
        Self {
            from,
            to,
            radius,
            large_arc,
            sweep,
        }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    pub fn sweep(&self) -> bool {
        self.sweep
    }

    /// Converts the endpoint form to center form.
    ///
    /// Follows the SVG implementation notes (F.6.5) specialised to circles
    /// with no rotation. A radius too small to span the endpoints is scaled
    /// up, as SVG renderers do.
    pub fn to_center(&self) -> ArcCenter {
        let half = self.from.sub_point(self.to).scale(0.5);
        let half_chord_sq = half.x() * half.x() + half.y() * half.y();
        let radius = self.radius.abs().max(half_chord_sq.sqrt());

        if half_chord_sq == 0.0 {
            return ArcCenter {
                center: self.from,
                radius,
                start_angle: 0.0,
                sweep_angle: 0.0,
            };
        }

        let sign = if self.large_arc != self.sweep { 1.0 } else { -1.0 };
        let coef = sign * ((radius * radius - half_chord_sq).max(0.0) / half_chord_sq).sqrt();
        let center_offset = Point::new(coef * half.y(), -coef * half.x());
        let center = center_offset.add_point(self.from.midpoint(self.to));

        let u = half.sub_point(center_offset).scale(1.0 / radius);
        let v = half.scale(-1.0).sub_point(center_offset).scale(1.0 / radius);

        let start_angle = u.y().atan2(u.x());
        let mut sweep_angle = (u.x() * v.y() - u.y() * v.x()).atan2(u.x() * v.x() + u.y() * v.y());
        if !self.sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        } else if self.sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        ArcCenter {
            center,
            radius,
            start_angle,
            sweep_angle,
        }
    }
}

/// A path consisting of path commands.
///
/// An empty path is the "no shape" sentinel returned for parameter
/// combinations that describe no geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the path ends with a closepath.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// All arcs of the path in endpoint form.
    pub fn arcs(&self) -> Vec<CircularArc> {
        let mut arcs = Vec::new();
        self.walk(|current, command| {
            if let PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } = *command
            {
                arcs.push(CircularArc::new(current, to, radius, large_arc, sweep));
            }
        });
        arcs
    }

    /// All straight segments of the path, including the closing line.
    ///
    /// Zero-length closing lines are skipped.
    pub fn line_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut start = Point::default();
        self.walk(|current, command| match *command {
            PathCommand::MoveTo(p) => start = p,
            PathCommand::LineTo(p) => segments.push(Segment::new(current, p)),
            PathCommand::Close if current != start => {
                segments.push(Segment::new(current, start));
            }
            _ => {}
        });
        segments
    }

    /// Approximates the path by points, with `arc_steps` points per arc.
    pub fn flatten(&self, arc_steps: usize) -> Vec<Point> {
        let steps = arc_steps.max(1);
        let mut points = Vec::new();
        self.walk(|current, command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let arc = CircularArc::new(current, to, radius, large_arc, sweep).to_center();
                points.extend((1..=steps).map(|i| arc.point_at(i as f32 / steps as f32)));
            }
            PathCommand::Close => {}
        });
        points
    }

    /// Bounds of the flattened path, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.flatten(64))
    }

    /// Converts the path into `svg` crate path data.
    pub fn to_data(&self) -> Data {
        self.commands
            .iter()
            .fold(Data::new(), |data, command| match *command {
                PathCommand::MoveTo(p) => data.move_to((p.x(), p.y())),
                PathCommand::LineTo(p) => data.line_to((p.x(), p.y())),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => data.elliptical_arc_to((
                    radius,
                    radius,
                    0.0,
                    flag_value(large_arc),
                    flag_value(sweep),
                    to.x(),
                    to.y(),
                )),
                PathCommand::Close => data.close(),
            })
    }

    /// Calls `f` with the point the pen is at before each command.
    fn walk(&self, mut f: impl FnMut(Point, &PathCommand)) {
        let mut current = Point::default();
        let mut start = Point::default();
        for command in &self.commands {
            f(current, command);
            match *command {
                PathCommand::MoveTo(p) => {
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => current = p,
                PathCommand::ArcTo { to, .. } => current = to,
                PathCommand::Close => current = start,
            }
        }
    }
}

fn flag_value(flag: bool) -> f32 {
    if flag { 1.0 } else { 0.0 }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x(), p.y())?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x(), p.y())?,
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {radius} {radius} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x(),
                    to.y()
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Builder for constructing paths.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to a point without drawing.
    pub fn move_to(mut self, to: Point) -> Self {
        self.path.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draws a line to a point.
    pub fn line_to(mut self, to: Point) -> Self {
        self.path.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draws a circular arc to a point.
    pub fn arc_to(mut self, radius: f32, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    /// Closes the current subpath.
    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

/// Creates an open polyline through the given points.
pub fn polyline(points: &[Point]) -> Path {
    let Some((first, rest)) = points.split_first() else {
        return Path::new();
    };

    rest.iter()
        .fold(PathBuilder::new().move_to(*first), |builder, p| {
            builder.line_to(*p)
        })
        .build()
}

/// Creates a closed polygon through the given points.
pub fn polygon(points: &[Point]) -> Path {
    if points.is_empty() {
        return Path::new();
    }

    let mut path = polyline(points);
    path.commands.push(PathCommand::Close);
    path
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    fn half_circle(sweep: bool) -> CircularArc {
        CircularArc::new(
            Point::new(-10.0, 0.0),
            Point::new(10.0, 0.0),
            10.0,
            false,
            sweep,
        )
    }

    #[test]
    fn test_display_path_data() {
        let path = PathBuilder::new()
            .move_to(Point::new(345.0, 200.0))
            .arc_to(120.0, true, true, Point::new(105.0, 200.0))
            .arc_to(120.0, true, true, Point::new(345.0, 200.0))
            .close()
            .build();

        assert_eq!(
            path.to_string(),
            "M 345 200 A 120 120 0 1 1 105 200 A 120 120 0 1 1 345 200 Z"
        );
        assert!(path.is_closed());
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_display_fractional_coordinates() {
        let path = polyline(&[Point::new(0.5, 1.25), Point::new(37.5, 0.0)]);
        assert_eq!(path.to_string(), "M 0.5 1.25 L 37.5 0");
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.to_string(), "");
        assert!(path.bounds().is_none());
        assert!(polyline(&[]).is_empty());
        assert!(polygon(&[]).is_empty());
    }

    #[test]
    fn test_clockwise_half_circle_goes_over_the_top() {
        let arc = half_circle(true).to_center();

        assert_approx_eq!(f32, arc.center.x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.center.y(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.sweep_angle, PI, epsilon = 1e-4);
        // Halfway along, the arc is at the top of the screen (negative y)
        assert!(arc.point_at(0.5).y() < -9.9);
    }

    #[test]
    fn test_counter_clockwise_half_circle_goes_under() {
        let arc = half_circle(false).to_center();

        assert_approx_eq!(f32, arc.sweep_angle, -PI, epsilon = 1e-4);
        assert!(arc.point_at(0.5).y() > 9.9);
    }

    #[test]
    fn test_quarter_arc_center_form() {
        // From the top of the circle clockwise to its right side
        let arc = CircularArc::new(
            Point::new(0.0, -10.0),
            Point::new(10.0, 0.0),
            10.0,
            false,
            true,
        )
        .to_center();

        assert_approx_eq!(f32, arc.center.x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.center.y(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.start_angle, -FRAC_PI_2, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.sweep_angle, FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn test_large_arc_center_form() {
        let arc = CircularArc::new(
            Point::new(0.0, -10.0),
            Point::new(10.0, 0.0),
            10.0,
            true,
            false,
        )
        .to_center();

        assert_approx_eq!(f32, arc.center.x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.center.y(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.sweep_angle, -1.5 * PI, epsilon = 1e-4);
    }

    #[test]
    fn test_short_radius_is_scaled_up() {
        let arc = CircularArc::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0), 1.0, false, true)
            .to_center();
        assert_approx_eq!(f32, arc.radius, 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, arc.center.x(), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_line_segments_include_closing_line() {
        let path = polygon(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);

        let segments = path.line_segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].start(), Point::new(10.0, 10.0));
        assert_eq!(segments[2].end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_line_segments_skip_zero_length_close() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(5.0, 0.0))
            .line_to(Point::new(0.0, 0.0))
            .close()
            .build();

        assert_eq!(path.line_segments().len(), 2);
    }

    #[test]
    fn test_arcs_know_their_start_point() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(0.0, -10.0))
            .arc_to(10.0, false, true, Point::new(10.0, 0.0))
            .close()
            .build();

        let arcs = path.arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].from(), Point::new(0.0, -10.0));
        assert_eq!(arcs[0].to(), Point::new(10.0, 0.0));
        assert!(!arcs[0].large_arc());
        assert!(arcs[0].sweep());
    }

    #[test]
    fn test_bounds_of_full_circle() {
        let path = PathBuilder::new()
            .move_to(Point::new(10.0, 0.0))
            .arc_to(10.0, true, true, Point::new(-10.0, 0.0))
            .arc_to(10.0, true, true, Point::new(10.0, 0.0))
            .close()
            .build();

        let bounds = path.bounds().unwrap();
        assert_approx_eq!(f32, bounds.min_x(), -10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.max_x(), 10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.min_y(), -10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.max_y(), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_to_data_renders_commands() {
        let path = polygon(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let element = svg::node::element::Path::new().set("d", path.to_data());
        let rendered = element.to_string();
        assert!(rendered.contains("M1,2"));
        assert!(rendered.contains("L3,4"));
        assert!(rendered.contains('z'));
    }
}
