//! Circle-family geometry.
//!
//! Resolves a [`CircleDiagramRequest`] into a boundary path, dimension lines,
//! a right-angle marker and label anchors on a fixed 450 × 400 canvas with the
//! circle centred on it.
//!
//! Orientations are validated against their mode once, by
//! [`CircleShape::resolve`]; everything downstream works on the resolved
//! shape and cannot see an invalid combination. A combination that does not
//! resolve produces sentinel geometry instead of an error.

use log::{debug, trace, warn};

use figura_core::{
    geometry::{Point, Segment, Size},
    path::{Path, PathBuilder, polyline},
};

use crate::{
    request::{CircleDiagramRequest, CircleMode, GivenType, Orientation, dimension_text},
    result::{
        DimensionKind, DimensionLine, Dot, DotKind, GeometryResult, Label, LabelKind, Marker,
        MarkerKind, Presentation,
    },
};

pub const CANVAS_WIDTH: f32 = 450.0;
pub const CANVAS_HEIGHT: f32 = 400.0;

/// Radius of the drawn circle when no configuration overrides it.
pub const DEFAULT_RADIUS: f32 = 120.0;

const RIGHT_ANGLE_SIZE: f32 = 15.0;
const CENTRE_DOT_RADIUS: f32 = 5.0;
const ENDPOINT_DOT_RADIUS: f32 = 4.0;
const CENTRE_LABEL_OFFSET: Point = Point::new(-15.0, -10.0);

/// The side a semicircle's arc faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// A quadrant of the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Unit direction of the quadrant in screen coordinates.
    fn signs(self) -> (f32, f32) {
        match self {
            Self::TopRight => (1.0, -1.0),
            Self::TopLeft => (-1.0, -1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
        }
    }
}

/// A mode paired with an orientation that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleShape {
    Full,
    Semicircle(Side),
    /// Quarter circle occupying a corner
    Quarter(Corner),
    /// Three-quarter circle missing a corner
    ThreeQuarter(Corner),
}

impl CircleShape {
    /// Pairs a mode with an orientation, substituting the mode's default when
    /// the orientation is omitted.
    ///
    /// Returns `None` when the orientation belongs to a different mode.
    /// Full circles accept any orientation and ignore it.
    pub fn resolve(mode: CircleMode, orientation: Option<Orientation>) -> Option<Self> {
        if mode == CircleMode::Full {
            return Some(Self::Full);
        }

        let orientation = orientation.or_else(|| resolve_default_orientation(mode))?;
        let shape = match (mode, orientation) {
            (CircleMode::Semicircle, Orientation::Top) => Self::Semicircle(Side::Top),
            (CircleMode::Semicircle, Orientation::Bottom) => Self::Semicircle(Side::Bottom),
            (CircleMode::Semicircle, Orientation::Left) => Self::Semicircle(Side::Left),
            (CircleMode::Semicircle, Orientation::Right) => Self::Semicircle(Side::Right),
            (CircleMode::Quarter, Orientation::TopRight) => Self::Quarter(Corner::TopRight),
            (CircleMode::Quarter, Orientation::TopLeft) => Self::Quarter(Corner::TopLeft),
            (CircleMode::Quarter, Orientation::BottomRight) => Self::Quarter(Corner::BottomRight),
            (CircleMode::Quarter, Orientation::BottomLeft) => Self::Quarter(Corner::BottomLeft),
            (CircleMode::ThreeQuarter, Orientation::MissingTopRight) => {
                Self::ThreeQuarter(Corner::TopRight)
            }
            (CircleMode::ThreeQuarter, Orientation::MissingTopLeft) => {
                Self::ThreeQuarter(Corner::TopLeft)
            }
            (CircleMode::ThreeQuarter, Orientation::MissingBottomRight) => {
                Self::ThreeQuarter(Corner::BottomRight)
            }
            (CircleMode::ThreeQuarter, Orientation::MissingBottomLeft) => {
                Self::ThreeQuarter(Corner::BottomLeft)
            }
            _ => return None,
        };
        Some(shape)
    }

    pub fn mode(self) -> CircleMode {
        match self {
            Self::Full => CircleMode::Full,
            Self::Semicircle(_) => CircleMode::Semicircle,
            Self::Quarter(_) => CircleMode::Quarter,
            Self::ThreeQuarter(_) => CircleMode::ThreeQuarter,
        }
    }

    /// The corner that carries a right angle at the centre, if the shape has one.
    ///
    /// A three-quarter circle missing a corner shares its right angle with the
    /// quarter circle occupying that corner.
    pub fn right_angle_corner(self) -> Option<Corner> {
        match self {
            Self::Quarter(corner) | Self::ThreeQuarter(corner) => Some(corner),
            Self::Full | Self::Semicircle(_) => None,
        }
    }
}

/// Centre and radius of the drawn circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFrame {
    center: Point,
    radius: f32,
}

impl CircleFrame {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// A circle of the given radius centred on the canvas.
    pub fn centred(radius: f32) -> Self {
        Self::new(Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0), radius)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn top(&self) -> Point {
        self.center.add_point(Point::new(0.0, -self.radius))
    }

    fn bottom(&self) -> Point {
        self.center.add_point(Point::new(0.0, self.radius))
    }

    fn left(&self) -> Point {
        self.center.add_point(Point::new(-self.radius, 0.0))
    }

    fn right(&self) -> Point {
        self.center.add_point(Point::new(self.radius, 0.0))
    }

    fn rim(&self, side: Side) -> Point {
        match side {
            Side::Top => self.top(),
            Side::Bottom => self.bottom(),
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Rim points bounding a quadrant, in clockwise order.
    fn quadrant_ends(&self, corner: Corner) -> (Point, Point) {
        match corner {
            Corner::TopRight => (self.top(), self.right()),
            Corner::TopLeft => (self.left(), self.top()),
            Corner::BottomRight => (self.right(), self.bottom()),
            Corner::BottomLeft => (self.bottom(), self.left()),
        }
    }
}

impl Default for CircleFrame {
    fn default() -> Self {
        Self::centred(DEFAULT_RADIUS)
    }
}

/// Orientation used when a request omits one; full circles have none.
pub fn resolve_default_orientation(mode: CircleMode) -> Option<Orientation> {
    match mode {
        CircleMode::Full => None,
        CircleMode::Semicircle => Some(Orientation::Top),
        CircleMode::Quarter => Some(Orientation::TopRight),
        CircleMode::ThreeQuarter => Some(Orientation::MissingBottomRight),
    }
}

/// Closed outline of a shape, or an empty path for an invalid combination.
pub fn compute_boundary_path(
    frame: CircleFrame,
    mode: CircleMode,
    orientation: Option<Orientation>,
) -> Path {
    CircleShape::resolve(mode, orientation)
        .map(|shape| boundary_path(frame, shape))
        .unwrap_or_default()
}

fn boundary_path(frame: CircleFrame, shape: CircleShape) -> Path {
    let r = frame.radius();
    let center = frame.center();

    match shape {
        CircleShape::Full => PathBuilder::new()
            .move_to(frame.right())
            .arc_to(r, true, true, frame.left())
            .arc_to(r, true, true, frame.right())
            .close()
            .build(),
        CircleShape::Semicircle(side) => {
            let (start, end, sweep) = match side {
                Side::Top => (frame.left(), frame.right(), true),
                Side::Bottom => (frame.left(), frame.right(), false),
                Side::Left => (frame.top(), frame.bottom(), false),
                Side::Right => (frame.top(), frame.bottom(), true),
            };
            PathBuilder::new()
                .move_to(start)
                .arc_to(r, false, sweep, end)
                .line_to(start)
                .close()
                .build()
        }
        CircleShape::Quarter(corner) => {
            let (start, end) = frame.quadrant_ends(corner);
            PathBuilder::new()
                .move_to(center)
                .line_to(start)
                .arc_to(r, false, true, end)
                .line_to(center)
                .close()
                .build()
        }
        CircleShape::ThreeQuarter(missing) => {
            // The long way round from one edge of the missing quadrant to the other
            let (start, end) = frame.quadrant_ends(missing);
            PathBuilder::new()
                .move_to(start)
                .arc_to(r, true, false, end)
                .line_to(center)
                .line_to(start)
                .close()
                .build()
        }
    }
}

/// The radius or diameter line for a shape, or `None` for an invalid combination.
pub fn compute_dimension_line(
    frame: CircleFrame,
    mode: CircleMode,
    orientation: Option<Orientation>,
    given_type: GivenType,
) -> Option<Segment> {
    let shape = CircleShape::resolve(mode, orientation)?;
    Some(match given_type {
        GivenType::Radius => radius_line(frame, shape),
        GivenType::Diameter => diameter_line(frame, shape),
    })
}

fn radius_line(frame: CircleFrame, shape: CircleShape) -> Segment {
    let side = match shape {
        CircleShape::Full | CircleShape::ThreeQuarter(_) => Side::Right,
        CircleShape::Semicircle(side) => side,
        CircleShape::Quarter(Corner::TopRight | Corner::BottomRight) => Side::Right,
        CircleShape::Quarter(Corner::TopLeft | Corner::BottomLeft) => Side::Left,
    };
    Segment::new(frame.center(), frame.rim(side))
}

fn diameter_line(frame: CircleFrame, shape: CircleShape) -> Segment {
    match shape {
        CircleShape::Semicircle(Side::Left | Side::Right) => {
            Segment::new(frame.top(), frame.bottom())
        }
        _ => Segment::new(frame.left(), frame.right()),
    }
}

/// Where the text of a dimension label goes, relative to its line.
///
/// The label sits at the line's midpoint pushed off the line: radius labels
/// above a horizontal line or right of a vertical one, diameter labels below
/// a horizontal line or further right of a vertical one.
pub fn compute_label_anchor(line: Segment, is_radius_label: bool) -> Point {
    let offset = match (is_radius_label, line.is_vertical()) {
        (true, false) => Point::new(0.0, -20.0),
        (true, true) => Point::new(25.0, 0.0),
        (false, false) => Point::new(0.0, 25.0),
        (false, true) => Point::new(30.0, 0.0),
    };
    line.midpoint().add_point(offset)
}

/// The right-angle bracket at the centre of a quarter or three-quarter circle.
///
/// Returns `None` for shapes without a right angle and for invalid combinations.
pub fn compute_right_angle_marker(
    frame: CircleFrame,
    mode: CircleMode,
    orientation: Option<Orientation>,
) -> Option<Path> {
    CircleShape::resolve(mode, orientation)?
        .right_angle_corner()
        .map(|corner| right_angle_marker(frame, corner))
}

fn right_angle_marker(frame: CircleFrame, corner: Corner) -> Path {
    let (sx, sy) = corner.signs();
    let c = frame.center();
    let dx = Point::new(sx * RIGHT_ANGLE_SIZE, 0.0);
    let dy = Point::new(0.0, sy * RIGHT_ANGLE_SIZE);

    polyline(&[c.add_point(dx), c.add_point(dx).add_point(dy), c.add_point(dy)])
}

/// Resolves a circle request into complete diagram geometry.
///
/// `radius` is the drawn radius in pixels.
pub fn resolve(request: &CircleDiagramRequest, radius: f32) -> GeometryResult {
    let frame = CircleFrame::centred(radius);
    let mut result = GeometryResult::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));
    result.set_caption(request.caption().map(str::to_string));

    let Some(shape) = CircleShape::resolve(request.mode(), request.orientation()) else {
        warn!(
            mode:? = request.mode(),
            orientation:? = request.orientation();
            "Orientation does not belong to mode, returning empty geometry"
        );
        return result;
    };
    debug!(shape:?, radius; "Resolved circle shape");

    result.set_boundary(boundary_path(frame, shape));
    result.set_presentation(Presentation::new(
        request.show_shading(),
        request.highlight_arc(),
    ));

    if request.show_centre() {
        let center = frame.center();
        result.push_dot(Dot::new(DotKind::Centre, center, CENTRE_DOT_RADIUS));
        result.push_label(Label::new(
            LabelKind::Centre,
            request.centre_label(),
            center.add_point(CENTRE_LABEL_OFFSET),
        ));
    }

    let dimension_text = request
        .given_value()
        .map(|value| dimension_text(value, request.unit()));

    if request.given_type() == GivenType::Radius && request.show_radius_line() {
        let line = radius_line(frame, shape);
        result.push_dimension_line(DimensionLine::new(DimensionKind::Radius, line));
        result.push_dot(Dot::new(DotKind::Endpoint, line.end(), ENDPOINT_DOT_RADIUS));
        if let Some(text) = &dimension_text {
            result.push_label(Label::new(
                LabelKind::Radius,
                text.as_str(),
                compute_label_anchor(line, true),
            ));
        }
    }

    if request.given_type() == GivenType::Diameter || request.show_diameter_line() {
        let line = diameter_line(frame, shape);
        result.push_dimension_line(DimensionLine::new(DimensionKind::Diameter, line));
        result.push_dot(Dot::new(DotKind::Endpoint, line.start(), ENDPOINT_DOT_RADIUS));
        result.push_dot(Dot::new(DotKind::Endpoint, line.end(), ENDPOINT_DOT_RADIUS));
        if let (GivenType::Diameter, Some(text)) = (request.given_type(), &dimension_text) {
            result.push_label(Label::new(
                LabelKind::Diameter,
                text.as_str(),
                compute_label_anchor(line, false),
            ));
        }
    }

    if let Some(corner) = shape.right_angle_corner() {
        result.push_marker(Marker::new(
            MarkerKind::RightAngle,
            right_angle_marker(frame, corner),
        ));
    }

    trace!(result:?; "Resolved circle geometry");
    result
}
