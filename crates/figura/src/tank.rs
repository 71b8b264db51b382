//! Rectangular tank geometry.
//!
//! A tank is drawn as an oblique box: the front face is a true rectangle and
//! the back face is the same rectangle shifted up and to the right by half
//! and a quarter of the scaled depth. Water fills the box from the bottom and
//! shows on the front face, the right face and as a surface quad.
//!
//! Vertex naming used throughout:
//!
//! ```text
//!          BTL ─────────── BTR
//!         ╱ ┆             ╱ │
//!      FTL ─────────── FTR  │
//!       │   ┆           │   │
//!       │  BBL ┄┄┄┄┄┄┄┄ │ ─ BBR
//!       │ ╱             │ ╱
//!      FBL ─────────── FBR
//! ```

use log::{debug, trace};

use figura_core::{
    geometry::{Point, Segment, Size},
    path::{Path, PathBuilder, polygon},
};
use serde::Serialize;

use crate::{
    error::FiguraError,
    request::{TankDiagramRequest, dimension_text},
    result::{
        Edge, EdgeVisibility, GeometryResult, Label, LabelKind, Marker, MarkerKind, Region,
        RegionKind,
    },
    scale::{ScaledDimensions, scale_dimensions},
};

pub const CANVAS_WIDTH: f32 = 450.0;
pub const CANVAS_HEIGHT: f32 = 360.0;

/// Screen position of the front-bottom-left vertex.
pub const ORIGIN: Point = Point::new(80.0, 300.0);

const LENGTH_LABEL_GAP: f32 = 25.0;
const WIDTH_LABEL_GAP: f32 = 20.0;
const BRACKET_GAP: f32 = 20.0;
const BRACKET_TICK: f32 = 5.0;
const BRACKET_LABEL_GAP: f32 = 30.0;

/// Screen shift from a front vertex to its back counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthOffset {
    horizontal: f32,
    vertical: f32,
}

impl DepthOffset {
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Upward shift; positive values move the back face up the screen.
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// The shift as a screen-space vector.
    pub fn vector(&self) -> Point {
        Point::new(self.horizontal, -self.vertical)
    }
}

pub fn compute_depth_offset(scaled_width: f32) -> DepthOffset {
    DepthOffset {
        horizontal: 0.5 * scaled_width,
        vertical: 0.25 * scaled_width,
    }
}

/// Validates a requested water height and clamps it into `[0, height]`.
///
/// # Errors
///
/// Returns [`FiguraError::InvalidDimension`] for a NaN or infinite water height.
pub fn effective_water_height(request: &TankDiagramRequest) -> Result<f32, FiguraError> {
    let water_height = request.water_height();
    if !water_height.is_finite() {
        return Err(FiguraError::InvalidDimension {
            name: "water_height",
            value: water_height,
        });
    }
    Ok(request.effective_water_height())
}

/// Corners of the water surface, at the water line on the four vertical edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterSurface {
    pub front_left: Point,
    pub front_right: Point,
    pub back_right: Point,
    pub back_left: Point,
}

/// The eight projected corners of a tank, plus its water surface if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankVertices {
    pub front_bottom_left: Point,
    pub front_bottom_right: Point,
    pub front_top_right: Point,
    pub front_top_left: Point,
    pub back_bottom_left: Point,
    pub back_bottom_right: Point,
    pub back_top_right: Point,
    pub back_top_left: Point,
    pub water: Option<WaterSurface>,
    /// Water height in pixels; zero for an empty tank.
    pub scaled_water_height: f32,
}

/// Projects the tank and its water surface.
///
/// `water_height` must already be clamped into `[0, tank_height]`; the
/// surface sits at the same fraction of the scaled height.
pub fn compute_vertices(
    scaled: &ScaledDimensions,
    water_height: f32,
    tank_height: f32,
) -> TankVertices {
    let depth = compute_depth_offset(scaled.width()).vector();
    let up = |p: Point, by: f32| p.add_point(Point::new(0.0, -by));

    let front_bottom_left = ORIGIN;
    let front_bottom_right = ORIGIN.add_point(Point::new(scaled.length(), 0.0));
    let front_top_right = up(front_bottom_right, scaled.height());
    let front_top_left = up(front_bottom_left, scaled.height());

    let scaled_water_height = if water_height > 0.0 {
        water_height / tank_height * scaled.height()
    } else {
        0.0
    };
    let water = (scaled_water_height > 0.0).then(|| {
        let front_left = up(front_bottom_left, scaled_water_height);
        let front_right = up(front_bottom_right, scaled_water_height);
        WaterSurface {
            front_left,
            front_right,
            back_right: front_right.add_point(depth),
            back_left: front_left.add_point(depth),
        }
    });

    TankVertices {
        front_bottom_left,
        front_bottom_right,
        front_top_right,
        front_top_left,
        back_bottom_left: front_bottom_left.add_point(depth),
        back_bottom_right: front_bottom_right.add_point(depth),
        back_top_right: front_top_right.add_point(depth),
        back_top_left: front_top_left.add_point(depth),
        water,
        scaled_water_height,
    }
}

/// The twelve edges of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeId {
    FrontBottom,
    FrontRight,
    FrontTop,
    FrontLeft,
    BackBottom,
    BackRight,
    BackTop,
    BackLeft,
    BottomLeftDepth,
    BottomRightDepth,
    TopRightDepth,
    TopLeftDepth,
}

/// Visibility of every edge for the fixed up-and-right viewing angle.
pub static EDGE_VISIBILITY: [(EdgeId, EdgeVisibility); 12] = [
    (EdgeId::FrontBottom, EdgeVisibility::Visible),
    (EdgeId::FrontRight, EdgeVisibility::Visible),
    (EdgeId::FrontTop, EdgeVisibility::Visible),
    (EdgeId::FrontLeft, EdgeVisibility::Visible),
    (EdgeId::BackBottom, EdgeVisibility::Hidden),
    (EdgeId::BackRight, EdgeVisibility::Visible),
    (EdgeId::BackTop, EdgeVisibility::Visible),
    (EdgeId::BackLeft, EdgeVisibility::Hidden),
    (EdgeId::BottomLeftDepth, EdgeVisibility::Hidden),
    (EdgeId::BottomRightDepth, EdgeVisibility::Visible),
    (EdgeId::TopRightDepth, EdgeVisibility::Visible),
    (EdgeId::TopLeftDepth, EdgeVisibility::Visible),
];

impl EdgeId {
    pub fn segment(self, v: &TankVertices) -> Segment {
        let (start, end) = match self {
            Self::FrontBottom => (v.front_bottom_left, v.front_bottom_right),
            Self::FrontRight => (v.front_bottom_right, v.front_top_right),
            Self::FrontTop => (v.front_top_left, v.front_top_right),
            Self::FrontLeft => (v.front_bottom_left, v.front_top_left),
            Self::BackBottom => (v.back_bottom_left, v.back_bottom_right),
            Self::BackRight => (v.back_bottom_right, v.back_top_right),
            Self::BackTop => (v.back_top_left, v.back_top_right),
            Self::BackLeft => (v.back_bottom_left, v.back_top_left),
            Self::BottomLeftDepth => (v.front_bottom_left, v.back_bottom_left),
            Self::BottomRightDepth => (v.front_bottom_right, v.back_bottom_right),
            Self::TopRightDepth => (v.front_top_right, v.back_top_right),
            Self::TopLeftDepth => (v.front_top_left, v.back_top_left),
        };
        Segment::new(start, end)
    }
}

/// All twelve edges with their visibility.
pub fn classify_edges(vertices: &TankVertices) -> Vec<Edge> {
    EDGE_VISIBILITY
        .iter()
        .map(|&(id, visibility)| Edge::new(id, id.segment(vertices), visibility))
        .collect()
}

/// Front, right and top water faces; empty when the tank holds no water.
pub fn compute_water_polygons(vertices: &TankVertices) -> Vec<Region> {
    let Some(water) = vertices.water else {
        return Vec::new();
    };

    vec![
        Region::new(
            RegionKind::WaterFront,
            polygon(&[
                vertices.front_bottom_left,
                vertices.front_bottom_right,
                water.front_right,
                water.front_left,
            ]),
        ),
        Region::new(
            RegionKind::WaterRight,
            polygon(&[
                vertices.front_bottom_right,
                vertices.back_bottom_right,
                water.back_right,
                water.front_right,
            ]),
        ),
        Region::new(RegionKind::WaterTop, water_surface_outline(&water)),
    ]
}

fn water_surface_outline(water: &WaterSurface) -> Path {
    polygon(&[
        water.front_left,
        water.front_right,
        water.back_right,
        water.back_left,
    ])
}

/// The projected outline of the whole box.
pub fn compute_silhouette(vertices: &TankVertices) -> Path {
    polygon(&[
        vertices.front_bottom_left,
        vertices.front_bottom_right,
        vertices.back_bottom_right,
        vertices.back_top_right,
        vertices.back_top_left,
        vertices.front_top_left,
    ])
}

/// A vertical tick-line-tick bracket between two heights at `x`.
fn vertical_bracket(x: f32, top: f32, bottom: f32) -> Path {
    let tick = |y: f32| (Point::new(x - BRACKET_TICK, y), Point::new(x + BRACKET_TICK, y));
    let (top_start, top_end) = tick(top);
    let (bottom_start, bottom_end) = tick(bottom);

    PathBuilder::new()
        .move_to(top_start)
        .line_to(top_end)
        .move_to(Point::new(x, top))
        .line_to(Point::new(x, bottom))
        .move_to(bottom_start)
        .line_to(bottom_end)
        .build()
}

/// The height bracket left of the front face.
pub fn compute_height_bracket(vertices: &TankVertices) -> Path {
    vertical_bracket(
        vertices.front_bottom_left.x() - BRACKET_GAP,
        vertices.front_top_left.y(),
        vertices.front_bottom_left.y(),
    )
}

/// The water-height bracket right of the back-bottom-right vertex.
pub fn compute_water_bracket(vertices: &TankVertices) -> Path {
    let base = vertices.back_bottom_right;
    vertical_bracket(
        base.x() + BRACKET_GAP,
        base.y() - vertices.scaled_water_height,
        base.y(),
    )
}

/// Anchor points of the tank's dimension labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankLabelAnchors {
    pub length: Point,
    pub width: Point,
    pub height: Point,
    /// Present only for a partly filled tank.
    pub water_height: Option<Point>,
}

/// Places the dimension labels around the projected box.
///
/// The length label sits below the middle of the front-bottom edge. The width
/// label sits right of the middle of the bottom-right depth edge, which runs
/// from the front-bottom-right vertex along the depth offset. The height and
/// water-height labels sit beside their brackets.
///
/// `partly_filled` is true when the water level lies strictly between the
/// bottom and the top of the tank.
pub fn compute_label_anchors(vertices: &TankVertices, partly_filled: bool) -> TankLabelAnchors {
    let length = EdgeId::FrontBottom
        .segment(vertices)
        .midpoint()
        .add_point(Point::new(0.0, LENGTH_LABEL_GAP));
    let width = EdgeId::BottomRightDepth
        .segment(vertices)
        .midpoint()
        .add_point(Point::new(WIDTH_LABEL_GAP, 0.0));
    let height = EdgeId::FrontLeft
        .segment(vertices)
        .midpoint()
        .add_point(Point::new(-BRACKET_GAP - BRACKET_LABEL_GAP, 0.0));

    let water_height = partly_filled.then(|| {
        let base = vertices.back_bottom_right;
        Point::new(
            base.x() + BRACKET_GAP + BRACKET_LABEL_GAP,
            base.y() - vertices.scaled_water_height / 2.0,
        )
    });

    TankLabelAnchors {
        length,
        width,
        height,
        water_height,
    }
}

/// Resolves a tank request into complete diagram geometry.
///
/// # Errors
///
/// Returns [`FiguraError::InvalidDimension`] if a tank extent is not a finite
/// positive number or the water height is not finite.
pub fn resolve(request: &TankDiagramRequest) -> Result<GeometryResult, FiguraError> {
    let scaled = scale_dimensions(request.length(), request.width(), request.height())?;
    let water_height = effective_water_height(request)?;
    debug!(
        requested = request.water_height(),
        effective = water_height;
        "Clamped water height"
    );

    let vertices = compute_vertices(&scaled, water_height, request.height());
    let mut result = GeometryResult::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));
    result.set_caption(request.caption().map(str::to_string));
    result.set_boundary(compute_silhouette(&vertices));

    for edge in classify_edges(&vertices) {
        result.push_edge(edge);
    }
    for region in compute_water_polygons(&vertices) {
        result.push_region(region);
    }
    if let Some(water) = &vertices.water {
        result.push_marker(Marker::new(
            MarkerKind::WaterSurface,
            water_surface_outline(water),
        ));
    }

    let partly_filled = water_height > 0.0 && water_height < request.height();
    let anchors = compute_label_anchors(&vertices, partly_filled);
    let unit = request.unit();

    if request.show_dimensions() {
        result.push_marker(Marker::new(
            MarkerKind::HeightBracket,
            compute_height_bracket(&vertices),
        ));
        result.push_label(Label::new(
            LabelKind::Length,
            dimension_text(request.length(), unit),
            anchors.length,
        ));
        result.push_label(Label::new(
            LabelKind::Width,
            dimension_text(request.width(), unit),
            anchors.width,
        ));
        result.push_label(Label::new(
            LabelKind::Height,
            dimension_text(request.height(), unit),
            anchors.height,
        ));
    }

    if let (true, Some(anchor)) = (request.show_water_height(), anchors.water_height) {
        result.push_marker(Marker::new(
            MarkerKind::WaterBracket,
            compute_water_bracket(&vertices),
        ));
        result.push_label(Label::new(
            LabelKind::WaterHeight,
            dimension_text(water_height, unit),
            anchor,
        ));
    }

    trace!(result:?; "Resolved tank geometry");
    Ok(result)
}
