//! Resolved diagram geometry.
//!
//! A [`GeometryResult`] is what the resolvers hand to a renderer: a closed
//! boundary path plus every line, marker, dot and label anchor, all in
//! canvas pixels. It carries no styling beyond two presentation hints.

use serde::Serialize;

use figura_core::{
    geometry::{Point, Segment, Size},
    path::Path,
};

use crate::tank::EdgeId;

/// What a dimension line measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionKind {
    Radius,
    Diameter,
}

/// A straight dimension line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionLine {
    kind: DimensionKind,
    segment: Segment,
}

impl DimensionLine {
    pub fn new(kind: DimensionKind, segment: Segment) -> Self {
        Self { kind, segment }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    /// Two-segment corner at the centre of a quarter or three-quarter circle
    RightAngle,
    /// Closed outline of the water surface in a tank
    WaterSurface,
    /// Tick-line-tick bracket beside the tank's front face
    HeightBracket,
    /// Tick-line-tick bracket beside the tank's back-right edge
    WaterBracket,
}

/// An open or closed auxiliary path drawn over the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    kind: MarkerKind,
    path: Path,
}

impl Marker {
    pub fn new(kind: MarkerKind, path: Path) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotKind {
    Centre,
    Endpoint,
}

/// A filled point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dot {
    kind: DotKind,
    position: Point,
    radius: f32,
}

impl Dot {
    pub fn new(kind: DotKind, position: Point, radius: f32) -> Self {
        Self {
            kind,
            position,
            radius,
        }
    }

    pub fn kind(&self) -> DotKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelKind {
    Centre,
    Radius,
    Diameter,
    Length,
    Width,
    Height,
    WaterHeight,
}

/// A text label centred on an anchor point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    kind: LabelKind,
    text: String,
    anchor: Point,
}

impl Label {
    pub fn new(kind: LabelKind, text: impl Into<String>, anchor: Point) -> Self {
        Self {
            kind,
            text: text.into(),
            anchor,
        }
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

/// Whether a box edge faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeVisibility {
    Visible,
    Hidden,
}

/// One of the twelve projected edges of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    id: EdgeId,
    segment: Segment,
    visibility: EdgeVisibility,
}

impl Edge {
    pub fn new(id: EdgeId, segment: Segment, visibility: EdgeVisibility) -> Self {
        Self {
            id,
            segment,
            visibility,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn visibility(&self) -> EdgeVisibility {
        self.visibility
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == EdgeVisibility::Hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    WaterFront,
    WaterRight,
    WaterTop,
}

/// A filled closed area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    kind: RegionKind,
    path: Path,
}

impl Region {
    pub fn new(kind: RegionKind, path: Path) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Rendering hints that do not change geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Presentation {
    shaded: bool,
    highlight_arc: bool,
}

impl Presentation {
    pub fn new(shaded: bool, highlight_arc: bool) -> Self {
        Self {
            shaded,
            highlight_arc,
        }
    }

    /// Fill the boundary with the light shading color.
    pub fn shaded(&self) -> bool {
        self.shaded
    }

    /// Stroke the boundary with the wider highlight stroke.
    pub fn highlight_arc(&self) -> bool {
        self.highlight_arc
    }
}

/// Complete geometry of one diagram.
///
/// Results are derived deterministically from a request and compare by
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeometryResult {
    canvas: Size,
    boundary: Path,
    edges: Vec<Edge>,
    regions: Vec<Region>,
    dimension_lines: Vec<DimensionLine>,
    markers: Vec<Marker>,
    dots: Vec<Dot>,
    labels: Vec<Label>,
    presentation: Presentation,
    caption: Option<String>,
}

impl GeometryResult {
    /// Creates an empty result for a canvas of the given size.
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub(crate) fn set_boundary(&mut self, boundary: Path) {
        self.boundary = boundary;
    }

    pub(crate) fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub(crate) fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn push_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub(crate) fn push_dimension_line(&mut self, line: DimensionLine) {
        self.dimension_lines.push(line);
    }

    pub(crate) fn push_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub(crate) fn push_dot(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    pub(crate) fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The closed outline of the shape.
    pub fn boundary(&self) -> &Path {
        &self.boundary
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn dimension_lines(&self) -> &[DimensionLine] {
        &self.dimension_lines
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// The first marker of a kind, if any.
    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    /// The first label of a kind, if any.
    pub fn label(&self, kind: LabelKind) -> Option<&Label> {
        self.labels.iter().find(|l| l.kind == kind)
    }

    /// True for the "no shape" result of an invalid parameter combination.
    pub fn is_sentinel(&self) -> bool {
        self.boundary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use figura_core::path::polygon;

    use super::*;

    #[test]
    fn test_new_result_is_sentinel() {
        let result = GeometryResult::new(Size::new(450.0, 400.0));
        assert!(result.is_sentinel());
        assert_eq!(result.canvas(), Size::new(450.0, 400.0));
        assert!(result.labels().is_empty());
    }

    #[test]
    fn test_lookup_by_kind() {
        let mut result = GeometryResult::new(Size::new(10.0, 10.0));
        result.set_boundary(polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]));
        result.push_label(Label::new(LabelKind::Centre, "O", Point::new(1.0, 2.0)));
        result.push_label(Label::new(LabelKind::Radius, "7 cm", Point::new(3.0, 4.0)));

        assert!(!result.is_sentinel());
        assert_eq!(result.label(LabelKind::Radius).unwrap().text(), "7 cm");
        assert!(result.label(LabelKind::Diameter).is_none());
        assert!(result.marker(MarkerKind::RightAngle).is_none());
    }

    #[test]
    fn test_serializes_with_path_data() {
        let mut result = GeometryResult::new(Size::new(10.0, 10.0));
        result.set_boundary(polygon(&[Point::new(0.0, 0.0), Point::new(5.0, 0.0)]));
        result.push_dot(Dot::new(DotKind::Centre, Point::new(2.0, 3.0), 5.0));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["boundary"], "M 0 0 L 5 0 Z");
        assert_eq!(json["dots"][0]["kind"], "centre");
        assert_eq!(json["canvas"]["width"], 10.0);
        assert_eq!(json["caption"], serde_json::Value::Null);
    }
}
