//! SVG export of resolved geometry.
//!
//! Renders a [`GeometryResult`] with a fixed palette into a standalone SVG
//! document. Every element is placed on a [`RenderLayer`] so fills sit under
//! outlines and text always comes last.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use figura_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Size,
    path::Path,
};

use crate::{
    config::StyleConfig,
    export,
    result::{GeometryResult, LabelKind, MarkerKind, RegionKind},
};

const OUTLINE_WIDTH: f32 = 2.0;
const HIGHLIGHT_WIDTH: f32 = 3.0;
const DIMENSION_WIDTH: f32 = 2.0;
const MARKER_WIDTH: f32 = 1.5;
const EDGE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 16.0;
const CAPTION_FONT_SIZE: f32 = 14.0;
const CAPTION_HEIGHT: f32 = 32.0;

/// The fixed colors of the reference renderer.
#[derive(Debug, Clone)]
struct Palette {
    outline: Color,
    highlight: Color,
    shading: Color,
    dimension: Color,
    marker: Color,
    point: Color,
    text: Color,
    water_front: Color,
    water_right: Color,
    water_top: Color,
    water_outline: Color,
}

impl Palette {
    fn new() -> Result<Self, String> {
        let water = Color::new("#3498db")?;
        Ok(Self {
            outline: Color::new("#2c3e50")?,
            highlight: Color::new("#3498db")?,
            shading: Color::new("rgba(52, 152, 219, 0.15)")?,
            dimension: Color::new("#e74c3c")?,
            marker: Color::new("#7f8c8d")?,
            point: Color::new("#3498db")?,
            text: Color::new("#2c3e50")?,
            water_front: water.with_alpha(0.35),
            water_right: water.with_alpha(0.25),
            water_top: water.with_alpha(0.45),
            water_outline: Color::new("#2980b9")?,
        })
    }

    fn region_fill(&self, kind: RegionKind) -> Color {
        match kind {
            RegionKind::WaterFront => self.water_front,
            RegionKind::WaterRight => self.water_right,
            RegionKind::WaterTop => self.water_top,
        }
    }
}

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies style settings such as the background color.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves colors and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let background = match self.style {
            Some(style) => style.background_color().map_err(export::Error::Render)?,
            None => None,
        };
        let palette = Palette::new().map_err(export::Error::Render)?;

        Ok(Svg {
            palette,
            background,
        })
    }
}

/// SVG exporter for diagram geometry.
#[derive(Debug, Clone)]
pub struct Svg {
    palette: Palette,
    background: Option<Color>,
}

impl Svg {
    /// Renders the geometry into an SVG document.
    pub fn render_document(&self, result: &GeometryResult) -> Document {
        let canvas = result.canvas();
        let height = if result.caption().is_some() {
            canvas.height() + CAPTION_HEIGHT
        } else {
            canvas.height()
        };
        let size = Size::new(canvas.width(), height);

        let mut output = LayeredOutput::new();
        self.add_background(&mut output, size);
        self.add_regions(&mut output, result);
        self.add_shape(&mut output, result);
        self.add_dimension_lines(&mut output, result);
        self.add_markers(&mut output, result);
        self.add_dots(&mut output, result);
        self.add_labels(&mut output, result);
        self.add_caption(&mut output, result);

        output.render().into_iter().fold(
            Document::new()
                .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
                .set("width", size.width())
                .set("height", size.height()),
            |doc, node| doc.add(node),
        )
    }

    fn add_background(&self, output: &mut LayeredOutput, size: Size) {
        let Some(color) = &self.background else {
            return;
        };
        let rect = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &color.opaque())
            .set("fill-opacity", color.alpha());
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
    }

    fn add_regions(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        if result.presentation().shaded() {
            let fill = self.palette.shading;
            output.add_to_layer(
                RenderLayer::Fill,
                Box::new(filled_path(result.boundary(), fill)),
            );
        }

        for region in result.regions() {
            let fill = self.palette.region_fill(region.kind());
            output.add_to_layer(RenderLayer::Fill, Box::new(filled_path(region.path(), fill)));
        }
    }

    /// Tanks draw their classified edges; other shapes draw their boundary.
    fn add_shape(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        if result.edges().is_empty() {
            let stroke = if result.presentation().highlight_arc() {
                StrokeDefinition::solid(self.palette.highlight, HIGHLIGHT_WIDTH)
            } else {
                StrokeDefinition::solid(self.palette.outline, OUTLINE_WIDTH)
            };
            output.add_to_layer(
                RenderLayer::Outline,
                Box::new(stroked_path(result.boundary(), &stroke)),
            );
            return;
        }

        let visible = StrokeDefinition::solid(self.palette.outline, EDGE_WIDTH);
        let hidden = StrokeDefinition::dashed(self.palette.outline, MARKER_WIDTH);
        for edge in result.edges() {
            let (layer, stroke) = if edge.is_hidden() {
                (RenderLayer::HiddenEdge, &hidden)
            } else {
                (RenderLayer::Outline, &visible)
            };
            let segment = edge.segment();
            let line = svg_element::Line::new()
                .set("x1", segment.start().x())
                .set("y1", segment.start().y())
                .set("x2", segment.end().x())
                .set("y2", segment.end().y());
            output.add_to_layer(layer, Box::new(apply_stroke!(line, stroke)));
        }
    }

    fn add_dimension_lines(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        let stroke = StrokeDefinition::solid(self.palette.dimension, DIMENSION_WIDTH);
        for line in result.dimension_lines() {
            let segment = line.segment();
            let element = svg_element::Line::new()
                .set("x1", segment.start().x())
                .set("y1", segment.start().y())
                .set("x2", segment.end().x())
                .set("y2", segment.end().y());
            output.add_to_layer(RenderLayer::Dimension, Box::new(apply_stroke!(element, &stroke)));
        }
    }

    fn add_markers(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        for marker in result.markers() {
            let (layer, stroke) = match marker.kind() {
                MarkerKind::RightAngle => (
                    RenderLayer::Marker,
                    StrokeDefinition::solid(self.palette.marker, MARKER_WIDTH),
                ),
                MarkerKind::WaterSurface => (
                    RenderLayer::Marker,
                    StrokeDefinition::solid(self.palette.water_outline, MARKER_WIDTH),
                ),
                MarkerKind::HeightBracket | MarkerKind::WaterBracket => (
                    RenderLayer::Dimension,
                    StrokeDefinition::solid(self.palette.outline, MARKER_WIDTH),
                ),
            };
            output.add_to_layer(layer, Box::new(stroked_path(marker.path(), &stroke)));
        }
    }

    fn add_dots(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        for dot in result.dots() {
            let circle = svg_element::Circle::new()
                .set("cx", dot.position().x())
                .set("cy", dot.position().y())
                .set("r", dot.radius())
                .set("fill", &self.palette.point);
            output.add_to_layer(RenderLayer::Point, Box::new(circle));
        }
    }

    fn add_labels(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        for label in result.labels() {
            let color = match label.kind() {
                LabelKind::Centre => &self.palette.text,
                _ => &self.palette.dimension,
            };
            let text = svg_element::Text::new(label.text())
                .set("x", label.anchor().x())
                .set("y", label.anchor().y())
                .set("fill", color)
                .set("font-size", LABEL_FONT_SIZE)
                .set("font-weight", "bold")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle");
            output.add_to_layer(RenderLayer::Text, Box::new(text));
        }
    }

    fn add_caption(&self, output: &mut LayeredOutput, result: &GeometryResult) {
        let Some(caption) = result.caption() else {
            return;
        };
        let canvas = result.canvas();
        let text = svg_element::Text::new(caption)
            .set("x", canvas.width() / 2.0)
            .set("y", canvas.height() + CAPTION_HEIGHT / 2.0)
            .set("fill", &self.palette.marker)
            .set("font-size", CAPTION_FONT_SIZE)
            .set("font-style", "italic")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");
        output.add_to_layer(RenderLayer::Text, Box::new(text));
    }
}

fn filled_path(path: &Path, fill: Color) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", path.to_data())
        .set("fill", &fill.opaque())
        .set("fill-opacity", fill.alpha())
        .set("stroke", "none")
}

fn stroked_path(path: &Path, stroke: &StrokeDefinition) -> svg_element::Path {
    let element = svg_element::Path::new()
        .set("d", path.to_data())
        .set("fill", "none");
    apply_stroke!(element, stroke)
}

impl export::Exporter for Svg {
    fn export(&self, result: &GeometryResult) -> Result<String, export::Error> {
        if result.is_sentinel() {
            info!("Rendering empty geometry");
        }
        let doc = self.render_document(result);
        debug!("SVG document rendered");

        Ok(doc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        circle,
        export::Exporter,
        request::{CircleDiagramRequest, CircleMode, GivenType, Orientation, TankDiagramRequest},
        tank,
    };

    fn exporter() -> Svg {
        SvgBuilder::new().build().unwrap()
    }

    #[test]
    fn test_circle_document() {
        let request = CircleDiagramRequest::new(CircleMode::Quarter)
            .with_orientation(Orientation::BottomLeft)
            .with_given("7", GivenType::Radius)
            .with_caption("A quarter circle");
        let result = circle::resolve(&request, circle::DEFAULT_RADIUS);
        let svg = exporter().export(&result).unwrap();

        assert!(svg.contains("viewBox=\"0 0 450 432\""));
        assert!(svg.contains("data-layer=\"outline\""));
        assert!(svg.contains("data-layer=\"marker\""));
        assert!(svg.contains("7 cm"));
        assert!(svg.contains("A quarter circle"));
        assert!(!svg.contains("data-layer=\"background\""));
        assert!(!svg.contains("data-layer=\"fill\""));
    }

    #[test]
    fn test_highlight_and_shading() {
        let request = CircleDiagramRequest::new(CircleMode::Full)
            .with_shading(true)
            .with_highlight_arc(true);
        let result = circle::resolve(&request, circle::DEFAULT_RADIUS);
        let svg = exporter().export(&result).unwrap();

        assert!(svg.contains("data-layer=\"fill\""));
        assert!(svg.contains("stroke-width=\"3\""));
    }

    #[test]
    fn test_tank_document_dashes_hidden_edges() {
        let request = TankDiagramRequest::new(40.0, 25.0, 60.0).with_water_height(30.0);
        let result = tank::resolve(&request).unwrap();
        let svg = exporter().export(&result).unwrap();

        assert!(svg.contains("viewBox=\"0 0 450 360\""));
        assert!(svg.contains("data-layer=\"hidden-edge\""));
        assert_eq!(svg.matches("stroke-dasharray=\"5,5\"").count(), 3);
        assert!(svg.contains("30 cm"));
    }

    #[test]
    fn test_background_from_style() {
        let style = StyleConfig::new(Some("white".to_string()));
        let svg = SvgBuilder::new()
            .with_style(&style)
            .build()
            .unwrap()
            .export(&GeometryResult::new(Size::new(10.0, 10.0)))
            .unwrap();

        assert!(svg.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_invalid_background_fails_build() {
        let style = StyleConfig::new(Some("nope".to_string()));
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, export::Error::Render(_)));
    }
}
