//! Layer-based rendering for SVG output.
//!
//! Drawables say which z-order layer each SVG element belongs to; the
//! [`LayeredOutput`] then emits one `<g data-layer="...">` group per layer,
//! bottom to top.
//!
//! ```
//! # use figura_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Path, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("7 cm")));
//! output.add_to_layer(RenderLayer::Outline, Box::new(Path::new()));
//!
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Shaded areas and water faces
    Fill,
    /// Dashed edges hidden behind the solid
    HiddenEdge,
    /// Shape boundaries and visible edges
    Outline,
    /// Radius, diameter and bracket lines
    Dimension,
    /// Right-angle markers and the water-surface outline
    Marker,
    /// Centre and endpoint dots
    Point,
    /// Labels and captions
    Text,
}

impl RenderLayer {
    /// Returns the name written to the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Fill => "fill",
            Self::HiddenEdge => "hidden-edge",
            Self::Outline => "outline",
            Self::Dimension => "dimension",
            Self::Marker => "marker",
            Self::Point => "point",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element with a `data-layer`
    /// attribute. Nodes keep their insertion order within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Line, Path};

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_same_layer_shares_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Dimension, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Dimension, Box::new(Line::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::HiddenEdge, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Fill, Box::new(Path::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"fill\""));
        assert!(rendered[1].contains("data-layer=\"hidden-edge\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }
}
