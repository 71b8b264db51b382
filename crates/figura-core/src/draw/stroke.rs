//! Stroke definitions for diagram outlines, edges and markers.
//!
//! Hidden box edges of a tank diagram use [`StrokeStyle::Dashed`]; everything
//! else a diagram draws is solid.
//!
//! ```
//! use figura_core::draw::StrokeDefinition;
//! use figura_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#2c3e50").unwrap(), 1.5);
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("y1", 0)
//!     .set("x2", 10)
//!     .set("y2", 0);
//!
//! let line = figura_core::apply_stroke!(line, &stroke);
//! assert!(line.to_string().contains("stroke-dasharray=\"5,5\""));
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
}

impl StrokeStyle {
    /// SVG `stroke-dasharray` value, `None` for solid lines.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }
}

/// Color, width and dash pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            style: StrokeStyle::Dashed,
            ..Self::solid(color, width)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// Apply a [`StrokeDefinition`] to an SVG element.
///
/// Round caps and joins keep the corners of brackets and right-angle
/// markers closed.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().opaque().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round");

        if let Some(dasharray) = $stroke.style().dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(dashed.style(), StrokeStyle::Dashed);
        assert_eq!(dashed.width(), 1.5);
        assert_eq!(dashed.color(), color);
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_dashed() {
        let solid = StrokeDefinition::solid(Color::default(), 2.0);
        let line = crate::apply_stroke!(svg::node::element::Line::new(), &solid);
        let rendered = line.to_string();
        assert!(!rendered.contains("stroke-dasharray"));
        assert!(rendered.contains("stroke-width=\"2\""));

        let dashed = StrokeDefinition::dashed(Color::default(), 2.0);
        let line = crate::apply_stroke!(svg::node::element::Line::new(), &dashed);
        assert!(line.to_string().contains("stroke-dasharray=\"5,5\""));
    }
}
