//! Drawing primitives shared by SVG renderers.
//!
//! - [`StrokeDefinition`] and [`StrokeStyle`] describe how lines are painted.
//! - [`LayeredOutput`] collects SVG nodes by [`RenderLayer`] so that fills,
//!   hidden edges, outlines and labels stack in a fixed z-order.

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
