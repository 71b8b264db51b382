//! Figura - parametric geometry for math-education diagrams.
//!
//! Resolves semantic diagram requests (a circle family and a rectangular water
//! tank) into exact path commands, line endpoints, label anchors and edge
//! classifications, and renders them to SVG or JSON.
//!
//! Resolution is pure: the same request always yields the same
//! [`GeometryResult`], and invalid shape/orientation combinations produce
//! sentinel geometry rather than an error.

pub mod circle;
pub mod config;
pub mod request;
pub mod result;
pub mod scale;
pub mod tank;

mod error;
mod export;

pub use figura_core::{color, draw, geometry, path};

pub use error::FiguraError;
pub use export::OutputFormat;
pub use request::DiagramRequest;
pub use result::GeometryResult;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, json::Json, svg::Svg};

/// Builder for parsing, resolving and rendering Figura diagrams.
///
/// # Examples
///
/// ```
/// use figura::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
/// kind = "circle"
/// mode = "semicircle"
/// orientation = "bottom"
/// given_value = "7"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let request = builder.parse(source).expect("Failed to parse");
///
/// let svg = builder.render_svg(&request).expect("Failed to render");
/// assert!(svg.contains("7 cm"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML request document.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Request`] with the offending span for malformed
    /// TOML, unknown keys or unknown enum values.
    pub fn parse(&self, source: &str) -> Result<DiagramRequest, FiguraError> {
        info!("Parsing request");

        let request = DiagramRequest::from_toml(source)
            .map_err(|err| FiguraError::new_request_error(&err, source))?;

        debug!("Request parsed successfully");
        trace!(request:?; "Parsed request");

        Ok(request)
    }

    /// Resolve a request into diagram geometry.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::InvalidDimension`] for a non-positive or
    /// non-finite tank dimension, a non-finite water height, or an invalid
    /// configured circle radius.
    pub fn resolve(&self, request: &DiagramRequest) -> Result<GeometryResult, FiguraError> {
        match request {
            DiagramRequest::Circle(circle_request) => {
                info!(mode:? = circle_request.mode(); "Resolving circle diagram");
                let radius = self.config.circle().radius();
                scale::validate_extent("radius", radius)?;
                Ok(circle::resolve(circle_request, radius))
            }
            DiagramRequest::Tank(tank_request) => {
                info!("Resolving tank diagram");
                tank::resolve(tank_request)
            }
        }
    }

    /// Resolve a request and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`resolve`](Self::resolve), plus
    /// [`FiguraError::Export`] for an invalid configured background color.
    pub fn render_svg(&self, request: &DiagramRequest) -> Result<String, FiguraError> {
        let result = self.resolve(request)?;
        let svg = self.svg_exporter()?.export(&result)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Resolve a request and render the geometry as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`resolve`](Self::resolve).
    pub fn render_json(&self, request: &DiagramRequest) -> Result<String, FiguraError> {
        let result = self.resolve(request)?;
        let json = json_exporter().export(&result)?;

        info!("JSON rendered successfully");
        Ok(json)
    }

    /// Resolve a request and write it to `path` in the given format.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`render_svg`](Self::render_svg), plus
    /// [`FiguraError::Export`] when the file cannot be written.
    pub fn write_output(
        &self,
        request: &DiagramRequest,
        format: OutputFormat,
        path: impl AsRef<Path>,
    ) -> Result<(), FiguraError> {
        let result = self.resolve(request)?;
        info!(format:% = format; "Exporting diagram");

        match format {
            OutputFormat::Svg => self.svg_exporter()?.export_to_file(&result, path.as_ref())?,
            OutputFormat::Json => json_exporter().export_to_file(&result, path.as_ref())?,
        }
        Ok(())
    }

    fn svg_exporter(&self) -> Result<Svg, FiguraError> {
        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        Ok(exporter)
    }
}

fn json_exporter() -> Json {
    Json::new().with_pretty(true)
}
