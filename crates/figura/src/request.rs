//! Diagram requests.
//!
//! A request carries the semantic parameters of one diagram: which shape,
//! which way it faces, which dimensions to label and with what text. Requests
//! are plain values; they are built fresh for every render and compared by
//! value.
//!
//! Requests deserialize from TOML (or any serde format) with a `kind` tag:
//!
//! ```toml
//! kind = "circle"
//! mode = "quarter"
//! orientation = "bottom-left"
//! given_value = "7"
//! unit = "cm"
//! ```

use serde::Deserialize;

/// A request for either diagram family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiagramRequest {
    Circle(CircleDiagramRequest),
    Tank(TankDiagramRequest),
}

impl DiagramRequest {
    /// Reads a request from a TOML document.
    ///
    /// The `kind` key is read first and the document is then deserialized
    /// straight into the matching request type, so errors inside the request
    /// keep the span of the offending key or value.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed documents, a missing or unknown
    /// `kind`, unknown keys and invalid values.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let header: RequestHeader = toml::from_str(source)?;
        match header.kind {
            RequestKind::Circle => toml::from_str(source).map(Self::Circle),
            RequestKind::Tank => toml::from_str(source).map(Self::Tank),
        }
    }
}

/// The `kind` key of a request document; every other key is ignored.
#[derive(Deserialize)]
struct RequestHeader {
    kind: RequestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RequestKind {
    Circle,
    Tank,
}

/// `kind` key accepted by a circle request read on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum CircleTag {
    #[default]
    Circle,
}

/// `kind` key accepted by a tank request read on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TankTag {
    #[default]
    Tank,
}

impl From<CircleDiagramRequest> for DiagramRequest {
    fn from(request: CircleDiagramRequest) -> Self {
        Self::Circle(request)
    }
}

impl From<TankDiagramRequest> for DiagramRequest {
    fn from(request: TankDiagramRequest) -> Self {
        Self::Tank(request)
    }
}

/// Which member of the circle family to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircleMode {
    Full,
    Semicircle,
    Quarter,
    ThreeQuarter,
}

/// Orientation of a circle-family shape.
///
/// Each mode accepts its own subset: a semicircle names the side its arc
/// faces, a quarter circle names the corner it occupies, and a
/// three-quarter circle names the corner that is missing. Full circles
/// ignore orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    MissingTopRight,
    MissingTopLeft,
    MissingBottomRight,
    MissingBottomLeft,
}

/// Which circle dimension the problem gives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GivenType {
    #[default]
    Radius,
    Diameter,
}

/// Parameters of a circle-family diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircleDiagramRequest {
    #[serde(default)]
    kind: CircleTag,
    mode: CircleMode,
    #[serde(default)]
    orientation: Option<Orientation>,
    #[serde(default)]
    given_value: Option<String>,
    #[serde(default)]
    given_type: GivenType,
    #[serde(default = "default_unit")]
    unit: String,
    #[serde(default = "default_true")]
    show_centre: bool,
    #[serde(default = "default_true")]
    show_radius_line: bool,
    #[serde(default)]
    show_diameter_line: bool,
    #[serde(default = "default_centre_label")]
    centre_label: String,
    #[serde(default)]
    show_shading: bool,
    #[serde(default)]
    highlight_arc: bool,
    #[serde(default)]
    caption: Option<String>,
}

impl CircleDiagramRequest {
    /// Creates a request for `mode` with every other field at its default.
    pub fn new(mode: CircleMode) -> Self {
        Self {
            kind: CircleTag::Circle,
            mode,
            orientation: None,
            given_value: None,
            given_type: GivenType::default(),
            unit: default_unit(),
            show_centre: true,
            show_radius_line: true,
            show_diameter_line: false,
            centre_label: default_centre_label(),
            show_shading: false,
            highlight_arc: false,
            caption: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets the given dimension, e.g. `("7", GivenType::Radius)`.
    pub fn with_given(mut self, value: impl Into<String>, given_type: GivenType) -> Self {
        self.given_value = Some(value.into());
        self.given_type = given_type;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_show_centre(mut self, show: bool) -> Self {
        self.show_centre = show;
        self
    }

    pub fn with_show_radius_line(mut self, show: bool) -> Self {
        self.show_radius_line = show;
        self
    }

    pub fn with_show_diameter_line(mut self, show: bool) -> Self {
        self.show_diameter_line = show;
        self
    }

    pub fn with_centre_label(mut self, label: impl Into<String>) -> Self {
        self.centre_label = label.into();
        self
    }

    pub fn with_shading(mut self, shaded: bool) -> Self {
        self.show_shading = shaded;
        self
    }

    pub fn with_highlight_arc(mut self, highlight: bool) -> Self {
        self.highlight_arc = highlight;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn mode(&self) -> CircleMode {
        self.mode
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// The given dimension; an empty value counts as not given.
    pub fn given_value(&self) -> Option<&str> {
        self.given_value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn given_type(&self) -> GivenType {
        self.given_type
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn show_centre(&self) -> bool {
        self.show_centre
    }

    pub fn show_radius_line(&self) -> bool {
        self.show_radius_line
    }

    pub fn show_diameter_line(&self) -> bool {
        self.show_diameter_line
    }

    pub fn centre_label(&self) -> &str {
        &self.centre_label
    }

    pub fn show_shading(&self) -> bool {
        self.show_shading
    }

    pub fn highlight_arc(&self) -> bool {
        self.highlight_arc
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// Parameters of a rectangular water-tank diagram.
///
/// Dimensions are real-world values in `unit`; they only feed proportions
/// and label text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TankDiagramRequest {
    #[serde(default)]
    kind: TankTag,
    length: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    water_height: f32,
    #[serde(default = "default_unit")]
    unit: String,
    #[serde(default = "default_true")]
    show_dimensions: bool,
    #[serde(default = "default_true")]
    show_water_height: bool,
    #[serde(default)]
    caption: Option<String>,
}

impl TankDiagramRequest {
    /// Creates an empty tank request with default unit and labels.
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            kind: TankTag::Tank,
            length,
            width,
            height,
            water_height: 0.0,
            unit: default_unit(),
            show_dimensions: true,
            show_water_height: true,
            caption: None,
        }
    }

    pub fn with_water_height(mut self, water_height: f32) -> Self {
        self.water_height = water_height;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_show_dimensions(mut self, show: bool) -> Self {
        self.show_dimensions = show;
        self
    }

    pub fn with_show_water_height(mut self, show: bool) -> Self {
        self.show_water_height = show;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The requested water height, before clamping.
    pub fn water_height(&self) -> f32 {
        self.water_height
    }

    /// The water height clamped into `[0, height]`.
    pub fn effective_water_height(&self) -> f32 {
        self.water_height.clamp(0.0, self.height.max(0.0))
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn show_dimensions(&self) -> bool {
        self.show_dimensions
    }

    pub fn show_water_height(&self) -> bool {
        self.show_water_height
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

fn default_unit() -> String {
    "cm".to_string()
}

fn default_centre_label() -> String {
    "O".to_string()
}

fn default_true() -> bool {
    true
}

/// Formats a labelled value, e.g. `"7 cm"`; an empty unit leaves the bare value.
pub(crate) fn dimension_text(value: impl std::fmt::Display, unit: &str) -> String {
    if unit.is_empty() {
        value.to_string()
    } else {
        format!("{value} {unit}")
    }
}
