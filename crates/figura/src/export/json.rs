//! JSON export of resolved geometry.
//!
//! Paths are written as SVG path-data strings; everything else keeps its
//! structure, so a client renderer can consume the output directly.

use log::debug;

use crate::{export, result::GeometryResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    pretty: bool,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output for reading.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl export::Exporter for Json {
    fn export(&self, result: &GeometryResult) -> Result<String, export::Error> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        debug!(pretty = self.pretty; "JSON document rendered");

        rendered.map_err(|err| export::Error::Render(err.to_string()))
    }
}
