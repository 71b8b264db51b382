//! Exporters turn resolved geometry into an output document.

pub mod json;
pub mod svg;

use std::{fmt, fs, path::Path, str::FromStr};

use log::{error, info};

use crate::result::GeometryResult;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format `{s}` (expected `svg` or `json`)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => f.write_str("svg"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// A single Exporter trait shared by every output format.
pub trait Exporter {
    /// Renders the geometry into a document string.
    fn export(&self, result: &GeometryResult) -> Result<String, Error>;

    /// Renders the geometry and writes it to `path`.
    fn export_to_file(&self, result: &GeometryResult, path: &Path) -> Result<(), Error> {
        let content = self.export(result)?;

        info!(path:? = path; "Writing output file");
        fs::write(path, content).map_err(|err| {
            error!(path:? = path, err:err; "Failed to write output file");
            Error::Io(err)
        })
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("png".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let exporter = json::Json::new();
        let path = Path::new("/nonexistent-figura-dir/out.json");
        let err = exporter
            .export_to_file(&GeometryResult::default(), path)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
