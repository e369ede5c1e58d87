//! JSON serialization for `GeometryDocument`
//!
//! The document model already implements `Serialize`, so this is a
//! convenience wrapper with formatting options. Bedrock geometry files are
//! conventionally written with a 4-space indent, which `serde_json`'s
//! default pretty printer does not produce, hence the custom formatter.

use crate::error::{MeshGeoError, Result};
use crate::geometry::GeometryDocument;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Options for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
    /// Indentation string when pretty=true (default: 4 spaces)
    pub indent: String,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "    ".to_string(),
        }
    }
}

/// JSON serializer for [`GeometryDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a serializer with default options (pretty, 4-space indent)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self {
            options: JsonOptions::default(),
        }
    }

    /// Create a serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a document to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_document(&self, document: &GeometryDocument) -> Result<String> {
        if !self.options.pretty {
            return Ok(serde_json::to_string(document)?);
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.options.indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut ser)?;

        String::from_utf8(buf).map_err(|e| {
            MeshGeoError::ConversionError(format!("serialized JSON was not valid UTF-8: {e}"))
        })
    }

    /// Serialize a document to compact JSON (no pretty-printing)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_compact(document: &GeometryDocument) -> Result<String> {
        Ok(serde_json::to_string(document)?)
    }
}
