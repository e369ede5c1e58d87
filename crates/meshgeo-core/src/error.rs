//! Error types for mesh-to-geometry conversion.
//!
//! This module defines the error taxonomy shared by every conversion stage
//! and a [`Result`] alias used throughout the workspace.

use thiserror::Error;

/// Error types that can occur while converting a mesh into a geometry
/// document.
///
/// Covers IO failures, format detection failures, parser errors bubbled up
/// from the format backends, and serialization errors.
///
/// # Examples
///
/// ```rust
/// use meshgeo_core::{InputFormat, MeshGeoError};
///
/// fn detect(ext: &str) -> Result<InputFormat, MeshGeoError> {
///     InputFormat::from_extension(ext)
///         .ok_or_else(|| MeshGeoError::FormatError(format!("Unsupported format: {ext}")))
/// }
///
/// assert!(detect("obj").is_ok());
/// assert!(matches!(detect("fbx"), Err(MeshGeoError::FormatError(_))));
/// ```
#[derive(Error, Debug)]
pub enum MeshGeoError {
    /// General conversion error.
    ///
    /// Catch-all for conversion failures that do not fit a more specific
    /// category, such as an assembled document that cannot be encoded.
    #[error("Conversion error: {0}")]
    ConversionError(String),

    /// File I/O error.
    ///
    /// Reading the input model or writing the output document failed
    /// (file not found, permission denied, disk full).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    ///
    /// Serializing the geometry document with `serde_json` failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Format detection or unsupported format error.
    ///
    /// The input path has no extension, or the extension does not map to a
    /// supported mesh format.
    #[error("Format detection error: {0}")]
    FormatError(String),

    /// Backend-specific error.
    ///
    /// A format backend was asked to handle a format it does not support.
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Parser error from the format-specific mesh parsers.
    ///
    /// Malformed file content: a face index out of range, a truncated
    /// binary record, or a malformed header.
    #[error("Parser error: {0}")]
    ParserError(#[from] anyhow::Error),
}

/// Type alias for [`Result<T, MeshGeoError>`].
///
/// # Examples
///
/// ```rust
/// use meshgeo_core::{GeometryDocument, JsonSerializer, Result};
///
/// fn encode(document: &GeometryDocument) -> Result<String> {
///     JsonSerializer::new().serialize_document(document)
/// }
/// ```
pub type Result<T> = std::result::Result<T, MeshGeoError>;
