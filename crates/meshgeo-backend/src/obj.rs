//! OBJ mesh backend
//!
//! Adapts [`ObjParser`] output to the common [`MeshModel`] seam.

use crate::traits::{MeshBackend, MeshModel};
use meshgeo_core::{InputFormat, MeshGeoError};
use meshgeo_mesh::obj::{ObjMesh, ObjParser};

/// OBJ backend
///
/// Supports Wavefront OBJ (.obj) models. Each `f` line becomes one face in
/// the resulting model; quads and n-gons are kept whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjBackend;

impl ObjBackend {
    /// Create a new OBJ backend
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl MeshBackend for ObjBackend {
    fn format(&self) -> InputFormat {
        InputFormat::Obj
    }

    fn parse_bytes(&self, data: &[u8]) -> Result<MeshModel, MeshGeoError> {
        let content = std::str::from_utf8(data).map_err(|e| {
            MeshGeoError::ConversionError(format!("OBJ data is not valid UTF-8: {e}"))
        })?;

        let ObjMesh { name, faces, .. } = ObjParser::parse_str(content)?;
        Ok(MeshModel { name, faces })
    }

    fn parse_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<MeshModel, MeshGeoError> {
        // Use the parser's file entry point so the model name falls back to
        // the file stem.
        let ObjMesh { name, faces, .. } = ObjParser::parse_file(path)?;
        Ok(MeshModel { name, faces })
    }
}
