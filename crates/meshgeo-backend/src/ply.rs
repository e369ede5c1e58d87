//! PLY mesh backend
//!
//! Adapts [`PlyParser`] output to the common [`MeshModel`] seam.

use crate::traits::{MeshBackend, MeshModel};
use meshgeo_core::{InputFormat, MeshGeoError};
use meshgeo_mesh::ply::{PlyMesh, PlyParser};

/// PLY backend
///
/// Supports ASCII and binary PLY (.ply) models. Faces resolving to fewer
/// than three vertices are dropped during parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlyBackend;

impl PlyBackend {
    /// Create a new PLY backend
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl MeshBackend for PlyBackend {
    fn format(&self) -> InputFormat {
        InputFormat::Ply
    }

    fn parse_bytes(&self, data: &[u8]) -> Result<MeshModel, MeshGeoError> {
        let PlyMesh { name, faces, .. } = PlyParser::parse_bytes(data)?;
        Ok(MeshModel { name, faces })
    }
}
