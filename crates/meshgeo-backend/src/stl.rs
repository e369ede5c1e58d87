//! STL mesh backend
//!
//! Adapts [`StlParser`] output to the common [`MeshModel`] seam.

use crate::traits::{MeshBackend, MeshModel};
use meshgeo_core::{InputFormat, MeshGeoError};
use meshgeo_mesh::stl::{StlMesh, StlParser};

/// STL backend
///
/// Supports binary and ASCII STL (.stl) models. Each triangle record
/// becomes one face; shared vertices are not deduplicated across faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StlBackend;

impl StlBackend {
    /// Create a new STL backend
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl MeshBackend for StlBackend {
    fn format(&self) -> InputFormat {
        InputFormat::Stl
    }

    fn parse_bytes(&self, data: &[u8]) -> Result<MeshModel, MeshGeoError> {
        let StlMesh { name, faces, .. } = StlParser::parse_bytes(data)?;
        Ok(MeshModel { name, faces })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle_stl() -> Vec<u8> {
        let mut data = vec![0u8; 80];
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 12]); // normal, unused
        for vertex in [[0.0f32, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]] {
            for component in vertex {
                data.extend_from_slice(&component.to_le_bytes());
            }
        }
        data.extend_from_slice(&[0u8; 2]); // attribute byte count
        data
    }

    #[test]
    fn test_format() {
        assert_eq!(StlBackend::new().format(), InputFormat::Stl);
        assert!(!StlBackend::new().can_handle(InputFormat::Ply));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_bytes_triangle() {
        let model = StlBackend::new().parse_bytes(&single_triangle_stl()).unwrap();
        assert_eq!(model.face_count(), 1);
        assert_eq!(
            model.faces[0],
            vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]
        );
    }

    #[test]
    fn test_parse_bytes_garbage_fails() {
        let result = StlBackend::new().parse_bytes(&[0u8; 10]);
        assert!(result.is_err());
    }
}
