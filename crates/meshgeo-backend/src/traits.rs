//! Core trait definitions for mesh backends

use meshgeo_core::{InputFormat, MeshGeoError, Vertex};
use std::path::Path;

/// Default texture sheet width written into assembled geometries
pub const DEFAULT_TEXTURE_WIDTH: u32 = 64;

/// Default texture sheet height written into assembled geometries
pub const DEFAULT_TEXTURE_HEIGHT: u32 = 64;

/// Options for geometry assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConvertOptions {
    /// Texture sheet width written into the geometry
    pub texture_width: u32,

    /// Texture sheet height written into the geometry
    pub texture_height: u32,
}

impl ConvertOptions {
    /// Set the texture sheet width
    #[inline]
    #[must_use = "returns options with the texture width configured"]
    pub const fn with_texture_width(mut self, width: u32) -> Self {
        self.texture_width = width;
        self
    }

    /// Set the texture sheet height
    #[inline]
    #[must_use = "returns options with the texture height configured"]
    pub const fn with_texture_height(mut self, height: u32) -> Self {
        self.texture_height = height;
        self
    }

    /// Set both texture dimensions at once
    #[inline]
    #[must_use = "returns options with the texture size configured"]
    pub const fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_width = width;
        self.texture_height = height;
        self
    }
}

impl Default for ConvertOptions {
    #[inline]
    fn default() -> Self {
        Self {
            texture_width: DEFAULT_TEXTURE_WIDTH,
            texture_height: DEFAULT_TEXTURE_HEIGHT,
        }
    }
}

/// A parsed mesh reduced to what assembly needs: per-face vertex groups.
///
/// This is the seam between the format-specific parsers and the shared
/// assembly path; every backend produces one regardless of how its format
/// encodes geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshModel {
    /// Model name from the source file, when it carries one (OBJ comment
    /// title, ASCII STL `solid` header, PLY header comment)
    pub name: Option<String>,

    /// Ordered per-face vertex groups
    pub faces: Vec<Vec<Vertex>>,
}

impl MeshModel {
    /// Number of faces in the model
    #[inline]
    #[must_use = "returns the number of faces"]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Main trait for mesh backends
///
/// Each backend (OBJ, STL, PLY) implements this trait to turn raw file
/// data into a [`MeshModel`].
pub trait MeshBackend: Send + Sync {
    /// Get the format this backend handles
    fn format(&self) -> InputFormat;

    /// Parse mesh data from bytes
    ///
    /// # Errors
    /// Returns an error if parsing fails.
    fn parse_bytes(&self, data: &[u8]) -> Result<MeshModel, MeshGeoError>;

    /// Parse mesh data from a file path
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<MeshModel, MeshGeoError> {
        let data = std::fs::read(path.as_ref()).map_err(MeshGeoError::IoError)?;
        self.parse_bytes(&data)
    }

    /// Check if this backend can handle the given format
    fn can_handle(&self, format: InputFormat) -> bool {
        self.format() == format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_default() {
        let options = ConvertOptions::default();
        assert_eq!(options.texture_width, 64);
        assert_eq!(options.texture_height, 64);
    }

    #[test]
    fn test_convert_options_builders() {
        let options = ConvertOptions::default()
            .with_texture_width(128)
            .with_texture_height(32);
        assert_eq!(options.texture_width, 128);
        assert_eq!(options.texture_height, 32);

        let options = ConvertOptions::default().with_texture_size(16, 48);
        assert_eq!(options.texture_width, 16);
        assert_eq!(options.texture_height, 48);
    }

    #[test]
    fn test_mesh_model_face_count() {
        let model = MeshModel {
            name: None,
            faces: vec![
                vec![[0.0; 3], [1.0; 3], [2.0; 3]],
                vec![[0.0; 3], [1.0; 3], [2.0; 3], [3.0; 3]],
            ],
        };
        assert_eq!(model.face_count(), 2);
        assert_eq!(MeshModel::default().face_count(), 0);
    }

    // Minimal backend to exercise the trait's default methods
    struct FixedBackend;

    impl MeshBackend for FixedBackend {
        fn format(&self) -> InputFormat {
            InputFormat::Obj
        }

        fn parse_bytes(&self, _data: &[u8]) -> Result<MeshModel, MeshGeoError> {
            Ok(MeshModel {
                name: Some("fixed".to_string()),
                faces: vec![vec![[0.0; 3], [1.0; 3], [2.0; 3]]],
            })
        }
    }

    #[test]
    fn test_can_handle_default_impl() {
        let backend = FixedBackend;
        assert!(backend.can_handle(InputFormat::Obj));
        assert!(!backend.can_handle(InputFormat::Stl));
    }

    #[test]
    fn test_parse_file_default_impl_reads_bytes() {
        let dir = std::env::temp_dir();
        let path = dir.join("meshgeo_fixed_backend.obj");
        std::fs::write(&path, b"ignored").unwrap();

        let model = FixedBackend.parse_file(&path).unwrap();
        assert_eq!(model.face_count(), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_parse_file_default_impl_missing_file() {
        let result = FixedBackend.parse_file("/nonexistent/path/file.obj");
        assert!(matches!(result, Err(MeshGeoError::IoError(_))));
    }
}
