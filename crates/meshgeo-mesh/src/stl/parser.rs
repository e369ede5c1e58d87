//! STL file parser
//!
//! Parses STL files (both ASCII and binary) using the `stl_io` crate.
//! Binary STL is an 80-byte header, a little-endian u32 triangle count,
//! then 50-byte triangle records; a file shorter than the declared count
//! fails the parse. Each triangle record becomes one entry in
//! [`StlMesh::faces`], with no vertex sharing between entries.

use crate::FaceVertices;
use anyhow::{anyhow, Context, Result};
use std::io::Cursor;
use std::path::Path;
use stl_io::Vector;

/// STL mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct StlMesh {
    /// Mesh name (from the `solid <name>` header, ASCII files only)
    pub name: Option<String>,
    /// Number of triangles
    pub triangle_count: usize,
    /// Number of unique vertices
    pub vertex_count: usize,
    /// Bounding box minimum
    pub bbox_min: [f32; 3],
    /// Bounding box maximum
    pub bbox_max: [f32; 3],
    /// Whether the source was binary or ASCII
    pub is_binary: bool,
    /// Per-triangle vertex triples in record order
    pub faces: Vec<FaceVertices>,
}

impl StlMesh {
    /// Calculate bounding box from vertices
    fn calculate_bbox(vertices: &[Vector<f32>]) -> ([f32; 3], [f32; 3]) {
        if vertices.is_empty() {
            return ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        }

        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];

        for vertex in vertices {
            for i in 0..3 {
                min[i] = min[i].min(vertex[i]);
                max[i] = max[i].max(vertex[i]);
            }
        }

        (min, max)
    }

    /// Get mesh dimensions as `[width, height, depth]` of the bounding box
    #[inline]
    #[must_use = "dimensions returns width/height/depth array"]
    pub fn dimensions(&self) -> [f32; 3] {
        [
            self.bbox_max[0] - self.bbox_min[0],
            self.bbox_max[1] - self.bbox_min[1],
            self.bbox_max[2] - self.bbox_min[2],
        ]
    }
}

/// STL parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StlParser;

impl StlParser {
    /// Parse STL file from path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid or
    /// truncated STL data.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<StlMesh> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read STL file: {}", path.display()))?;

        Self::parse_bytes(&data)
            .with_context(|| format!("Failed to parse STL file: {}", path.display()))
    }

    /// Parse STL data from bytes
    ///
    /// Both ASCII and binary formats are detected automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid STL, including a binary
    /// body shorter than its declared triangle count.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_bytes(data: &[u8]) -> Result<StlMesh> {
        let mut cursor = Cursor::new(data);
        let mesh = stl_io::read_stl(&mut cursor).context("Failed to parse STL data")?;

        let triangle_count = mesh.faces.len();
        let vertex_count = mesh.vertices.len();
        let (bbox_min, bbox_max) = StlMesh::calculate_bbox(&mesh.vertices);

        let mut faces = Vec::with_capacity(triangle_count);
        for triangle in &mesh.faces {
            let mut face = Vec::with_capacity(3);
            for &index in &triangle.vertices {
                let vertex = mesh
                    .vertices
                    .get(index)
                    .ok_or_else(|| anyhow!("triangle references vertex index {index} out of range"))?;
                face.push([vertex[0], vertex[1], vertex[2]]);
            }
            faces.push(face);
        }

        let is_binary = Self::is_likely_binary(data, triangle_count);
        let name = if is_binary {
            None
        } else {
            Self::extract_name_from_header(data)
        };

        Ok(StlMesh {
            name,
            triangle_count,
            vertex_count,
            bbox_min,
            bbox_max,
            is_binary,
            faces,
        })
    }

    /// Extract mesh name from an ASCII `solid <name>` header line
    fn extract_name_from_header(data: &[u8]) -> Option<String> {
        let first_line = data.split(|&b| b == b'\n').next()?;
        let line = std::str::from_utf8(first_line).ok()?;
        line.strip_prefix("solid ")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Detect whether the data is binary or ASCII STL
    ///
    /// ASCII files start with "solid ", but some binary exporters put
    /// "solid" in the 80-byte header too; the exact binary record size
    /// (80 + 4 + 50 per triangle) disambiguates.
    fn is_likely_binary(data: &[u8], triangle_count: usize) -> bool {
        if data.len() < 5 {
            return false;
        }

        if &data[0..5] == b"solid" {
            let expected_binary_size = 80 + 4 + 50 * triangle_count;
            return data.len().abs_diff(expected_binary_size) < 10;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SQUARE: &str = r"solid test_square
  facet normal 0.0 0.0 1.0
    outer loop
      vertex 0.0 0.0 0.0
      vertex 1.0 0.0 0.0
      vertex 1.0 1.0 0.0
    endloop
  endfacet
  facet normal 0.0 0.0 1.0
    outer loop
      vertex 0.0 0.0 0.0
      vertex 1.0 1.0 0.0
      vertex 0.0 1.0 0.0
    endloop
  endfacet
endsolid test_square
";

    /// Binary STL with the given triangles, 80-byte zero header
    fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut data = vec![0u8; 80];
        data.extend_from_slice(&u32::try_from(triangles.len()).unwrap().to_le_bytes());
        for triangle in triangles {
            data.extend_from_slice(&[0u8; 12]); // normal, unused
            for vertex in triangle {
                for component in vertex {
                    data.extend_from_slice(&component.to_le_bytes());
                }
            }
            data.extend_from_slice(&[0u8; 2]); // attribute byte count
        }
        data
    }

    #[test]
    fn test_parse_ascii() {
        let mesh = StlParser::parse_bytes(SIMPLE_SQUARE.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count, 2);
        assert!(mesh.vertex_count >= 3); // at least 3 unique vertices
        assert_eq!(mesh.name.as_deref(), Some("test_square"));
        assert!(!mesh.is_binary);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.faces[0].len(), 3);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_binary_triangle() {
        let data = binary_stl(&[[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]]);
        let mesh = StlParser::parse_bytes(&data).unwrap();

        assert_eq!(mesh.triangle_count, 1);
        assert!(mesh.is_binary);
        assert_eq!(mesh.name, None);
        assert_eq!(
            mesh.faces[0],
            vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]
        );
        assert_eq!(mesh.bbox_min, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.bbox_max, [2.0, 2.0, 0.0]);
    }

    #[test]
    fn test_truncated_binary_fails() {
        let mut data = binary_stl(&[[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]]);
        // Declare a second triangle that is not present.
        data[80..84].copy_from_slice(&2u32.to_le_bytes());
        let result = StlParser::parse_bytes(&data);
        assert!(result.is_err(), "truncated binary STL should fail");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_bounding_box_and_dimensions() {
        let mesh = StlParser::parse_bytes(SIMPLE_SQUARE.as_bytes()).unwrap();
        assert_eq!(mesh.bbox_min, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.bbox_max, [1.0, 1.0, 0.0]);
        assert_eq!(mesh.dimensions(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_extract_name_from_header() {
        let name = StlParser::extract_name_from_header(b"solid my_model\n  facet...");
        assert_eq!(name, Some("my_model".to_string()));

        let name = StlParser::extract_name_from_header(b"solid \n  facet...");
        assert_eq!(name, None);
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = StlParser::parse_file("/nonexistent/path/file.stl");
        assert!(result.is_err(), "Should fail for nonexistent file");
    }
}
