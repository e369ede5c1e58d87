//! PLY file parser
//!
//! Parses PLY files using the `ply_rs` crate, which handles the header
//! (`element vertex <N>`, `element face <N>`, `end_header`) and both ASCII
//! and binary bodies. This module resolves each face's vertex index list
//! against the vertex element; extra per-vertex properties (color,
//! normals) are ignored. Faces resolving to fewer than three vertices are
//! skipped rather than rejected, since exporters occasionally emit stray
//! edge records in the face element.

use crate::FaceVertices;
use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use std::io::Cursor;
use std::path::Path;

/// PLY mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct PlyMesh {
    /// First header comment, if any
    pub name: Option<String>,
    /// Number of vertices declared by the header
    pub vertex_count: usize,
    /// Number of faces that resolved to at least three vertices
    pub face_count: usize,
    /// Bounding box minimum
    pub bbox_min: [f32; 3],
    /// Bounding box maximum
    pub bbox_max: [f32; 3],
    /// Per-face vertex groups in declaration order
    pub faces: Vec<FaceVertices>,
}

impl PlyMesh {
    /// Calculate bounding box from vertices
    fn calculate_bbox(vertices: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
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

/// PLY parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlyParser;

impl PlyParser {
    /// Parse PLY file from path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the header is
    /// malformed, the body is shorter than the header declares, or a face
    /// references a vertex index out of range.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PlyMesh> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read PLY file: {}", path.display()))?;

        Self::parse_bytes(&data)
            .with_context(|| format!("Failed to parse PLY file: {}", path.display()))
    }

    /// Parse PLY data from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid PLY or a face references a
    /// vertex index out of range.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_bytes(data: &[u8]) -> Result<PlyMesh> {
        let parser = Parser::<DefaultElement>::new();
        let mut cursor = Cursor::new(data);
        let ply = parser
            .read_ply(&mut cursor)
            .context("Failed to parse PLY data")?;

        let name = ply
            .header
            .comments
            .first()
            .map(|comment| comment.trim().to_string())
            .filter(|comment| !comment.is_empty());

        let vertices: Vec<[f32; 3]> = match ply.payload.get("vertex") {
            Some(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    Self::read_vertex(element)
                        .with_context(|| format!("invalid vertex element {index}"))
                })
                .collect::<Result<_>>()?,
            None => Vec::new(),
        };

        let mut faces = Vec::new();
        if let Some(elements) = ply.payload.get("face") {
            for (index, element) in elements.iter().enumerate() {
                let indices = Self::read_face_indices(element)
                    .with_context(|| format!("invalid face element {index}"))?;

                if indices.len() < 3 {
                    warn!("skipping face {index}: only {} vertices", indices.len());
                    continue;
                }

                let face = indices
                    .iter()
                    .map(|&i| {
                        vertices.get(i).copied().ok_or_else(|| {
                            anyhow!("face {index} references vertex index {i} out of range")
                        })
                    })
                    .collect::<Result<FaceVertices>>()?;
                faces.push(face);
            }
        }

        let (bbox_min, bbox_max) = PlyMesh::calculate_bbox(&vertices);

        Ok(PlyMesh {
            name,
            vertex_count: vertices.len(),
            face_count: faces.len(),
            bbox_min,
            bbox_max,
            faces,
        })
    }

    /// Read a vertex element's x/y/z properties
    fn read_vertex(element: &DefaultElement) -> Result<[f32; 3]> {
        let mut position = [0.0f32; 3];
        for (slot, key) in position.iter_mut().zip(["x", "y", "z"]) {
            let property = element
                .get(key)
                .ok_or_else(|| anyhow!("vertex element missing property {key}"))?;
            *slot = match property {
                Property::Float(value) => *value,
                #[allow(clippy::cast_possible_truncation)]
                Property::Double(value) => *value as f32,
                other => bail!("unexpected type for vertex {key}: {other:?}"),
            };
        }
        Ok(position)
    }

    /// Read a face element's vertex index list
    ///
    /// Both common property names are accepted; any integer list type is
    /// converted. Negative indices are rejected.
    fn read_face_indices(element: &DefaultElement) -> Result<Vec<usize>> {
        let list = element
            .get("vertex_indices")
            .or_else(|| element.get("vertex_index"))
            .ok_or_else(|| anyhow!("face element has no vertex index list"))?;

        fn signed<T: Copy + TryInto<usize> + std::fmt::Display>(values: &[T]) -> Result<Vec<usize>> {
            values
                .iter()
                .map(|&value| {
                    value
                        .try_into()
                        .map_err(|_| anyhow!("negative vertex index {value}"))
                })
                .collect()
        }

        match list {
            Property::ListChar(values) => signed(values),
            Property::ListShort(values) => signed(values),
            Property::ListInt(values) => signed(values),
            Property::ListUChar(values) => Ok(values.iter().map(|&v| usize::from(v)).collect()),
            Property::ListUShort(values) => Ok(values.iter().map(|&v| usize::from(v)).collect()),
            Property::ListUInt(values) => Ok(values.iter().map(|&v| v as usize).collect()),
            other => bail!("unexpected type for face index list: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
ply
format ascii 1.0
comment flat triangle
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
0 1 0
3 0 1 2
";

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_triangle() {
        let mesh = PlyParser::parse_bytes(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count, 3);
        assert_eq!(mesh.face_count, 1);
        assert_eq!(mesh.name.as_deref(), Some("flat triangle"));
        assert_eq!(
            mesh.faces[0],
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(mesh.bbox_min, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.bbox_max, [1.0, 1.0, 0.0]);
        assert_eq!(mesh.dimensions(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_extra_vertex_properties_ignored() {
        let content = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
property uchar red
property uchar green
property uchar blue
element face 1
property list uchar int vertex_indices
end_header
0 0 0 255 0 0
2 0 0 0 255 0
0 2 0 0 0 255
3 0 1 2
";
        let mesh = PlyParser::parse_bytes(content.as_bytes()).unwrap();
        assert_eq!(mesh.face_count, 1);
        assert_eq!(mesh.faces[0][1], [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_short_face_skipped() {
        let content = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 2
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
0 1 0
2 0 1
3 0 1 2
";
        let mesh = PlyParser::parse_bytes(content.as_bytes()).unwrap();
        // The two-index entry is skipped silently.
        assert_eq!(mesh.face_count, 1);
        assert_eq!(mesh.faces.len(), 1);
    }

    #[test]
    fn test_face_index_out_of_range() {
        let content = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
0 1 0
3 0 1 9
";
        let result = PlyParser::parse_bytes(content.as_bytes());
        assert!(result.is_err(), "out-of-range face index should fail");
    }

    #[test]
    fn test_quad_face() {
        let content = "\
ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
1 1 0
0 1 0
4 0 1 2 3
";
        let mesh = PlyParser::parse_bytes(content.as_bytes()).unwrap();
        assert_eq!(mesh.face_count, 1);
        assert_eq!(mesh.faces[0].len(), 4);
    }

    #[test]
    fn test_missing_header_fails() {
        let result = PlyParser::parse_bytes(b"not a ply file at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = PlyParser::parse_file("/nonexistent/path/file.ply");
        assert!(result.is_err(), "Should fail for nonexistent file");
    }
}
