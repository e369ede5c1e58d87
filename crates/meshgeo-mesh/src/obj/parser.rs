//! OBJ file parser
//!
//! Parses OBJ files (Wavefront Object format) using the tobj crate. Faces
//! keep their source arity (a quad stays one four-vertex face), so each
//! `f` line in the input maps to exactly one entry in [`ObjMesh::faces`].
//! Material references are ignored; only geometry matters here.

use crate::FaceVertices;
use anyhow::{anyhow, Context, Result};
use std::io::BufReader;
use std::path::Path;

/// OBJ mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct ObjMesh {
    /// Model title: first `#` comment line, else the file stem
    pub name: Option<String>,
    /// Number of vertex positions across all objects in the file
    pub vertex_count: usize,
    /// Number of faces across all objects
    pub face_count: usize,
    /// Bounding box minimum
    pub bbox_min: [f32; 3],
    /// Bounding box maximum
    pub bbox_max: [f32; 3],
    /// Per-face vertex groups in declaration order
    pub faces: Vec<FaceVertices>,
}

impl ObjMesh {
    /// Calculate bounding box from all model vertex positions
    ///
    /// Returns `([0,0,0], [0,0,0])` if no vertices are present.
    pub(crate) fn calculate_bbox(models: &[tobj::Model]) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        let mut found_any = false;

        for model in models {
            // Positions are stored as a flat array: [x1, y1, z1, x2, y2, z2, ...]
            for chunk in model.mesh.positions.chunks(3) {
                if chunk.len() == 3 {
                    found_any = true;
                    for i in 0..3 {
                        min[i] = min[i].min(chunk[i]);
                        max[i] = max[i].max(chunk[i]);
                    }
                }
            }
        }

        if !found_any {
            return ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
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

/// OBJ parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjParser;

impl ObjParser {
    /// Parse OBJ file from path
    ///
    /// Reads and parses a Wavefront OBJ file. When the file carries no
    /// leading comment title, the file stem is used as the model name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid OBJ
    /// syntax, or a face references a vertex index out of range.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ObjMesh> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;

        let mut mesh = Self::parse_str(&content)
            .with_context(|| format!("Failed to parse OBJ file: {}", path.display()))?;

        if mesh.name.is_none() {
            mesh.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(std::string::ToString::to_string);
        }

        Ok(mesh)
    }

    /// Parse OBJ data from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string contains invalid OBJ syntax or a face
    /// references a vertex index out of range.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_str(content: &str) -> Result<ObjMesh> {
        let load_options = tobj::LoadOptions {
            triangulate: false, // keep one `f` line = one face
            single_index: false,
            ..Default::default()
        };

        // Materials are irrelevant to bounding boxes; any `mtllib` reference
        // resolves to an empty material set.
        let mut reader = BufReader::new(content.as_bytes());
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &load_options, |_| Ok(Default::default()))
                .context("Failed to parse OBJ data")?;

        let mut vertex_count = 0;
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            vertex_count += mesh.positions.len() / 3;

            if mesh.face_arities.is_empty() {
                // Triangulated layout: indices come in groups of three.
                for triangle in mesh.indices.chunks_exact(3) {
                    faces.push(Self::resolve_face(mesh, triangle)?);
                }
            } else {
                let mut offset = 0;
                for &arity in &mesh.face_arities {
                    let arity = arity as usize;
                    let indices = mesh
                        .indices
                        .get(offset..offset + arity)
                        .ok_or_else(|| anyhow!("face index data truncated"))?;
                    faces.push(Self::resolve_face(mesh, indices)?);
                    offset += arity;
                }
            }
        }

        let name = Self::extract_name_from_comment(content);
        let (bbox_min, bbox_max) = ObjMesh::calculate_bbox(&models);

        Ok(ObjMesh {
            name,
            vertex_count,
            face_count: faces.len(),
            bbox_min,
            bbox_max,
            faces,
        })
    }

    /// Resolve one face's position indices against the flat position array
    fn resolve_face(mesh: &tobj::Mesh, indices: &[u32]) -> Result<FaceVertices> {
        indices
            .iter()
            .map(|&index| {
                let start = index as usize * 3;
                mesh.positions
                    .get(start..start + 3)
                    .map(|p| [p[0], p[1], p[2]])
                    .ok_or_else(|| anyhow!("face references vertex index {index} out of range"))
            })
            .collect()
    }

    /// Extract model title from the first comment line
    fn extract_name_from_comment(content: &str) -> Option<String> {
        content
            .lines()
            .find(|line| line.trim().starts_with('#'))
            .map(|line| line.trim().trim_start_matches('#').trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_QUAD: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";

    fn simple_cube() -> &'static str {
        // Cube with 8 vertices and 12 triangular faces
        r"# Simple cube
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
v 1.0 0.0 1.0
v 1.0 1.0 1.0
v 0.0 1.0 1.0

f 1 2 3
f 1 3 4
f 5 7 6
f 5 8 7
f 4 3 7
f 4 7 8
f 1 6 2
f 1 5 6
f 2 6 7
f 2 7 3
f 1 4 8
f 1 8 5
"
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_quad_stays_single_face() {
        let mesh = ObjParser::parse_str(UNIT_QUAD).unwrap();
        assert_eq!(mesh.vertex_count, 4);
        assert_eq!(mesh.face_count, 1, "quad must not be triangulated");
        assert_eq!(
            mesh.faces[0],
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0]
            ]
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_simple_cube() {
        let mesh = ObjParser::parse_str(simple_cube()).unwrap();

        assert_eq!(mesh.vertex_count, 8, "Should have 8 vertices");
        assert_eq!(mesh.face_count, 12, "Should have 12 triangular faces");
        assert_eq!(
            mesh.name.as_deref(),
            Some("Simple cube"),
            "Should extract title from first comment line"
        );

        assert_eq!(mesh.bbox_min, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.bbox_max, [1.0, 1.0, 1.0]);
        assert_eq!(mesh.dimensions(), [1.0, 1.0, 1.0]);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_face_with_slash_indices() {
        let content = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.5 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.5 1.0
f 1/1 2/2 3/3
";
        let mesh = ObjParser::parse_str(content).unwrap();
        assert_eq!(mesh.face_count, 1);
        assert_eq!(mesh.faces[0][2], [0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_face_index_out_of_range() {
        let content = "v 0 0 0\nv 1 0 0\nf 1 2 9\n";
        let result = ObjParser::parse_str(content);
        assert!(result.is_err(), "out-of-range face index should fail");
    }

    #[test]
    fn test_no_comment_no_name() {
        let mesh = ObjParser::parse_str(UNIT_QUAD).unwrap();
        assert_eq!(mesh.name, None);
    }

    #[test]
    fn test_parse_file_falls_back_to_stem() {
        let path = std::env::temp_dir().join("meshgeo_stem_fallback.obj");
        std::fs::write(&path, UNIT_QUAD).expect("Failed to write test OBJ");

        let mesh = ObjParser::parse_file(&path).expect("Failed to parse OBJ");
        assert_eq!(mesh.name.as_deref(), Some("meshgeo_stem_fallback"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = ObjParser::parse_file("/nonexistent/path/file.obj");
        assert!(result.is_err(), "Should fail for nonexistent file");
    }

    #[test]
    fn test_empty_input() {
        let mesh = ObjParser::parse_str("").unwrap();
        assert_eq!(mesh.vertex_count, 0);
        assert_eq!(mesh.face_count, 0);
        assert_eq!(mesh.bbox_min, [0.0, 0.0, 0.0]);
    }
}
