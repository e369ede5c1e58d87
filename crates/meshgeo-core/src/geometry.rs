//! Bedrock block-geometry document model
//!
//! The output side of every conversion: a [`GeometryDocument`] maps
//! `geometry.<name>` keys to a [`Geometry`], which holds texture dimensions
//! and a list of [`Bone`]s, each carrying the [`Cube`]s that approximate the
//! source mesh. Field order on the serde derives matches the layout the
//! game engine expects, so the types serialize directly.

use crate::error::Result;
use crate::serializer::JsonSerializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Name of the single bone every converted model is assembled into.
pub const HEAD_BONE: &str = "head";

/// A single vertex position as `[x, y, z]`.
pub type Vertex = [f32; 3];

/// Axis-aligned box approximating one mesh face.
///
/// `origin` is the componentwise minimum of the face's vertices and `size`
/// the componentwise extent, so every size component is non-negative. A
/// face whose vertices coincide on an axis yields zero size on that axis.
/// `uv` is a constant `[0, 0]` placeholder; texture mapping is out of
/// scope for the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Minimum corner of the box
    pub origin: [f32; 3],
    /// Extent per axis (max − min), each component ≥ 0
    pub size: [f32; 3],
    /// Texture offset placeholder
    pub uv: [u32; 2],
}

impl Cube {
    /// Reduce a face's vertices to their enclosing axis-aligned box.
    ///
    /// This is the sole approximation step of the whole pipeline: face
    /// orientation, concavity and shared edges are discarded, and each face
    /// becomes an independent box. Pure and deterministic. An empty vertex
    /// set yields the zero cube.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meshgeo_core::Cube;
    ///
    /// let cube = Cube::enclosing(&[
    ///     [0.0, 0.0, 0.0],
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    /// ]);
    /// assert_eq!(cube.origin, [0.0, 0.0, 0.0]);
    /// assert_eq!(cube.size, [2.0, 2.0, 0.0]);
    /// ```
    #[must_use = "reduction returns the enclosing cube"]
    pub fn enclosing(vertices: &[Vertex]) -> Self {
        if vertices.is_empty() {
            return Self {
                origin: [0.0; 3],
                size: [0.0; 3],
                uv: [0, 0],
            };
        }

        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];

        for vertex in vertices {
            for i in 0..3 {
                min[i] = min[i].min(vertex[i]);
                max[i] = max[i].max(vertex[i]);
            }
        }

        Self {
            origin: min,
            size: [max[0] - min[0], max[1] - min[1], max[2] - min[2]],
            uv: [0, 0],
        }
    }
}

/// Named pivot/rotation group holding cubes.
///
/// The converter produces exactly one unposed bone named [`HEAD_BONE`] with
/// zero pivot and rotation; the fields exist because the document format
/// requires them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    /// Bone name
    pub name: String,
    /// Pivot point, `[0, 0, 0]` for converted models
    pub pivot: [f32; 3],
    /// Rotation in degrees, `[0, 0, 0]` for converted models
    pub rotation: [f32; 3],
    /// Cubes in face order
    pub cubes: Vec<Cube>,
}

impl Bone {
    /// Create an empty, unposed bone
    #[inline]
    #[must_use = "creates a bone that should be filled with cubes"]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pivot: [0.0; 3],
            rotation: [0.0; 3],
            cubes: Vec::new(),
        }
    }
}

/// A named geometry: texture dimensions plus bones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Texture width in pixels
    pub texturewidth: u32,
    /// Texture height in pixels
    pub textureheight: u32,
    /// Bones in declaration order
    pub bones: Vec<Bone>,
}

impl Geometry {
    /// Create a geometry with the given texture dimensions and no bones
    #[inline]
    #[must_use = "creates a geometry that should be filled with bones"]
    pub const fn new(texturewidth: u32, textureheight: u32) -> Self {
        Self {
            texturewidth,
            textureheight,
            bones: Vec::new(),
        }
    }

    /// Total cube count across all bones
    #[inline]
    #[must_use = "returns the number of cubes in this geometry"]
    pub fn cube_count(&self) -> usize {
        self.bones.iter().map(|bone| bone.cubes.len()).sum()
    }
}

/// Top-level output document: `geometry.<name>` keys mapping to geometries.
///
/// Serializes transparently as the underlying map, producing the plain
/// `{"geometry.<name>": {...}}` layout. The converter always produces a
/// single entry; the map exists because the on-disk format allows several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeometryDocument {
    /// Geometries keyed by their full `geometry.<name>` identifier
    pub geometries: BTreeMap<String, Geometry>,
}

impl GeometryDocument {
    /// Create a document holding one geometry keyed `geometry.<name>`
    #[must_use = "creates the output document"]
    pub fn single(name: &str, geometry: Geometry) -> Self {
        let mut geometries = BTreeMap::new();
        geometries.insert(format!("geometry.{name}"), geometry);
        Self { geometries }
    }

    /// Look up a geometry by its model name (without the `geometry.` prefix)
    #[inline]
    #[must_use = "returns the geometry for the given model name"]
    pub fn geometry(&self, name: &str) -> Option<&Geometry> {
        self.geometries.get(&format!("geometry.{name}"))
    }

    /// Total cube count across all geometries
    #[inline]
    #[must_use = "returns the number of cubes in this document"]
    pub fn cube_count(&self) -> usize {
        self.geometries.values().map(Geometry::cube_count).sum()
    }
}

/// Result of a completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The assembled geometry document
    pub document: GeometryDocument,
    /// Time taken to parse and assemble
    pub latency: Duration,
}

impl ConversionResult {
    /// Write the document as pretty JSON (4-space indent) to `path`.
    ///
    /// Overwrites any existing file without confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = JsonSerializer::new().serialize_document(&self.document)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
