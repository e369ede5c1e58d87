//! # meshgeo-core - Bedrock geometry document model
//!
//! Core types for converting triangle meshes into the Bedrock
//! block-geometry format: a JSON document mapping `geometry.<name>` keys to
//! a texture size and a list of bones, where each bone holds axis-aligned
//! cubes. meshgeo approximates an arbitrary mesh by reducing every face to
//! its enclosing cube, so the assembled document renders as a blocky union
//! of boxes resembling the source model.
//!
//! This crate holds the output-side pieces shared by every input format:
//!
//! - [`GeometryDocument`], [`Geometry`], [`Bone`], [`Cube`] - the document
//!   model, `serde`-serializable in the field order the game engine expects
//! - [`Cube::enclosing`] - the face-to-cube bounding-box reduction
//! - [`InputFormat`] - supported input formats and extension detection
//! - [`JsonSerializer`] - pretty JSON output with the Bedrock 4-space indent
//! - [`MeshGeoError`] / [`Result`] - the error taxonomy
//!
//! ## Quick start
//!
//! ```rust
//! use meshgeo_core::{Bone, Cube, Geometry, GeometryDocument, JsonSerializer, HEAD_BONE};
//!
//! let mut bone = Bone::new(HEAD_BONE);
//! bone.cubes.push(Cube::enclosing(&[
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! ]));
//!
//! let mut geometry = Geometry::new(64, 64);
//! geometry.bones.push(bone);
//!
//! let document = GeometryDocument::single("example", geometry);
//! let json = JsonSerializer::new().serialize_document(&document)?;
//! assert!(json.contains("geometry.example"));
//! # Ok::<(), meshgeo_core::MeshGeoError>(())
//! ```

pub mod error;
pub mod format;
pub mod geometry;
pub mod serializer;

pub use error::{MeshGeoError, Result};
pub use format::InputFormat;
pub use geometry::{
    Bone, ConversionResult, Cube, Geometry, GeometryDocument, Vertex, HEAD_BONE,
};
pub use serializer::{JsonOptions, JsonSerializer};
