//! meshgeo-mesh - mesh format parsers for meshgeo
//!
//! This crate provides parsers for the mesh formats meshgeo converts:
//! - **OBJ** (Wavefront Object) - text-based vertex/face format
//! - **STL** (`STereoLithography`) - triangle mesh format, ASCII or binary
//! - **PLY** (Polygon File Format) - vertex/face element format
//!
//! Every parser produces a format-specific mesh struct exposing the same
//! essentials: the model's faces as ordered vertex groups (ready for
//! bounding-box reduction) plus summary statistics.
//!
//! ## Examples
//!
//! Parse an OBJ model:
//!
//! ```rust
//! use meshgeo_mesh::ObjParser;
//!
//! let mesh = ObjParser::parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")?;
//! assert_eq!(mesh.face_count, 1);
//! assert_eq!(mesh.faces[0].len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Parse an STL model:
//!
//! ```rust,no_run
//! use meshgeo_mesh::StlParser;
//!
//! let mesh = StlParser::parse_file("model.stl")?;
//! println!("Triangles: {}", mesh.triangle_count);
//! println!("Bounding box: {:?} to {:?}", mesh.bbox_min, mesh.bbox_max);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

/// One face as its resolved vertex positions, in declaration order.
pub type FaceVertices = Vec<[f32; 3]>;

// Re-export main types
pub use obj::{ObjMesh, ObjParser};
pub use ply::{PlyMesh, PlyParser};
pub use stl::{StlMesh, StlParser};
