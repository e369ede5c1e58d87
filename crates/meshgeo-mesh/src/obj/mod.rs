//! OBJ (Wavefront Object) format parser module
//!
//! OBJ is a text-based 3D model format listing vertex positions and faces
//! that reference them by 1-based index.

pub mod parser;

pub use parser::{ObjMesh, ObjParser};
