//! PLY (Polygon File Format) parser module
//!
//! PLY declares its vertex and face counts in a header, then lists vertex
//! and face elements. Supports ASCII and binary variants.

pub mod parser;

pub use parser::{PlyMesh, PlyParser};
