//! # meshgeo-backend - format backends and converter
//!
//! One backend per input format adapts the parsers in `meshgeo-mesh` to a
//! common [`MeshModel`] (the model's faces as ordered vertex groups), and
//! [`ModelConverter`] drives the whole pipeline: detect the format from
//! the file extension, parse with the matching backend, reduce every face
//! to its enclosing cube, and assemble the single-bone geometry document.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use meshgeo_backend::ModelConverter;
//!
//! let converter = ModelConverter::new();
//! let result = converter.convert("model.stl")?;
//! println!("Cubes: {}", result.document.cube_count());
//! result.save_json("model.geo.json")?;
//! # Ok::<(), meshgeo_core::MeshGeoError>(())
//! ```

pub mod converter;
pub mod obj;
pub mod ply;
pub mod stl;
pub mod traits;

// Re-export ConversionResult from meshgeo_core for consistency
pub use meshgeo_core::ConversionResult;

pub use converter::ModelConverter;
pub use obj::ObjBackend;
pub use ply::PlyBackend;
pub use stl::StlBackend;
pub use traits::{
    ConvertOptions, MeshBackend, MeshModel, DEFAULT_TEXTURE_HEIGHT, DEFAULT_TEXTURE_WIDTH,
};
