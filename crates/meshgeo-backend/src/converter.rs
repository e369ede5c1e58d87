//! Mesh-to-geometry converter
//!
//! Central dispatch for the conversion pipeline: detect the input format
//! from the file extension, parse with the matching backend, reduce every
//! face to its enclosing cube, and assemble the single-bone geometry
//! document keyed by the input's file stem.

use crate::obj::ObjBackend;
use crate::ply::PlyBackend;
use crate::stl::StlBackend;
use crate::traits::{ConvertOptions, MeshBackend, MeshModel};
use log::debug;
use meshgeo_core::{
    Bone, ConversionResult, Cube, Geometry, GeometryDocument, InputFormat, MeshGeoError, HEAD_BONE,
};
use std::path::Path;
use std::time::Instant;

/// Mesh model converter
///
/// # Examples
///
/// ```rust,no_run
/// use meshgeo_backend::{ConvertOptions, ModelConverter};
///
/// let converter = ModelConverter::with_options(
///     ConvertOptions::default().with_texture_size(128, 128),
/// );
/// let result = converter.convert("model.obj")?;
/// println!("Cubes: {}", result.document.cube_count());
/// # Ok::<(), meshgeo_core::MeshGeoError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModelConverter {
    options: ConvertOptions,
}

impl ModelConverter {
    /// Create a converter with default options
    #[inline]
    #[must_use = "creating a converter that is not used is a waste of resources"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom assembly options
    #[inline]
    #[must_use = "creating a converter that is not used is a waste of resources"]
    pub const fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the assembly options
    #[inline]
    #[must_use = "returns the converter's assembly options"]
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a model file into a geometry document
    ///
    /// The geometry is keyed `geometry.<stem>` after the input file's stem.
    ///
    /// # Errors
    ///
    /// Returns [`MeshGeoError::FormatError`] when the path has no extension
    /// or an unsupported one, and parse errors from the backend otherwise.
    #[must_use = "conversion result contains the assembled document and should be processed"]
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<ConversionResult, MeshGeoError> {
        let path_ref = path.as_ref();

        // Detect format from file extension
        let ext = path_ref
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                MeshGeoError::FormatError(format!(
                    "No file extension found: {}",
                    path_ref.display()
                ))
            })?;

        let format = InputFormat::from_extension(ext).ok_or_else(|| {
            MeshGeoError::FormatError(format!(
                "Unsupported format: {ext}. Supported formats are: OBJ, STL, PLY"
            ))
        })?;

        let stem = path_ref
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                MeshGeoError::FormatError(format!("No file stem found: {}", path_ref.display()))
            })?;

        let start = Instant::now();

        let model = match format {
            InputFormat::Obj => ObjBackend::new().parse_file(path_ref)?,
            InputFormat::Stl => StlBackend::new().parse_file(path_ref)?,
            InputFormat::Ply => PlyBackend::new().parse_file(path_ref)?,
        };

        let document = self.assemble(stem, &model);
        let latency = start.elapsed();

        debug!(
            "converted {} ({}): {} faces -> {} cubes in {latency:?}",
            path_ref.display(),
            format.name(),
            model.face_count(),
            document.cube_count(),
        );

        Ok(ConversionResult { document, latency })
    }

    /// Convert in-memory mesh data of a known format
    ///
    /// `name` takes the place of the file stem in the geometry key.
    ///
    /// # Errors
    ///
    /// Returns parse errors from the backend.
    #[must_use = "conversion result contains the assembled document and should be processed"]
    pub fn convert_bytes(
        &self,
        data: &[u8],
        format: InputFormat,
        name: &str,
    ) -> Result<ConversionResult, MeshGeoError> {
        let start = Instant::now();

        let model = match format {
            InputFormat::Obj => ObjBackend::new().parse_bytes(data)?,
            InputFormat::Stl => StlBackend::new().parse_bytes(data)?,
            InputFormat::Ply => PlyBackend::new().parse_bytes(data)?,
        };

        let document = self.assemble(name, &model);

        Ok(ConversionResult {
            document,
            latency: start.elapsed(),
        })
    }

    /// Assemble parsed faces into a single-bone geometry document
    fn assemble(&self, name: &str, model: &MeshModel) -> GeometryDocument {
        let mut bone = Bone::new(HEAD_BONE);
        bone.cubes
            .extend(model.faces.iter().map(|face| Cube::enclosing(face)));

        let mut geometry = Geometry::new(self.options.texture_width, self.options.texture_height);
        geometry.bones.push(bone);

        GeometryDocument::single(name, geometry)
    }
}
