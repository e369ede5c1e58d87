//! Input format types for mesh conversion
//!
//! This module defines the [`InputFormat`] enum which represents the mesh
//! formats meshgeo can convert.

use serde::{Deserialize, Serialize};

/// Input mesh format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputFormat {
    /// Wavefront OBJ (.obj) - text-based vertex/face format
    Obj,
    /// STL (`STereoLithography`) (.stl) - triangle mesh format, ASCII or binary
    Stl,
    /// PLY (Polygon File Format) (.ply) - vertex/face element format
    Ply,
}

impl InputFormat {
    /// Detect format from file extension
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            "ply" => Some(Self::Ply),
            _ => None,
        }
    }

    /// Get file extensions associated with this format
    #[inline]
    #[must_use = "returns file extensions for this format"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Obj => &["obj"],
            Self::Stl => &["stl"],
            Self::Ply => &["ply"],
        }
    }

    /// Human-readable format name, as shown in diagnostics
    #[inline]
    #[must_use = "returns the display name for this format"]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Obj => "OBJ",
            Self::Stl => "STL",
            Self::Ply => "PLY",
        }
    }
}
