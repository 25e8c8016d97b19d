//! # CADVault Import
//!
//! The format-dispatch and per-format decoder engine. A raw byte buffer
//! plus a filename goes in; a unified [`ParsedScene`] comes out, whatever
//! vendor format the bytes were in.
//!
//! ## Supported formats
//!
//! - **DXF** — layer table and LINE/CIRCLE/ARC/TEXT entities from the
//!   group-code stream
//! - **OBJ** — line-oriented vertex/face mesh
//! - **STL** — binary and ASCII, split by the size heuristic
//! - **STEP / IGES / DWG** — recognized, returned as placeholder scenes
//!   with a diagnostic note
//!
//! ## Error policy
//!
//! An extension outside the allow-list is the only hard failure
//! ([`ImportError::UnsupportedFormat`]). Malformed content inside a
//! supported format never errors: decoders degrade to the emptiest valid
//! scene for their format, so a single bad upload cannot crash a
//! long-running ingestion worker.
//!
//! ## Usage
//!
//! ```rust
//! use cadvault_import::CadImporter;
//!
//! let importer = CadImporter::new();
//! let scene = importer.parse(b"solid empty\nendsolid empty\n", "part.stl")?;
//! assert_eq!(scene.layers.len(), 1);
//! # Ok::<(), cadvault_core::ImportError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

pub mod group_code;

mod dxf;
mod obj;
mod stl;
mod stub;

pub use cadvault_core::{
    ArcGeometry, BlockGeometry, BoundingBox, CircleGeometry, DimensionGeometry, DrawingObject,
    ImportError, Layer, LineGeometry, MeshGeometry, ObjectGeometry, ObjectKind, ParsedScene,
    Point3, Result, TextGeometry,
};

/// The closed set of formats the dispatcher routes.
///
/// Adding a format means adding a variant, and the compiler walks every
/// match that must learn about it — there is no string-switch fallthrough
/// to miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadFormat {
    /// DWG (proprietary binary drawing)
    Dwg,
    /// DXF (Drawing Exchange Format)
    Dxf,
    /// STEP (ISO 10303)
    Step,
    /// IGES
    Iges,
    /// Wavefront OBJ
    Obj,
    /// STL (stereolithography triangle mesh)
    Stl,
}

impl CadFormat {
    /// Resolves a lowercased extension (including the leading dot) to a
    /// format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".dwg" => Some(Self::Dwg),
            ".dxf" => Some(Self::Dxf),
            ".step" | ".stp" => Some(Self::Step),
            ".iges" | ".igs" => Some(Self::Iges),
            ".obj" => Some(Self::Obj),
            ".stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// The complete extension allow-list.
    pub fn extensions() -> &'static [&'static str] {
        &[
            ".dwg", ".dxf", ".step", ".stp", ".iges", ".igs", ".obj", ".stl",
        ]
    }

    /// The format name carried in scene metadata.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dwg => "DWG",
            Self::Dxf => "DXF",
            Self::Step => "STEP",
            Self::Iges => "IGES",
            Self::Obj => "OBJ",
            Self::Stl => "STL",
        }
    }
}

/// Entry point for all CAD decoding.
///
/// Stateless and freely constructible — concurrent `parse` calls share
/// nothing. Routing is by filename extension only; the importer never
/// inspects file contents to guess a format.
#[derive(Debug, Default, Clone, Copy)]
pub struct CadImporter;

impl CadImporter {
    /// Creates an importer.
    pub fn new() -> Self {
        Self
    }

    /// Whether the filename's extension is in the supported set.
    ///
    /// Case-insensitive: `.DXF` and `.dxf` are the same format.
    pub fn is_supported_format(&self, filename: &str) -> bool {
        extension_of(filename)
            .as_deref()
            .and_then(CadFormat::from_extension)
            .is_some()
    }

    /// Decodes a complete file buffer into a scene.
    ///
    /// The filename is used solely for extension sniffing. Fails only for
    /// extensions outside the allow-list; malformed content inside a
    /// supported format yields that format's emptiest valid scene.
    pub fn parse(&self, bytes: &[u8], filename: &str) -> Result<ParsedScene> {
        let extension = extension_of(filename).unwrap_or_default();
        let Some(format) = CadFormat::from_extension(&extension) else {
            debug!("Rejecting {}: extension {:?} not supported", filename, extension);
            return Err(ImportError::UnsupportedFormat { extension });
        };

        debug!(
            "Parsing {} ({} bytes) as {}",
            filename,
            bytes.len(),
            format.name()
        );

        let scene = match format {
            CadFormat::Dxf => dxf::decode(bytes),
            CadFormat::Obj => obj::decode(bytes),
            CadFormat::Stl => stl::decode(bytes),
            CadFormat::Dwg => stub::decode(
                format,
                "DWG is a proprietary binary format; decoding requires a specialized library",
            ),
            CadFormat::Step => stub::decode(
                format,
                "STEP geometry requires a dedicated kernel; no geometry was extracted",
            ),
            CadFormat::Iges => stub::decode(
                format,
                "IGES geometry requires a dedicated kernel; no geometry was extracted",
            ),
        };
        Ok(scene)
    }

    /// Convenience wrapper: reads `path` and parses it by its filename.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedScene> {
        let bytes = fs::read(path).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        self.parse(&bytes, filename)
    }
}

/// The substring from (and including) the last `.` of `filename`,
/// lowercased. `None` when there is no dot.
fn extension_of(filename: &str) -> Option<String> {
    filename
        .rfind('.')
        .map(|dot| filename[dot..].to_lowercase())
}
