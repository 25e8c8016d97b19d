//! # CADVault
//!
//! CAD file ingestion engine for the CADVault platform. Takes the raw
//! bytes of an uploaded vendor file (DXF, OBJ, STL; STEP/IGES/DWG as
//! acknowledged placeholders) and normalizes them into a unified scene
//! graph the 3D viewer renders.
//!
//! ## Architecture
//!
//! CADVault is organized as a workspace with multiple crates:
//!
//! 1. **cadvault-core** - Scene graph types, geometry utilities, errors
//! 2. **cadvault-import** - Format dispatch and the per-format decoders
//! 3. **cadvault** - Integration layer: logging setup and the `cadvault`
//!    CLI for inspecting files the way the ingestion pipeline sees them
//!
//! ## Error policy
//!
//! Rejecting an unsupported extension is the only hard failure. Malformed
//! content inside a supported format degrades to the emptiest valid scene
//! for that format — an ingestion worker must survive any single bad
//! upload.

pub use cadvault_core::{
    aci_to_hex, ArcGeometry, BlockGeometry, BoundingBox, CircleGeometry, DimensionGeometry,
    DrawingObject, DrawingUnits, ImportError, Layer, LineGeometry, MeshGeometry, ObjectGeometry,
    ObjectKind, ParsedScene, Point3, Result, TextGeometry,
};
pub use cadvault_import::{group_code, CadFormat, CadImporter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, `RUST_LOG` environment
/// variable support, and INFO as the default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
