//! # CADVault Core
//!
//! Core types for the CAD ingestion engine. Provides the unified scene
//! representation every format decoder produces and every downstream
//! consumer (the 3D viewer, the CLI inspector) reads:
//!
//! - **Scene graph**: [`ParsedScene`], [`Layer`], [`DrawingObject`] and the
//!   typed [`ObjectGeometry`] variants
//! - **Geometry**: [`Point3`] and the [`BoundingBox`] utility with its two
//!   empty-input policies
//! - **Colors**: the legacy ACI index to hex display color table
//! - **Units**: drawing-unit codes recovered from CAD headers
//! - **Errors**: [`ImportError`] and the crate-wide [`Result`] alias
//!
//! This crate performs no I/O and holds no state; everything here is plain
//! data created fresh per parse call.

pub mod color;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod units;

pub use color::{aci_to_hex, DEFAULT_ACI};
pub use error::{ImportError, Result};
pub use geometry::{BoundingBox, Point3};
pub use scene::{
    ArcGeometry, BlockGeometry, CircleGeometry, DimensionGeometry, DrawingObject, Layer,
    LineGeometry, MeshGeometry, ObjectGeometry, ObjectKind, ParsedScene, TextGeometry,
    DEFAULT_LAYER_ID, DEFAULT_LAYER_NAME,
};
pub use units::{DrawingUnits, DEFAULT_UNITS};
