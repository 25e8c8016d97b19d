//! Unified scene graph produced by the format decoders
//!
//! Every supported CAD format normalizes into the same shape: a
//! [`ParsedScene`] holding layers in encounter order, each layer holding
//! typed [`DrawingObject`]s. The viewer walks `layers[*].objects[*]` keyed
//! on the geometry variant and never needs to know which format the bytes
//! came from.
//!
//! Scenes are plain values owned by the caller; the decoders keep no
//! residual state between parse calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::geometry::{BoundingBox, Point3};

/// Layer id every decoder falls back to when the source names none.
pub const DEFAULT_LAYER_ID: &str = "default";

/// Display name of the fallback layer.
pub const DEFAULT_LAYER_NAME: &str = "Default";

/// The result of parsing one CAD file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedScene {
    /// Layers in encounter order. Never empty — decoders synthesize a
    /// default layer when the source defines none.
    pub layers: Vec<Layer>,
    /// Axis-aligned bounds of all recovered geometry.
    #[serde(rename = "boundingBox")]
    pub bounding_box: BoundingBox,
    /// Unit system of the coordinates, e.g. `"mm"` or `"in"`.
    pub units: String,
    /// Format name plus format-specific counters, or a diagnostic note for
    /// formats that are recognized but not decoded.
    pub metadata: HashMap<String, Value>,
}

impl ParsedScene {
    /// Total number of drawing objects across all layers.
    pub fn object_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.objects.len()).sum()
    }
}

/// A named group of drawing objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Stable key, referenced by [`DrawingObject::layer`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Always `true` at parse time; visibility is a viewer concern.
    pub visible: bool,
    /// Display color as a hex string, when the source carries one.
    pub color: Option<String>,
    /// Objects on this layer, in encounter order.
    pub objects: Vec<DrawingObject>,
}

impl Layer {
    /// Creates an empty, visible layer with no color.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            color: None,
            objects: Vec::new(),
        }
    }

    /// Creates the synthetic fallback layer.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_LAYER_ID, DEFAULT_LAYER_NAME)
    }
}

/// One drawing entity recovered from a CAD file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    /// Synthesized id, unique within a parse call. Uniqueness is the only
    /// contract — ids are not content-derived and differ between parses.
    pub id: String,
    /// The id of the [`Layer`] this object belongs to. Decoders guarantee
    /// this always resolves; unmatched source references are rewritten to
    /// the first layer.
    pub layer: String,
    /// Typed geometry payload.
    pub geometry: ObjectGeometry,
    /// Free-form decoder-specific annotations.
    pub properties: HashMap<String, Value>,
}

impl DrawingObject {
    /// Creates an object with a fresh unique id and empty properties.
    pub fn new(layer: impl Into<String>, geometry: ObjectGeometry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            layer: layer.into(),
            geometry,
            properties: HashMap::new(),
        }
    }

    /// The discriminant of this object's geometry.
    pub fn kind(&self) -> ObjectKind {
        self.geometry.kind()
    }
}

/// Discriminant of [`ObjectGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Line,
    Circle,
    Arc,
    Polyline,
    Text,
    Dimension,
    Block,
}

/// Typed geometry payloads.
///
/// `Dimension` and `Block` are reserved for entity types no decoder emits
/// yet; they stay constructible with empty payloads so the viewer contract
/// does not change when a decoder starts producing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ObjectGeometry {
    Line(LineGeometry),
    Circle(CircleGeometry),
    Arc(ArcGeometry),
    Polyline(MeshGeometry),
    Text(TextGeometry),
    Dimension(DimensionGeometry),
    Block(BlockGeometry),
}

impl ObjectGeometry {
    /// Returns the discriminant for this payload.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Line(_) => ObjectKind::Line,
            Self::Circle(_) => ObjectKind::Circle,
            Self::Arc(_) => ObjectKind::Arc,
            Self::Polyline(_) => ObjectKind::Polyline,
            Self::Text(_) => ObjectKind::Text,
            Self::Dimension(_) => ObjectKind::Dimension,
            Self::Block(_) => ObjectKind::Block,
        }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub start: Point3,
    pub end: Point3,
}

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub center: Point3,
    pub radius: f64,
}

/// A circular arc. Angles are in degrees, counterclockwise from east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: Point3,
    pub radius: f64,
    #[serde(rename = "startAngle")]
    pub start_angle: f64,
    #[serde(rename = "endAngle")]
    pub end_angle: f64,
}

/// A vertex/face mesh. Doubles as the triangle-soup payload for STL and
/// OBJ, where `faces` indexes into `vertices`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub vertices: Vec<Point3>,
    pub faces: Vec<[u32; 3]>,
}

/// A single-line text entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGeometry {
    pub position: Point3,
    pub content: String,
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

/// Reserved payload for dimension entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionGeometry {}

/// Reserved payload for block references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockGeometry {}
