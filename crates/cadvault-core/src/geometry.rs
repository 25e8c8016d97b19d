//! Geometric primitives for the scene graph
//!
//! Provides the 3D point type shared by every decoder and the axis-aligned
//! bounding box the viewer uses to frame its initial camera.

use serde::{Deserialize, Serialize};

use crate::scene::{DrawingObject, ObjectGeometry};

/// Represents a 3D point with X, Y and Z coordinates.
///
/// Formats that only carry 2D coordinates (DXF LINE/CIRCLE fields) set Z
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point on the Z=0 plane from 2D coordinates.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Axis-aligned bounding box over all geometry in a scene.
///
/// Whenever at least one coordinate was observed, `min` is componentwise
/// less than or equal to `max`. The empty-input behavior depends on which
/// constructor produced the box — see [`BoundingBox::of_objects`] and
/// [`BoundingBox::of_vertices`]. The two policies intentionally differ;
/// unifying them would change what existing viewers receive for empty
/// drawings versus empty meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox {
    /// The placeholder footprint used for empty drawings and for formats
    /// whose geometry is not extracted.
    pub fn placeholder() -> Self {
        Self {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(100.0, 100.0, 100.0),
        }
    }

    /// Computes the box over a set of drawing objects, extracting the
    /// representative points of each geometry payload: line endpoints,
    /// circle and arc centers, text insertion points, mesh vertices.
    ///
    /// Empty input yields the [`placeholder`](Self::placeholder) footprint
    /// rather than degenerate bounds.
    pub fn of_objects<'a>(objects: impl IntoIterator<Item = &'a DrawingObject>) -> Self {
        let mut sweep = Sweep::new();
        for object in objects {
            match &object.geometry {
                ObjectGeometry::Line(line) => {
                    sweep.observe(line.start);
                    sweep.observe(line.end);
                }
                ObjectGeometry::Circle(circle) => sweep.observe(circle.center),
                ObjectGeometry::Arc(arc) => sweep.observe(arc.center),
                ObjectGeometry::Polyline(mesh) => {
                    for vertex in &mesh.vertices {
                        sweep.observe(*vertex);
                    }
                }
                ObjectGeometry::Text(text) => sweep.observe(text.position),
                ObjectGeometry::Dimension(_) | ObjectGeometry::Block(_) => {}
            }
        }
        if sweep.is_empty() {
            return Self::placeholder();
        }
        sweep.into_box()
    }

    /// Computes the box over a flat vertex list (the OBJ/STL path).
    ///
    /// Unlike [`of_objects`](Self::of_objects), empty input does not
    /// synthesize a default footprint: the box keeps its infinity
    /// accumulators, collapsed componentwise to whatever finite values were
    /// seen.
    pub fn of_vertices(vertices: &[Point3]) -> Self {
        let mut sweep = Sweep::new();
        for vertex in vertices {
            sweep.observe(*vertex);
        }
        sweep.into_box()
    }
}

/// Componentwise min/max accumulator.
struct Sweep {
    min: Point3,
    max: Point3,
    seen: bool,
}

impl Sweep {
    fn new() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            seen: false,
        }
    }

    fn observe(&mut self, p: Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
        self.seen = true;
    }

    fn is_empty(&self) -> bool {
        !self.seen
    }

    fn into_box(self) -> BoundingBox {
        BoundingBox {
            min: self.min,
            max: self.max,
        }
    }
}
