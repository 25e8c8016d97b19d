//! OBJ decoder
//!
//! Line-oriented scan: `v` records accumulate vertices, `f` records
//! accumulate faces. Face references use their numeric prefix before any
//! `/` (texture/normal indices are not kept) and are converted from
//! 1-based to 0-based. Input is assumed triangulated — an N-gon face
//! contributes only its first three references, it is not fan-triangulated.
//! Everything lands in a single mesh object on the fallback layer.

use cadvault_core::geometry::{BoundingBox, Point3};
use cadvault_core::scene::{
    DrawingObject, Layer, MeshGeometry, ObjectGeometry, ParsedScene, DEFAULT_LAYER_ID,
};
use cadvault_core::units::DEFAULT_UNITS;
use serde_json::json;
use tracing::debug;

pub(crate) fn decode(bytes: &[u8]) -> ParsedScene {
    let text = String::from_utf8_lossy(bytes);

    let mut vertices: Vec<Point3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let x = coord(parts.next());
                let y = coord(parts.next());
                let z = coord(parts.next());
                vertices.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let refs: Vec<u32> = parts
                    .filter_map(|token| token.split('/').next())
                    .filter_map(|index| index.parse::<i64>().ok())
                    .filter(|&index| index >= 1)
                    .map(|index| (index - 1) as u32)
                    .collect();
                if refs.len() >= 3 {
                    faces.push([refs[0], refs[1], refs[2]]);
                }
            }
            _ => {}
        }
    }

    debug!(
        "Decoded OBJ buffer: {} vertices, {} faces",
        vertices.len(),
        faces.len()
    );

    let bounding_box = BoundingBox::of_vertices(&vertices);
    let metadata = [
        ("format".to_string(), json!("OBJ")),
        ("vertexCount".to_string(), json!(vertices.len())),
        ("faceCount".to_string(), json!(faces.len())),
    ]
    .into_iter()
    .collect();

    let mut layer = Layer::fallback();
    layer.objects.push(DrawingObject::new(
        DEFAULT_LAYER_ID,
        ObjectGeometry::Polyline(MeshGeometry { vertices, faces }),
    ));

    ParsedScene {
        layers: vec![layer],
        bounding_box,
        units: DEFAULT_UNITS.to_string(),
        metadata,
    }
}

/// Parses a coordinate token; anything missing or unparseable reads as 0.
fn coord(token: Option<&str>) -> f64 {
    token.and_then(|value| value.parse().ok()).unwrap_or(0.0)
}
