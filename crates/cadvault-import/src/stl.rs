//! STL decoder
//!
//! STL ships in two physical encodings behind one extension. Binary files
//! carry an 80-byte free-form header, a little-endian `u32` triangle count,
//! then 50-byte triangle records. Detection is a size heuristic: the buffer
//! is binary exactly when its length equals the length that count implies.
//! A text file whose size happens to match the formula therefore decodes as
//! binary garbage — an accepted false negative of the heuristic, not a case
//! that is sniffed around.
//!
//! Both paths produce the same triangle soup: vertices appended three at a
//! time, each face indexing the triple it appended.

use cadvault_core::geometry::{BoundingBox, Point3};
use cadvault_core::scene::{
    DrawingObject, Layer, MeshGeometry, ObjectGeometry, ParsedScene, DEFAULT_LAYER_ID,
};
use cadvault_core::units::DEFAULT_UNITS;
use serde_json::json;
use tracing::debug;

const HEADER_LEN: usize = 80;
const COUNT_LEN: usize = 4;
const RECORD_LEN: usize = 50;
const NORMAL_LEN: usize = 12;

pub(crate) fn decode(bytes: &[u8]) -> ParsedScene {
    let (vertices, faces, solid_name) = match binary_triangle_count(bytes) {
        Some(count) => {
            debug!("Decoding binary STL with {} declared triangles", count);
            let (vertices, faces) = decode_binary(bytes, count);
            (vertices, faces, None)
        }
        None => decode_ascii(&String::from_utf8_lossy(bytes)),
    };

    debug!(
        "Decoded STL buffer: {} triangles, {} vertices",
        faces.len(),
        vertices.len()
    );

    let bounding_box = BoundingBox::of_vertices(&vertices);
    let metadata = [
        ("format".to_string(), json!("STL")),
        ("triangleCount".to_string(), json!(faces.len())),
        ("vertexCount".to_string(), json!(vertices.len())),
    ]
    .into_iter()
    .collect();

    let mut mesh = DrawingObject::new(
        DEFAULT_LAYER_ID,
        ObjectGeometry::Polyline(MeshGeometry { vertices, faces }),
    );
    if let Some(name) = solid_name {
        mesh.properties.insert("name".to_string(), json!(name));
    }

    let mut layer = Layer::fallback();
    layer.objects.push(mesh);

    ParsedScene {
        layers: vec![layer],
        bounding_box,
        units: DEFAULT_UNITS.to_string(),
        metadata,
    }
}

/// Returns the declared triangle count when the buffer length matches the
/// binary layout exactly.
fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    let count_bytes = bytes.get(HEADER_LEN..HEADER_LEN + COUNT_LEN)?;
    let count = u32::from_le_bytes(count_bytes.try_into().ok()?) as usize;
    let expected = HEADER_LEN + COUNT_LEN + count.checked_mul(RECORD_LEN)?;
    (expected == bytes.len()).then_some(count)
}

fn decode_binary(bytes: &[u8], count: usize) -> (Vec<Point3>, Vec<[u32; 3]>) {
    let mut vertices = Vec::with_capacity(count * 3);
    let mut faces = Vec::with_capacity(count);

    for triangle in 0..count {
        let record = HEADER_LEN + COUNT_LEN + triangle * RECORD_LEN;
        // Normal vector skipped; the trailing 2-byte attribute count
        // carries no geometry either
        let Some(corners) = read_corners(bytes, record + NORMAL_LEN) else {
            // Truncated record: stop with the triangles read so far
            break;
        };
        let base = vertices.len() as u32;
        vertices.extend_from_slice(&corners);
        faces.push([base, base + 1, base + 2]);
    }

    (vertices, faces)
}

fn read_corners(bytes: &[u8], offset: usize) -> Option<[Point3; 3]> {
    let mut corners = [Point3::new(0.0, 0.0, 0.0); 3];
    for (v, corner) in corners.iter_mut().enumerate() {
        let at = offset + v * 12;
        *corner = Point3::new(
            read_f32(bytes, at)? as f64,
            read_f32(bytes, at + 4)? as f64,
            read_f32(bytes, at + 8)? as f64,
        );
    }
    Some(corners)
}

fn read_f32(bytes: &[u8], offset: usize) -> Option<f32> {
    let slice = bytes.get(offset..offset + 4)?;
    Some(f32::from_le_bytes(slice.try_into().ok()?))
}

/// Scans text lines for `facet normal` records, collecting the three
/// `vertex` lines of each. Facets with fewer than three vertex lines
/// before `endfacet` (or end of input) are dropped — no partial triangles.
fn decode_ascii(text: &str) -> (Vec<Point3>, Vec<[u32; 3]>, Option<String>) {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let solid_name = lines
        .first()
        .and_then(|line| line.strip_prefix("solid"))
        .map(|rest| rest.trim().to_string())
        .filter(|name| !name.is_empty());

    let mut vertices: Vec<Point3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with("facet normal") {
            i += 1;
            continue;
        }
        let mut corners: Vec<Point3> = Vec::with_capacity(3);
        let mut j = i + 1;
        while j < lines.len() && corners.len() < 3 && !lines[j].starts_with("endfacet") {
            if let Some(rest) = lines[j].strip_prefix("vertex") {
                corners.push(parse_vertex(rest));
            }
            j += 1;
        }
        if corners.len() == 3 {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&corners);
            faces.push([base, base + 1, base + 2]);
        }
        i = j.max(i + 1);
    }

    (vertices, faces, solid_name)
}

fn parse_vertex(rest: &str) -> Point3 {
    let mut fields = rest.split_whitespace();
    let mut next = || {
        fields
            .next()
            .and_then(|value| value.parse().ok())
            .unwrap_or(0.0)
    };
    Point3::new(next(), next(), next())
}
