//! DXF decoder
//!
//! Walks the flat group-code stream without modeling sections: layers and
//! entities are both introduced by a `0`-coded record whose value names the
//! record type, and every field of a record is found by scanning a bounded
//! window of pairs behind the record start. Unrecognized record types emit
//! nothing; genuinely malformed text simply produces no records, so this
//! decoder cannot fail.

use cadvault_core::color::{aci_to_hex, DEFAULT_ACI};
use cadvault_core::geometry::{BoundingBox, Point3};
use cadvault_core::scene::{
    ArcGeometry, CircleGeometry, DrawingObject, Layer, LineGeometry, ObjectGeometry, ParsedScene,
    TextGeometry, DEFAULT_LAYER_ID,
};
use cadvault_core::units::DrawingUnits;
use serde_json::json;
use tracing::debug;

use crate::group_code::{tokenize, GroupCode};

/// How many pairs behind a record start a field lookup may scan.
///
/// The window is a compatibility bound, not a principled one: entities with
/// more fields than this can lose trailing fields to the cutoff.
const FIELD_LOOKAHEAD: usize = 20;

pub(crate) fn decode(bytes: &[u8]) -> ParsedScene {
    let text = String::from_utf8_lossy(bytes);
    let pairs = tokenize(&text);

    let mut layers: Vec<Layer> = Vec::new();
    let mut objects: Vec<DrawingObject> = Vec::new();
    let mut units = DrawingUnits::default();

    for (i, pair) in pairs.iter().enumerate() {
        if pair.code == "9" && pair.value == "$INSUNITS" {
            if let Some(next) = pairs.get(i + 1) {
                if next.code == "70" {
                    if let Some(parsed) = next
                        .value
                        .parse()
                        .ok()
                        .and_then(DrawingUnits::from_insunits)
                    {
                        units = parsed;
                    }
                }
            }
            continue;
        }
        if pair.code != "0" {
            continue;
        }
        match pair.value {
            "LAYER" => {
                let name = field(&pairs, i, "2").unwrap_or(DEFAULT_LAYER_ID);
                let aci = field(&pairs, i, "62")
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(DEFAULT_ACI);
                let mut layer = Layer::new(name, name);
                layer.color = Some(aci_to_hex(aci).to_string());
                layers.push(layer);
            }
            "LINE" => {
                let layer = field(&pairs, i, "8").unwrap_or(DEFAULT_LAYER_ID);
                let geometry = ObjectGeometry::Line(LineGeometry {
                    start: Point3::xy(
                        float_field(&pairs, i, "10", 0.0),
                        float_field(&pairs, i, "20", 0.0),
                    ),
                    end: Point3::xy(
                        float_field(&pairs, i, "11", 0.0),
                        float_field(&pairs, i, "21", 0.0),
                    ),
                });
                objects.push(DrawingObject::new(layer, geometry));
            }
            "CIRCLE" => {
                let layer = field(&pairs, i, "8").unwrap_or(DEFAULT_LAYER_ID);
                let geometry = ObjectGeometry::Circle(CircleGeometry {
                    center: Point3::xy(
                        float_field(&pairs, i, "10", 0.0),
                        float_field(&pairs, i, "20", 0.0),
                    ),
                    radius: float_field(&pairs, i, "40", 1.0),
                });
                objects.push(DrawingObject::new(layer, geometry));
            }
            "ARC" => {
                let layer = field(&pairs, i, "8").unwrap_or(DEFAULT_LAYER_ID);
                let geometry = ObjectGeometry::Arc(ArcGeometry {
                    center: Point3::xy(
                        float_field(&pairs, i, "10", 0.0),
                        float_field(&pairs, i, "20", 0.0),
                    ),
                    radius: float_field(&pairs, i, "40", 1.0),
                    start_angle: float_field(&pairs, i, "50", 0.0),
                    end_angle: float_field(&pairs, i, "51", 360.0),
                });
                objects.push(DrawingObject::new(layer, geometry));
            }
            "TEXT" => {
                let layer = field(&pairs, i, "8").unwrap_or(DEFAULT_LAYER_ID);
                let geometry = ObjectGeometry::Text(TextGeometry {
                    position: Point3::xy(
                        float_field(&pairs, i, "10", 0.0),
                        float_field(&pairs, i, "20", 0.0),
                    ),
                    content: field(&pairs, i, "1").unwrap_or_default().to_string(),
                    height: float_field(&pairs, i, "40", 1.0),
                    rotation: float_field(&pairs, i, "50", 0.0),
                });
                objects.push(DrawingObject::new(layer, geometry));
            }
            _ => {}
        }
    }

    if layers.is_empty() {
        layers.push(Layer::fallback());
    }

    let entity_count = objects.len();
    for mut object in objects {
        let index = layers
            .iter()
            .position(|layer| layer.id == object.layer)
            .unwrap_or(0);
        // Unmatched layer references are rewritten so they never dangle
        object.layer = layers[index].id.clone();
        layers[index].objects.push(object);
    }

    let bounding_box = BoundingBox::of_objects(layers.iter().flat_map(|layer| &layer.objects));

    debug!(
        "Decoded DXF buffer: {} entities across {} layers",
        entity_count,
        layers.len()
    );

    ParsedScene {
        layers,
        bounding_box,
        units: units.label().to_string(),
        metadata: [
            ("format".to_string(), json!("DXF")),
            ("entityCount".to_string(), json!(entity_count)),
        ]
        .into_iter()
        .collect(),
    }
}

/// Finds the first field with the given code within the lookahead window
/// behind the record start at `start`.
fn field<'a>(pairs: &[GroupCode<'a>], start: usize, code: &str) -> Option<&'a str> {
    pairs
        .iter()
        .skip(start + 1)
        .take(FIELD_LOOKAHEAD)
        .find(|pair| pair.code == code)
        .map(|pair| pair.value)
}

fn float_field(pairs: &[GroupCode<'_>], start: usize, code: &str, default: f64) -> f64 {
    field(pairs, start, code)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
