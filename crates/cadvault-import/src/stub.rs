//! Recognized-but-not-decoded formats
//!
//! STEP, IGES and DWG are accepted by the dispatcher so callers can treat
//! all supported extensions uniformly, but their geometry is not extracted.
//! The stub scene makes that explicit: one empty fallback layer, the
//! placeholder bounding box, and a diagnostic note in the metadata.

use cadvault_core::geometry::BoundingBox;
use cadvault_core::scene::{Layer, ParsedScene};
use cadvault_core::units::DEFAULT_UNITS;
use serde_json::json;
use tracing::debug;

use crate::CadFormat;

pub(crate) fn decode(format: CadFormat, note: &str) -> ParsedScene {
    debug!("Returning placeholder scene for {} input", format.name());

    ParsedScene {
        layers: vec![Layer::fallback()],
        bounding_box: BoundingBox::placeholder(),
        units: DEFAULT_UNITS.to_string(),
        metadata: [
            ("format".to_string(), json!(format.name())),
            ("note".to_string(), json!(note)),
        ]
        .into_iter()
        .collect(),
    }
}
