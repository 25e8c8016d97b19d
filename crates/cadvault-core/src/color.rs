//! Legacy CAD color index mapping
//!
//! DXF layer and entity color fields carry AutoCAD Color Index (ACI)
//! values. The viewer only needs display colors for the first ten indices;
//! everything else renders white. This is a lookup table, not an algorithm
//! — exhaustive ACI coverage is out of scope.

/// ACI index used when a layer record carries no color field.
pub const DEFAULT_ACI: i32 = 7;

/// Display colors for ACI indices 0 through 9.
const ACI_TABLE: [&str; 10] = [
    "#000000", // 0 black
    "#FF0000", // 1 red
    "#FFFF00", // 2 yellow
    "#00FF00", // 3 green
    "#00FFFF", // 4 cyan
    "#0000FF", // 5 blue
    "#FF00FF", // 6 magenta
    "#FFFFFF", // 7 white
    "#808080", // 8 gray
    "#C0C0C0", // 9 light gray
];

/// Maps an ACI color index to a display hex color.
///
/// Indices outside the table default to white.
pub fn aci_to_hex(index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| ACI_TABLE.get(i).copied())
        .unwrap_or("#FFFFFF")
}
