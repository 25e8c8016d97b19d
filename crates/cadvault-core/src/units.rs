//! Drawing unit systems
//!
//! DXF headers carry an `$INSUNITS` code naming the drawing's unit system.
//! Only the handful of codes the viewer can display are mapped; everything
//! else keeps the millimeter default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit label applied when a format carries no unit information.
pub const DEFAULT_UNITS: &str = "mm";

/// Unit system of a drawing's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingUnits {
    /// Millimeters
    Millimeters,
    /// Inches
    Inches,
    /// Feet
    Feet,
    /// Centimeters
    Centimeters,
    /// Meters
    Meters,
}

impl DrawingUnits {
    /// Maps a DXF `$INSUNITS` code to a unit system.
    ///
    /// Returns `None` for codes the viewer does not display (unitless,
    /// miles, microns, ...), which callers treat as "keep the default".
    pub fn from_insunits(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Inches),
            2 => Some(Self::Feet),
            4 => Some(Self::Millimeters),
            5 => Some(Self::Centimeters),
            6 => Some(Self::Meters),
            _ => None,
        }
    }

    /// The short label the scene carries, e.g. `"mm"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Centimeters => "cm",
            Self::Meters => "m",
        }
    }
}

impl Default for DrawingUnits {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl fmt::Display for DrawingUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
