use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Lacing geometry of one hub flange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideGeometry {
    /// Pitch circle diameter of the flange, mm.
    pub hub_diameter: f64,
    pub spokes: u32,
    pub crosses: u32,
    /// Axial distance from the flange to the wheel's symmetry plane, mm.
    pub flange_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub left: SideGeometry,
    pub right: SideGeometry,
    /// Effective rim diameter (ERD), mm.
    pub rim_diameter: f64,
    /// Spoke hole diameter in the hub flange, mm.
    pub hole_diameter: f64,
}

impl WheelGeometry {
    pub fn side(&self, side: Side) -> &SideGeometry {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpokeLengths {
    pub left: f64,
    pub right: f64,
}
