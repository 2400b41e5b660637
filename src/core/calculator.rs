//! Closed-form spoke length formula.
//!
//! Each side is solved independently: the law of cosines gives the spoke
//! length projected onto the wheel plane, then Pythagoras adds the axial
//! offset of the flange and half the hub hole is taken off.

use crate::domain::model::{Side, SideGeometry, SpokeLengths, WheelGeometry};
use crate::utils::error::{Result, SpokeError};
use std::f64::consts::PI;

/// Computes `(left, right)` spoke lengths in mm from flat parameters.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    left_hub_diameter: f64,
    right_hub_diameter: f64,
    rim_diameter: f64,
    hole_diameter: f64,
    spokes_left: u32,
    spokes_right: u32,
    crosses_left: u32,
    crosses_right: u32,
    left_dist: f64,
    right_dist: f64,
) -> Result<SpokeLengths> {
    let geometry = WheelGeometry {
        left: SideGeometry {
            hub_diameter: left_hub_diameter,
            spokes: spokes_left,
            crosses: crosses_left,
            flange_distance: left_dist,
        },
        right: SideGeometry {
            hub_diameter: right_hub_diameter,
            spokes: spokes_right,
            crosses: crosses_right,
            flange_distance: right_dist,
        },
        rim_diameter,
        hole_diameter,
    };
    geometry.spoke_lengths()
}

impl WheelGeometry {
    pub fn spoke_lengths(&self) -> Result<SpokeLengths> {
        ensure_finite("rim_diameter", self.rim_diameter)?;
        ensure_finite("hole_diameter", self.hole_diameter)?;

        let left = side_length(Side::Left, &self.left, self.rim_diameter, self.hole_diameter)?;
        let right = side_length(Side::Right, &self.right, self.rim_diameter, self.hole_diameter)?;

        tracing::debug!(left, right, "Computed spoke lengths for {:?}", self);

        Ok(SpokeLengths { left, right })
    }
}

/// Angle in radians between a spoke's hub hole and its rim hole, seen along the axle.
pub fn lacing_angle(side: Side, crosses: u32, spokes: u32) -> Result<f64> {
    if spokes == 0 {
        return Err(SpokeError::ZeroSpokes { side });
    }
    Ok(2.0 * PI * f64::from(crosses) / f64::from(spokes))
}

/// Spoke length on a flat wheel (no dish), by the law of cosines.
pub fn planar_length(side: Side, hub_radius: f64, rim_radius: f64, theta: f64) -> Result<f64> {
    let radicand = hub_radius * hub_radius + rim_radius * rim_radius
        - 2.0 * rim_radius * hub_radius * theta.cos();
    checked_sqrt(side, radicand)
}

/// Spoke length for one side: planar length lifted by the flange distance, minus half the hole.
pub fn side_length(
    side: Side,
    geometry: &SideGeometry,
    rim_diameter: f64,
    hole_diameter: f64,
) -> Result<f64> {
    ensure_finite(&format!("{}_hub_diameter", side), geometry.hub_diameter)?;
    ensure_finite(&format!("{}_dist", side), geometry.flange_distance)?;

    let rim_r = rim_diameter / 2.0;
    let hub_r = geometry.hub_diameter / 2.0;
    let hole_r = hole_diameter / 2.0;

    let theta = lacing_angle(side, geometry.crosses, geometry.spokes)?;
    let planar = planar_length(side, hub_r, rim_r, theta)?;
    let dist = geometry.flange_distance;
    let length = checked_sqrt(side, dist * dist + planar * planar)? - hole_r;

    ensure_finite(&format!("{}_length", side), length)?;
    Ok(length)
}

/// Square root that refuses negative or NaN operands instead of returning NaN.
pub fn checked_sqrt(side: Side, radicand: f64) -> Result<f64> {
    if radicand.is_nan() {
        return Err(SpokeError::NonFinite {
            field: format!("{}_radicand", side),
            value: radicand,
        });
    }
    if radicand < 0.0 {
        return Err(SpokeError::NegativeRoot { side, radicand });
    }
    Ok(radicand.sqrt())
}

fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpokeError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}
