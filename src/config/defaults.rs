use crate::utils::error::Result;
use crate::utils::validation::{
    validate_even_count, validate_non_negative_length, validate_positive_count,
    validate_positive_length, Validate,
};
use serde::{Deserialize, Serialize};

/// Values offered when a prompt is left blank.
///
/// `None` on a right-side field means "the same as the left side".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelDefaults {
    pub left_hub_diameter: f64,
    pub right_hub_diameter: Option<f64>,
    pub rim_diameter: f64,
    pub total_spokes: u32,
    pub spokes_per_side: u32,
    pub left_dist: f64,
    pub right_dist: Option<f64>,
    pub hole_diameter: f64,
    pub crosses_left: u32,
    pub crosses_right: Option<u32>,
}

impl Default for WheelDefaults {
    fn default() -> Self {
        Self {
            left_hub_diameter: 58.0,
            right_hub_diameter: None,
            rim_diameter: 608.0,
            total_spokes: 36,
            spokes_per_side: 18,
            left_dist: 25.0,
            right_dist: None,
            hole_diameter: 2.7,
            crosses_left: 3,
            crosses_right: None,
        }
    }
}

impl Validate for WheelDefaults {
    fn validate(&self) -> Result<()> {
        validate_positive_length("defaults.left_hub_diameter", self.left_hub_diameter)?;
        if let Some(right) = self.right_hub_diameter {
            validate_positive_length("defaults.right_hub_diameter", right)?;
        }
        validate_positive_length("defaults.rim_diameter", self.rim_diameter)?;
        validate_even_count("defaults.total_spokes", self.total_spokes)?;
        validate_positive_count("defaults.spokes_per_side", self.spokes_per_side)?;
        validate_non_negative_length("defaults.left_dist", self.left_dist)?;
        if let Some(right) = self.right_dist {
            validate_non_negative_length("defaults.right_dist", right)?;
        }
        validate_non_negative_length("defaults.hole_diameter", self.hole_diameter)?;
        Ok(())
    }
}
