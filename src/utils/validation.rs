use crate::utils::error::{Result, SpokeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_length(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive length in mm".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_length(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be zero or a positive length in mm".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_count(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Total spoke count that must split evenly between the flanges.
pub fn validate_even_count(field_name: &str, value: u32) -> Result<()> {
    validate_positive_count(field_name, value)?;
    if value % 2 != 0 {
        return Err(SpokeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be even to split across both sides".to_string(),
        });
    }
    Ok(())
}
