use crate::error::{IntakeError, Result};

/// Maps `value` onto [0, 1] relative to `[min, max]`, clamping at both ends.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(IntakeError::InvalidRange { min, max });
    }
    if !value.is_finite() {
        return Err(IntakeError::InvalidAttribute(format!(
            "{value} is not a finite number"
        )));
    }
    Ok(((value - min) / (max - min)).clamp(0.0, 1.0))
}
