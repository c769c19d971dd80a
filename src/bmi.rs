//! Body-mass-index calculation and WHO category bands.

use crate::error::ToolError;
use serde::Serialize;

/// Standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band for a BMI value: <18.5, <25, <30, else obese.
    pub fn for_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// BMI value plus its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// `kg / m²`, with height given in centimeters as the widget collects it.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<BmiReading, ToolError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ToolError::invalid_input(
            "weight",
            "must be greater than zero",
        ));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(ToolError::invalid_input(
            "height",
            "must be greater than zero",
        ));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::for_value(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_reading() {
        let reading = body_mass_index(70.0, 175.0).unwrap();
        assert!((reading.bmi - 22.857).abs() < 0.001);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn band_boundaries_belong_to_the_upper_band() {
        assert_eq!(BmiCategory::for_value(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::for_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::for_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::for_value(30.0), BmiCategory::Obese);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(body_mass_index(0.0, 175.0).is_err());
        assert!(body_mass_index(70.0, 0.0).is_err());
        assert!(body_mass_index(-70.0, 175.0).is_err());
        assert!(body_mass_index(f64::NAN, 175.0).is_err());
    }
}
