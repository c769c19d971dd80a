//! Unit conversion tables for the converter tool.
//!
//! Length, weight, and volume are linear: every unit carries a multiplier
//! to the category's base unit (meter, kilogram, liter). Temperature is
//! piecewise affine and pivots through Celsius instead.

use crate::error::ToolError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Conversion category, one per dropdown entry in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("inch", 0.0254),
    ("foot", 0.3048),
    ("yard", 0.9144),
    ("mile", 1609.34),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("pound", 0.453592),
    ("ounce", 0.0283495),
    ("ton", 1000.0),
];

const VOLUME_UNITS: &[(&str, f64)] = &[
    ("liter", 1.0),
    ("milliliter", 0.001),
    ("gallon", 3.78541),
    ("quart", 0.946353),
    ("pint", 0.473176),
    ("cup", 0.236588),
];

const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

impl Category {
    /// Unit names accepted by this category, in table order. The widget
    /// uses this to populate its from/to dropdowns.
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self {
            Category::Temperature => TEMPERATURE_UNITS.to_vec(),
            _ => self
                .factor_table()
                .iter()
                .map(|(name, _)| *name)
                .collect(),
        }
    }

    fn factor_table(&self) -> &'static [(&'static str, f64)] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Volume => VOLUME_UNITS,
            Category::Temperature => &[],
        }
    }

    fn factor(&self, unit: &str) -> Result<f64, ToolError> {
        self.factor_table()
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ToolError::UnknownUnit {
                category: *self,
                unit: unit.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            "volume" => Ok(Category::Volume),
            other => Err(ToolError::UnknownCategory(other.to_string())),
        }
    }
}

/// A value tagged with its category and unit, as the form collects it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitQuantity {
    pub value: f64,
    pub category: Category,
    pub unit: String,
}

impl UnitQuantity {
    /// Express this quantity in another unit of the same category.
    pub fn convert_to(&self, to: &str) -> Result<f64, ToolError> {
        convert(self.category, &self.unit, to, self.value)
    }
}

/// Convert `value` from one unit to another within a category.
pub fn convert(
    category: Category,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ToolError> {
    if category == Category::Temperature {
        let celsius = to_celsius(from, value)?;
        return from_celsius(to, celsius);
    }
    let base = value * category.factor(from)?;
    Ok(base / category.factor(to)?)
}

fn to_celsius(unit: &str, value: f64) -> Result<f64, ToolError> {
    match unit {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - 273.15),
        other => Err(ToolError::UnknownUnit {
            category: Category::Temperature,
            unit: other.to_string(),
        }),
    }
}

fn from_celsius(unit: &str, celsius: f64) -> Result<f64, ToolError> {
    match unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        other => Err(ToolError::UnknownUnit {
            category: Category::Temperature,
            unit: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mile_to_meter() {
        let meters = convert(Category::Length, "mile", "meter", 1.0).unwrap();
        assert!((meters - 1609.34).abs() < 1e-9);
    }

    #[test]
    fn freezing_point() {
        let f = convert(Category::Temperature, "celsius", "fahrenheit", 0.0).unwrap();
        assert_eq!(f, 32.0);
        let k = convert(Category::Temperature, "celsius", "kelvin", 0.0).unwrap();
        assert_eq!(k, 273.15);
    }

    #[test]
    fn fahrenheit_to_kelvin_pivots_through_celsius() {
        let k = convert(Category::Temperature, "fahrenheit", "kelvin", 212.0).unwrap();
        assert!((k - 373.15).abs() < 1e-9);
    }

    #[test]
    fn identity_conversion() {
        let v = convert(Category::Weight, "pound", "pound", 2.5).unwrap();
        assert_eq!(v, 2.5);
    }

    #[test]
    fn linear_categories_round_trip() {
        for category in [Category::Length, Category::Weight, Category::Volume] {
            let names = category.unit_names();
            for from in &names {
                for to in &names {
                    let there = convert(category, from, to, 12.5).unwrap();
                    let back = convert(category, to, from, there).unwrap();
                    assert!(
                        (back - 12.5).abs() < 1e-9,
                        "{category}: {from} -> {to} -> {from} gave {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_unit_is_reported_with_its_category() {
        let err = convert(Category::Length, "meter", "furlong", 1.0).unwrap_err();
        assert_eq!(
            err,
            ToolError::UnknownUnit {
                category: Category::Length,
                unit: "furlong".to_string()
            }
        );
        assert!(convert(Category::Temperature, "rankine", "celsius", 1.0).is_err());
    }

    #[test]
    fn quantity_converts_itself() {
        let qty = UnitQuantity {
            value: 1.0,
            category: Category::Length,
            unit: "mile".to_string(),
        };
        assert!((qty.convert_to("meter").unwrap() - 1609.34).abs() < 1e-9);
        assert!(qty.convert_to("stone").is_err());
    }

    #[test]
    fn category_parses_from_widget_strings() {
        assert_eq!("volume".parse::<Category>().unwrap(), Category::Volume);
        let err = "speed".parse::<Category>().unwrap_err();
        assert_eq!(err, ToolError::UnknownCategory("speed".to_string()));
    }

    #[test]
    fn every_category_lists_its_units() {
        assert_eq!(Category::Length.unit_names().len(), 8);
        assert_eq!(Category::Weight.unit_names().len(), 5);
        assert_eq!(Category::Volume.unit_names().len(), 6);
        assert_eq!(
            Category::Temperature.unit_names(),
            vec!["celsius", "fahrenheit", "kelvin"]
        );
    }
}
