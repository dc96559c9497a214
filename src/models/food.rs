use serde::{Deserialize, Serialize};

use crate::models::parse::parse_calories;

/// A catalog food with its calorie figure per reference unit.
///
/// The reference weight is informational only and never enters a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodRecord {
    #[serde(rename = "Alimento")]
    pub name: String,

    #[serde(rename = "Unidade")]
    pub unit: String,

    #[serde(rename = "Peso")]
    pub reference_weight: String,

    #[serde(rename = "Calorias")]
    pub calories_per_reference_unit: i64,
}

impl FoodRecord {
    pub fn new(name: &str, unit: &str, reference_weight: &str, calories: i64) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            reference_weight: reference_weight.to_string(),
            calories_per_reference_unit: calories,
        }
    }

    /// Calories for `quantity` reference units.
    #[inline]
    pub fn calories_for(&self, quantity: f64) -> f64 {
        self.calories_per_reference_unit as f64 * quantity
    }
}

/// Calorie field as it appears on the wire: usually a string, sometimes a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCalories {
    Text(String),
    Number(f64),
}

impl RawCalories {
    /// Integer calories, truncated toward zero. `None` if there is no leading integer.
    pub fn to_calories(&self) -> Option<i64> {
        match self {
            RawCalories::Text(text) => parse_calories(text),
            RawCalories::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            RawCalories::Number(_) => None,
        }
    }
}

/// A catalog row before its calorie field has been parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFoodRecord {
    #[serde(rename = "Alimento")]
    pub name: String,

    #[serde(rename = "Unidade", default)]
    pub unit: String,

    #[serde(rename = "Peso", default)]
    pub reference_weight: String,

    #[serde(rename = "Calorias")]
    pub calories: RawCalories,
}

impl RawFoodRecord {
    /// Convert into a `FoodRecord`, or `None` if the calorie field is unusable.
    pub fn into_record(self) -> Option<FoodRecord> {
        let calories = self.calories.to_calories()?;
        Some(FoodRecord {
            name: self.name,
            unit: self.unit,
            reference_weight: self.reference_weight,
            calories_per_reference_unit: calories,
        })
    }
}
