use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::energy::constants::activity_multiplier;

/// Biological sex, which selects the Mifflin-St Jeor offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Self-reported activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Fixed TDEE multiplier for this level.
    #[inline]
    pub fn multiplier(self) -> f64 {
        activity_multiplier(self)
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

/// Anthropometric inputs for the energy budget.
///
/// No field is validated: zero or negative values flow straight into the
/// formula. The default is the blank form (all zeros, male).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiometricProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
}

impl BiometricProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// True if any measurement is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.weight_kg <= 0.0 || self.height_cm <= 0.0 || self.age_years <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_blank_form() {
        let profile = BiometricProfile::default();
        assert_eq!(profile.weight_kg, 0.0);
        assert_eq!(profile.sex, Sex::Male);
        assert!(profile.is_degenerate());
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(!BiometricProfile::new(70.0, 175.0, 30.0, Sex::Male).is_degenerate());
        assert!(BiometricProfile::new(70.0, -1.0, 30.0, Sex::Female).is_degenerate());
        assert!(BiometricProfile::new(70.0, 175.0, 0.0, Sex::Female).is_degenerate());
    }

    #[test]
    fn test_activity_level_serde_names() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"veryActive\"");
        let sex: Sex = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(sex, Sex::Female);
    }
}
