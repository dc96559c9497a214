use crate::energy::constants::*;
use crate::models::{ActivityLevel, BiometricProfile, Sex};

/// Derived energy figures for a profile and activity level.
///
/// Always satisfies `tdee == bmr * level.multiplier()` for the inputs it was
/// computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyBudget {
    pub bmr: f64,
    pub tdee: f64,
}

/// Basal Metabolic Rate via Mifflin-St Jeor.
///
/// Formula: `10 * weight + 6.25 * height - 5 * age + offset`, where the offset
/// is +5 for men and -161 for women. Inputs are not validated.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };

    WEIGHT_COEFFICIENT * weight_kg + HEIGHT_COEFFICIENT * height_cm - AGE_COEFFICIENT * age_years
        + offset
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Compute both figures for a profile.
pub fn compute_budget(profile: &BiometricProfile, level: ActivityLevel) -> EnergyBudget {
    let bmr = compute_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );

    EnergyBudget {
        bmr,
        tdee: compute_tdee(bmr, level),
    }
}
