use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const WEIGHT_COEFFICIENT: f64 = 10.0;

/// kcal per centimetre of height.
pub const HEIGHT_COEFFICIENT: f64 = 6.25;

/// kcal subtracted per year of age.
pub const AGE_COEFFICIENT: f64 = 5.0;

/// Constant term for men.
pub const MALE_OFFSET: f64 = 5.0;

/// Constant term for women.
pub const FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (BMR -> TDEE)
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
pub const LIGHT_MULTIPLIER: f64 = 1.375;
pub const MODERATE_MULTIPLIER: f64 = 1.55;
pub const ACTIVE_MULTIPLIER: f64 = 1.725;
pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.9;

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
        ActivityLevel::Light => LIGHT_MULTIPLIER,
        ActivityLevel::Moderate => MODERATE_MULTIPLIER,
        ActivityLevel::Active => ACTIVE_MULTIPLIER,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULTIPLIER,
    }
}
