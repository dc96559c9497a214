pub mod calculations;
pub mod constants;

pub use calculations::{compute_bmr, compute_budget, compute_tdee, EnergyBudget};
pub use constants::*;
