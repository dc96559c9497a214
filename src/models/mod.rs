pub mod entry;
pub mod food;
pub mod meal;
pub mod parse;
pub mod profile;

pub use entry::ConsumedEntry;
pub use food::{FoodRecord, RawCalories, RawFoodRecord};
pub use meal::{CustomMeal, MealComponent};
pub use parse::{parse_calories, parse_measurement, parse_quantity};
pub use profile::{ActivityLevel, BiometricProfile, Sex};
