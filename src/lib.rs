#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod energy;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use catalog::Catalog;
pub use error::{Result, TrackerError};
pub use models::{ActivityLevel, BiometricProfile, ConsumedEntry, CustomMeal, FoodRecord, Sex};
pub use state::Session;
