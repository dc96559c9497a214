mod ledger;
mod meal_builder;
mod session;

pub use ledger::ConsumptionLedger;
pub use meal_builder::MealBuilder;
pub use session::{BalanceOutlook, Session};
