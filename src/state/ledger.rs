use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, TrackerError};
use crate::models::{ConsumedEntry, CustomMeal};

/// Append-ordered record of everything consumed this session.
///
/// Totals are always derived from the entries, so `total_consumed()` equals
/// the sum of `entries()` after any sequence of operations.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionLedger {
    entries: Vec<ConsumedEntry>,
}

impl ConsumptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `quantity` reference units of a catalog food.
    ///
    /// Fails with `FoodNotFound` and records nothing if the name is absent.
    pub fn record_food(
        &mut self,
        catalog: &Catalog,
        food_name: &str,
        quantity: f64,
    ) -> Result<ConsumedEntry> {
        let food = catalog.require(food_name)?;
        let entry = ConsumedEntry::new(food.name.clone(), food.calories_for(quantity));
        debug!("Recorded {} x{} = {} cal", food.name, quantity, entry.calories);

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Record a whole custom meal as a single entry.
    pub fn record_meal(&mut self, meal: &CustomMeal) -> ConsumedEntry {
        let entry = ConsumedEntry::new(meal.name(), meal.total_calories());
        debug!("Recorded meal {} = {} cal", meal.name(), entry.calories);

        self.entries.push(entry.clone());
        entry
    }

    /// Remove the entry at `index`.
    pub fn remove_entry(&mut self, index: usize) -> Result<ConsumedEntry> {
        if index >= self.entries.len() {
            return Err(TrackerError::InvalidInput(format!(
                "No ledger entry at position {}",
                index + 1
            )));
        }
        Ok(self.entries.remove(index))
    }

    pub fn total_consumed(&self) -> f64 {
        self.entries.iter().map(|e| e.calories).sum()
    }

    /// `tdee - total_consumed()`. Negative means over budget.
    pub fn remaining(&self, tdee: f64) -> f64 {
        tdee - self.total_consumed()
    }

    pub fn entries(&self) -> &[ConsumedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodRecord;

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            FoodRecord::new("Banana", "unidade", "100g", 89),
            FoodRecord::new("Rice", "g", "100g", 130),
        ])
    }

    fn assert_sum_invariant(ledger: &ConsumptionLedger) {
        let sum: f64 = ledger.entries().iter().map(|e| e.calories).sum();
        assert_eq!(ledger.total_consumed(), sum);
    }

    #[test]
    fn test_record_food() {
        let catalog = sample_catalog();
        let mut ledger = ConsumptionLedger::new();

        let entry = ledger.record_food(&catalog, "Banana", 2.0).unwrap();
        assert_eq!(entry, ConsumedEntry::new("Banana", 178.0));
        assert_eq!(ledger.entries(), &[ConsumedEntry::new("Banana", 178.0)]);
        assert_eq!(ledger.total_consumed(), 178.0);
    }

    #[test]
    fn test_record_missing_food_is_noop() {
        let catalog = sample_catalog();
        let mut ledger = ConsumptionLedger::new();
        ledger.record_food(&catalog, "Rice", 1.0).unwrap();

        let result = ledger.record_food(&catalog, "Pizza", 3.0);
        assert!(matches!(result, Err(TrackerError::FoodNotFound(_))));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_consumed(), 130.0);
    }

    #[test]
    fn test_empty_catalog_is_not_found() {
        let mut ledger = ConsumptionLedger::new();
        let result = ledger.record_food(&Catalog::new(), "Banana", 1.0);
        assert!(matches!(result, Err(TrackerError::FoodNotFound(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_degenerate_quantities_propagate() {
        let catalog = sample_catalog();
        let mut ledger = ConsumptionLedger::new();

        assert_eq!(ledger.record_food(&catalog, "Banana", 0.0).unwrap().calories, 0.0);
        assert_eq!(ledger.record_food(&catalog, "Banana", -1.0).unwrap().calories, -89.0);
        assert_eq!(ledger.record_food(&catalog, "Rice", 0.5).unwrap().calories, 65.0);
        assert_eq!(ledger.total_consumed(), -24.0);
        assert_sum_invariant(&ledger);
    }

    #[test]
    fn test_remaining_is_signed() {
        let catalog = sample_catalog();
        let mut ledger = ConsumptionLedger::new();
        assert_eq!(ledger.remaining(200.0), 200.0);

        ledger.record_food(&catalog, "Banana", 3.0).unwrap();
        assert_eq!(ledger.remaining(200.0), -67.0);
    }

    #[test]
    fn test_remove_entry_keeps_invariant() {
        let catalog = sample_catalog();
        let mut ledger = ConsumptionLedger::new();
        ledger.record_food(&catalog, "Banana", 1.0).unwrap();
        ledger.record_food(&catalog, "Rice", 2.0).unwrap();

        let removed = ledger.remove_entry(0).unwrap();
        assert_eq!(removed.label, "Banana");
        assert_eq!(ledger.total_consumed(), 260.0);
        assert_sum_invariant(&ledger);

        assert!(matches!(
            ledger.remove_entry(5),
            Err(TrackerError::InvalidInput(_))
        ));
        assert_eq!(ledger.len(), 1);
    }
}
