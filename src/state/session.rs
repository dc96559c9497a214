use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogPoll, CatalogStatus, PendingCatalog};
use crate::energy::{compute_budget, EnergyBudget};
use crate::error::{Result, TrackerError};
use crate::models::{ActivityLevel, BiometricProfile, ConsumedEntry, CustomMeal, Sex};
use crate::state::{ConsumptionLedger, MealBuilder};

/// Which way the day is trending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutlook {
    /// Consumed at most the TDEE.
    Deficit,
    /// Consumed more than the TDEE.
    Surplus,
}

/// Everything one user interaction owns: profile, energy budget, catalog,
/// ledger, finished meals and the meal draft.
///
/// Every profile setter recomputes the budget before returning it.
#[derive(Debug, Default)]
pub struct Session {
    profile: BiometricProfile,
    activity_level: ActivityLevel,
    budget: EnergyBudget,
    catalog: Catalog,
    pending: Option<PendingCatalog>,
    catalog_failed: bool,
    ledger: ConsumptionLedger,
    custom_meals: Vec<CustomMeal>,
    builder: MealBuilder,
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self::default();
        session.recompute();
        session
    }

    /// A session whose catalog is already loaded.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut session = Self::new();
        session.catalog = catalog;
        session
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profile and energy budget
    // ─────────────────────────────────────────────────────────────────────

    fn recompute(&mut self) -> EnergyBudget {
        if self.profile.is_degenerate() {
            debug!("Computing budget from degenerate profile {:?}", self.profile);
        }
        self.budget = compute_budget(&self.profile, self.activity_level);
        self.budget
    }

    pub fn set_profile(&mut self, profile: BiometricProfile) -> EnergyBudget {
        self.profile = profile;
        self.recompute()
    }

    pub fn set_weight(&mut self, weight_kg: f64) -> EnergyBudget {
        self.profile.weight_kg = weight_kg;
        self.recompute()
    }

    pub fn set_height(&mut self, height_cm: f64) -> EnergyBudget {
        self.profile.height_cm = height_cm;
        self.recompute()
    }

    pub fn set_age(&mut self, age_years: f64) -> EnergyBudget {
        self.profile.age_years = age_years;
        self.recompute()
    }

    pub fn set_sex(&mut self, sex: Sex) -> EnergyBudget {
        self.profile.sex = sex;
        self.recompute()
    }

    pub fn set_activity_level(&mut self, level: ActivityLevel) -> EnergyBudget {
        self.activity_level = level;
        self.recompute()
    }

    pub fn profile(&self) -> &BiometricProfile {
        &self.profile
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn budget(&self) -> EnergyBudget {
        self.budget
    }

    // ─────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────

    /// Hand the session a catalog that is still loading. Until it resolves
    /// the session behaves as if the catalog were empty.
    pub fn attach_pending(&mut self, pending: PendingCatalog) {
        self.catalog = Catalog::new();
        self.catalog_failed = false;
        self.pending = Some(pending);
    }

    /// Pick up the pending catalog if it has arrived. Never blocks.
    pub fn refresh_catalog(&mut self) -> CatalogStatus {
        if let Some(pending) = self.pending.as_mut() {
            match pending.try_take() {
                CatalogPoll::Pending => {}
                CatalogPoll::Ready(catalog) => {
                    info!("Food catalog ready with {} foods", catalog.len());
                    self.catalog = catalog;
                    self.pending = None;
                }
                CatalogPoll::Closed => {
                    warn!("Food catalog is unavailable; lookups will find nothing");
                    self.catalog_failed = true;
                    self.pending = None;
                }
            }
        }
        self.catalog_status()
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        if self.pending.is_some() {
            CatalogStatus::Loading
        } else if self.catalog_failed {
            CatalogStatus::Unavailable
        } else {
            CatalogStatus::Ready(self.catalog.len())
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ledger
    // ─────────────────────────────────────────────────────────────────────

    pub fn record_food(&mut self, food_name: &str, quantity: f64) -> Result<ConsumedEntry> {
        self.refresh_catalog();
        self.ledger.record_food(&self.catalog, food_name, quantity)
    }

    /// Record the finalized meal at `index` in `custom_meals()`.
    pub fn record_meal(&mut self, index: usize) -> Result<ConsumedEntry> {
        let meal = self.custom_meals.get(index).ok_or_else(|| {
            TrackerError::InvalidInput(format!("No custom meal at position {}", index + 1))
        })?;
        Ok(self.ledger.record_meal(meal))
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<ConsumedEntry> {
        self.ledger.remove_entry(index)
    }

    pub fn ledger(&self) -> &ConsumptionLedger {
        &self.ledger
    }

    pub fn total_consumed(&self) -> f64 {
        self.ledger.total_consumed()
    }

    /// TDEE minus everything consumed; negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.ledger.remaining(self.budget.tdee)
    }

    pub fn outlook(&self) -> BalanceOutlook {
        if self.total_consumed() > self.budget.tdee {
            BalanceOutlook::Surplus
        } else {
            BalanceOutlook::Deficit
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Custom meals
    // ─────────────────────────────────────────────────────────────────────

    pub fn start_draft(&mut self, name: &str) {
        self.builder.start_draft(name);
    }

    pub fn add_to_draft(&mut self, food_name: &str, quantity: f64) -> Result<()> {
        self.refresh_catalog();
        self.builder.add_component(&self.catalog, food_name, quantity)
    }

    pub fn remove_from_draft(&mut self, index: usize) -> Result<()> {
        self.builder.remove_component(index).map(|_| ())
    }

    /// Finalize the draft and append it to `custom_meals()`.
    pub fn finalize_draft(&mut self) -> Result<&CustomMeal> {
        let meal = self.builder.finalize()?;
        info!("Created custom meal '{}' ({:.0} cal)", meal.name(), meal.total_calories());
        self.custom_meals.push(meal);
        Ok(&self.custom_meals[self.custom_meals.len() - 1])
    }

    pub fn draft(&self) -> &MealBuilder {
        &self.builder
    }

    pub fn custom_meals(&self) -> &[CustomMeal] {
        &self.custom_meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodRecord;
    use tokio::sync::oneshot;

    fn sample_session() -> Session {
        Session::with_catalog(Catalog::from_records(vec![
            FoodRecord::new("Banana", "unidade", "100g", 89),
            FoodRecord::new("Rice", "g", "100g", 130),
        ]))
    }

    #[test]
    fn test_new_session_budget_from_blank_form() {
        let session = Session::new();
        assert_float_absolute_eq!(session.budget().bmr, 5.0, 1e-9);
        assert_float_absolute_eq!(session.budget().tdee, 6.0, 1e-9);
    }

    #[test]
    fn test_setters_recompute() {
        let mut session = Session::new();
        session.set_weight(70.0);
        session.set_height(175.0);
        session.set_age(30.0);
        let budget = session.set_activity_level(ActivityLevel::Moderate);
        assert_float_absolute_eq!(budget.bmr, 1648.75, 1e-9);
        assert_float_absolute_eq!(budget.tdee, 2555.5625, 1e-9);

        let budget = session.set_sex(Sex::Female);
        assert_float_absolute_eq!(budget.bmr, 1482.75, 1e-9);
        assert_eq!(session.budget(), budget);
    }

    #[test]
    fn test_remaining_and_outlook() {
        let mut session = sample_session();
        session.set_profile(BiometricProfile::new(70.0, 175.0, 30.0, Sex::Male));
        assert_eq!(session.outlook(), BalanceOutlook::Deficit);

        session.record_food("Banana", 30.0).unwrap();
        assert_float_absolute_eq!(session.remaining(), 1978.5 - 2670.0, 1e-9);
        assert_eq!(session.outlook(), BalanceOutlook::Surplus);
    }

    #[test]
    fn test_meal_flow() {
        let mut session = sample_session();
        session.start_draft("Lunch");
        session.add_to_draft("Banana", 2.0).unwrap();
        session.add_to_draft("Rice", 1.0).unwrap();
        session.finalize_draft().unwrap();

        assert!(session.draft().is_empty());
        let entry = session.record_meal(0).unwrap();
        assert_eq!(entry, ConsumedEntry::new("Lunch", 308.0));
        assert!(session.record_meal(1).is_err());
    }

    #[test]
    fn test_duplicate_meal_names_stay_separate() {
        let mut session = sample_session();
        session.start_draft("Snack");
        session.add_to_draft("Banana", 1.0).unwrap();
        session.finalize_draft().unwrap();
        session.start_draft("Snack");
        session.add_to_draft("Rice", 1.0).unwrap();
        session.finalize_draft().unwrap();

        assert_eq!(session.custom_meals().len(), 2);
        assert_eq!(session.record_meal(1).unwrap().calories, 130.0);
        assert_eq!(session.record_meal(0).unwrap().calories, 89.0);
    }

    #[test]
    fn test_pending_catalog_reads_empty_until_resolved() {
        let mut session = Session::new();
        let catalog = Catalog::from_records(vec![FoodRecord::new("Banana", "unidade", "100g", 89)]);
        session.attach_pending(PendingCatalog::resolved(catalog));

        assert_eq!(session.catalog_status(), CatalogStatus::Loading);
        assert!(session.catalog().is_empty());

        assert_eq!(session.refresh_catalog(), CatalogStatus::Ready(1));
        assert_eq!(session.record_food("Banana", 1.0).unwrap().calories, 89.0);
    }

    #[tokio::test]
    async fn test_lookups_fail_while_loading_and_after_failed_fetch() {
        let mut session = Session::new();
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        session.attach_pending(PendingCatalog::from_future(async move {
            let _ = gate_rx.await;
            Err(TrackerError::InvalidInput("connection refused".to_string()))
        }));

        assert!(matches!(
            session.record_food("Banana", 1.0),
            Err(TrackerError::FoodNotFound(_))
        ));
        session.start_draft("Lunch");
        assert!(matches!(
            session.add_to_draft("Banana", 1.0),
            Err(TrackerError::FoodNotFound(_))
        ));
        assert_eq!(session.catalog_status(), CatalogStatus::Loading);
        assert!(session.ledger().entries().is_empty());
        assert!(session.draft().components().is_empty());

        gate_tx.send(()).unwrap();
        while session.refresh_catalog() == CatalogStatus::Loading {
            tokio::task::yield_now().await;
        }

        assert_eq!(session.catalog_status(), CatalogStatus::Unavailable);
        assert!(session.catalog().is_empty());
        assert!(matches!(
            session.record_food("Banana", 1.0),
            Err(TrackerError::FoodNotFound(_))
        ));
        assert_eq!(session.refresh_catalog(), CatalogStatus::Unavailable);
    }
}
