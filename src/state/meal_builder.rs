use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, TrackerError};
use crate::models::{CustomMeal, MealComponent};

/// Staging area for a custom meal.
///
/// The name and the component list are independent: renaming keeps the
/// components, and a failed finalize leaves both as they were.
#[derive(Debug, Clone, Default)]
pub struct MealBuilder {
    name: String,
    components: Vec<MealComponent>,
}

impl MealBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the draft name.
    pub fn start_draft(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Append a catalog food to the draft.
    pub fn add_component(&mut self, catalog: &Catalog, food_name: &str, quantity: f64) -> Result<()> {
        let food = catalog.require(food_name)?;
        debug!("Draft '{}': added {} x{}", self.name, food.name, quantity);
        self.components.push(MealComponent::new(food.clone(), quantity));
        Ok(())
    }

    /// Drop the component at `index`.
    pub fn remove_component(&mut self, index: usize) -> Result<MealComponent> {
        if index >= self.components.len() {
            return Err(TrackerError::InvalidInput(format!(
                "No draft component at position {}",
                index + 1
            )));
        }
        Ok(self.components.remove(index))
    }

    /// Turn the draft into a `CustomMeal` and clear it.
    ///
    /// Requires a name that is not blank once trimmed, and at least one
    /// component. The stored name is trimmed.
    pub fn finalize(&mut self) -> Result<CustomMeal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidDraft("meal name is empty".to_string()));
        }
        if self.components.is_empty() {
            return Err(TrackerError::InvalidDraft(format!(
                "meal '{}' has no foods",
                name
            )));
        }

        let meal = CustomMeal::new(name.to_string(), std::mem::take(&mut self.components));
        self.name.clear();
        Ok(meal)
    }

    pub fn draft_name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[MealComponent] {
        &self.components
    }

    /// True if the draft has neither a name nor components.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.components.is_empty()
    }
}
