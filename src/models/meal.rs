use crate::models::FoodRecord;

/// A food and how many reference units of it go into a meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealComponent {
    pub food: FoodRecord,
    pub quantity: f64,
}

impl MealComponent {
    pub fn new(food: FoodRecord, quantity: f64) -> Self {
        Self { food, quantity }
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        self.food.calories_for(self.quantity)
    }
}

/// A finalized, named bundle of components.
///
/// Fields are private so a meal cannot change after the builder hands it off.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMeal {
    name: String,
    components: Vec<MealComponent>,
}

impl CustomMeal {
    pub(crate) fn new(name: String, components: Vec<MealComponent>) -> Self {
        Self { name, components }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[MealComponent] {
        &self.components
    }

    /// Sum of every component's calories.
    pub fn total_calories(&self) -> f64 {
        self.components.iter().map(MealComponent::calories).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_calories() {
        let meal = CustomMeal::new(
            "Lunch".to_string(),
            vec![
                MealComponent::new(FoodRecord::new("Banana", "unidade", "100g", 89), 2.0),
                MealComponent::new(FoodRecord::new("Rice", "g", "100g", 130), 1.0),
            ],
        );
        assert_eq!(meal.total_calories(), 308.0);
        assert_eq!(meal.components().len(), 2);
    }
}
