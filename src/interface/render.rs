use crate::catalog::Catalog;
use crate::energy::EnergyBudget;
use crate::models::{ActivityLevel, BiometricProfile, ConsumedEntry, CustomMeal};
use crate::state::{BalanceOutlook, MealBuilder, Session};

/// Display BMR and TDEE for a profile.
pub fn display_budget(profile: &BiometricProfile, level: ActivityLevel, budget: &EnergyBudget) {
    println!();
    println!("=== Energy Budget ===");
    println!(
        "Profile: {} kg, {} cm, {} years, {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex.label()
    );
    println!("Activity: {} (x{})", level.label(), level.multiplier());
    println!("BMR:  {:.2} calories", budget.bmr);
    println!("TDEE: {:.2} calories", budget.tdee);
    println!();
}

/// Display budget, consumption and the signed remaining balance.
pub fn display_summary(session: &Session) {
    let budget = session.budget();

    println!();
    println!("--- Summary ---");
    println!("Can consume: {:.2} calories", budget.tdee);
    println!("Consumed:    {:.2} calories", session.total_consumed());
    println!("Remaining:   {:.2} calories", session.remaining());

    match session.outlook() {
        BalanceOutlook::Surplus => println!("At this pace you may gain weight today."),
        BalanceOutlook::Deficit => println!("At this pace you may lose weight today."),
    }
    println!();
}

/// Display the consumed entries in the order they were added.
pub fn display_entries(entries: &[ConsumedEntry]) {
    if entries.is_empty() {
        println!("Consumed: (none)");
        return;
    }

    let max_label_len = label_width(entries);

    println!();
    println!("=== Consumed ({} items) ===", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>8.2} cal",
            i + 1,
            entry.label,
            entry.calories,
            width = max_label_len
        );
    }
    println!();
}

/// Column width for entry labels, in characters rather than bytes.
fn label_width(entries: &[ConsumedEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display the finalized custom meals.
pub fn display_custom_meals(meals: &[CustomMeal]) {
    if meals.is_empty() {
        println!("Custom meals: (none)");
        return;
    }

    println!();
    println!("=== Custom Meals ({} items) ===", meals.len());
    for (i, meal) in meals.iter().enumerate() {
        println!(
            "{:>3}. {} - {:.2} cal ({} foods)",
            i + 1,
            meal.name(),
            meal.total_calories(),
            meal.components().len()
        );
    }
    println!();
}

/// Display the meal currently being built.
pub fn display_draft(draft: &MealBuilder) {
    let name = if draft.draft_name().is_empty() {
        "(unnamed)"
    } else {
        draft.draft_name()
    };

    println!();
    println!("=== Meal being built: {} ===", name);
    if draft.components().is_empty() {
        println!("  (no foods yet)");
    }
    for component in draft.components() {
        println!(
            "  {} - quantity {} ({:.2} cal)",
            component.food.name,
            component.quantity,
            component.calories()
        );
    }
    println!();
}

/// Display every catalog food with its reference unit.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Foods: (none loaded)");
        return;
    }

    println!();
    println!("=== Foods ({} items) ===", catalog.len());
    for food in catalog.records() {
        println!(
            "  {} - {} cal per {} ({})",
            food.name, food.calories_per_reference_unit, food.unit, food.reference_weight
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_width_counts_characters() {
        let entries = vec![
            ConsumedEntry::new("Pão", 150.0),
            ConsumedEntry::new("Feijão", 76.0),
            ConsumedEntry::new("Arroz", 130.0),
        ];
        assert_eq!(label_width(&entries), 6);
        assert_eq!(label_width(&[]), 10);

        let line = format!("{:<width$}|", "Pão", width = label_width(&entries));
        assert_eq!(line.chars().count(), 7);
    }
}
