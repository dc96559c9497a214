use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{parse_measurement, parse_quantity, ActivityLevel, Sex};

/// Minimum similarity for a catalog name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions shown at once.
const MAX_SUGGESTIONS: usize = 5;

/// Top-level menu choices for the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditProfile,
    SetActivity,
    AddFood,
    NameDraft,
    AddToDraft,
    RemoveFromDraft,
    FinalizeDraft,
    ConsumeMeal,
    RemoveEntry,
    ShowSummary,
    ListFoods,
    Quit,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::EditProfile,
        Action::SetActivity,
        Action::AddFood,
        Action::NameDraft,
        Action::AddToDraft,
        Action::RemoveFromDraft,
        Action::FinalizeDraft,
        Action::ConsumeMeal,
        Action::RemoveEntry,
        Action::ShowSummary,
        Action::ListFoods,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::EditProfile => "Edit personal information",
            Action::SetActivity => "Set activity level",
            Action::AddFood => "Add a food",
            Action::NameDraft => "Name the meal being built",
            Action::AddToDraft => "Add a food to the meal being built",
            Action::RemoveFromDraft => "Remove a food from the meal being built",
            Action::FinalizeDraft => "Create custom meal",
            Action::ConsumeMeal => "Eat a custom meal",
            Action::RemoveEntry => "Remove a consumed entry",
            Action::ShowSummary => "Show summary",
            Action::ListFoods => "List foods",
            Action::Quit => "Quit",
        }
    }
}

/// Catalog names similar to `input`, best match first.
pub fn suggest_foods<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    let mut candidates: Vec<(&str, f64)> = catalog
        .names()
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.dedup_by(|a, b| a.0 == b.0);

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name)
        .collect()
}

/// Prompt for the main menu action.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL[selection])
}

/// Prompt for a food name, resolving typos against the catalog.
///
/// Returns `None` if the user gives up. An exact name is returned as typed;
/// otherwise similar names are offered.
pub fn prompt_food_name(catalog: &Catalog) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Food name (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if catalog.find(input).is_some() {
            return Ok(Some(input.to_string()));
        }

        let candidates = suggest_foods(catalog, input);

        if candidates.is_empty() {
            // Hand the raw name back so the caller reports it as not found.
            return Ok(Some(input.to_string()));
        }

        if candidates.len() == 1 {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(candidates[0].to_string()));
            }
            continue;
        }

        let mut options: Vec<&str> = candidates.clone();
        options.push("None of these");

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len() {
            return Ok(Some(candidates[selection].to_string()));
        }
    }
}

/// Prompt for a quantity against the food's reference unit.
pub fn prompt_quantity() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Quantity")
        .default("1".to_string())
        .interact_text()?;

    parse_quantity(&input)
}

/// Prompt for one biometric measurement, defaulting to the current value.
pub fn prompt_measurement(label: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .default(current.to_string())
        .interact_text()?;

    parse_measurement(&input)
}

/// Prompt for sex.
pub fn prompt_sex(current: Sex) -> Result<Sex> {
    let labels: Vec<&str> = Sex::ALL.iter().map(|s| s.label()).collect();
    let default = Sex::ALL.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Sex::ALL[selection])
}

/// Prompt for activity level.
pub fn prompt_activity_level(current: ActivityLevel) -> Result<ActivityLevel> {
    let labels: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} (x{})", level.label(), level.multiplier()))
        .collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for free text, allowing an empty answer.
pub fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Let the user pick one item from a list. `None` if the list is empty or
/// the user picks "Cancel".
pub fn prompt_pick(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<&str> = items.iter().map(String::as_str).collect();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < items.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
