pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_activity_level, prompt_food_name, prompt_measurement, prompt_pick,
    prompt_quantity, prompt_sex, prompt_text, prompt_yes_no, suggest_foods, Action,
};
pub use render::{
    display_budget, display_catalog, display_custom_meals, display_draft, display_entries,
    display_summary,
};
