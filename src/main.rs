use clap::Parser;
use tracing::{info, warn};

use calorie_tracker_rs::catalog::{
    fetch_catalog, load_catalog, Catalog, CatalogSource, CatalogStatus, PendingCatalog,
};
use calorie_tracker_rs::cli::{Cli, Command};
use calorie_tracker_rs::energy::compute_budget;
use calorie_tracker_rs::error::{Result, TrackerError};
use calorie_tracker_rs::interface::{
    display_budget, display_catalog, display_custom_meals, display_draft, display_entries,
    display_summary, prompt_action, prompt_activity_level, prompt_food_name, prompt_measurement,
    prompt_pick, prompt_quantity, prompt_sex, prompt_text, prompt_yes_no, Action,
};
use calorie_tracker_rs::logging;
use calorie_tracker_rs::models::BiometricProfile;
use calorie_tracker_rs::state::Session;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.log_level());

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Track => cmd_track(&cli.catalog),
        Command::Budget {
            weight,
            height,
            age,
            sex,
            activity,
        } => {
            let profile = BiometricProfile::new(weight, height, age, sex);
            if profile.is_degenerate() {
                warn!("Zero or negative measurements; the budget will not be meaningful");
            }
            display_budget(&profile, activity, &compute_budget(&profile, activity));
            Ok(())
        }
        Command::Foods => cmd_foods(&cli.catalog).await,
    }
}

/// List the catalog, waiting for it if it is remote.
async fn cmd_foods(location: &str) -> Result<()> {
    let catalog = match CatalogSource::parse(location) {
        CatalogSource::File(path) => load_catalog(path)?,
        CatalogSource::Remote(url) => fetch_catalog(&reqwest::Client::new(), &url).await?,
    };

    display_catalog(&catalog);
    Ok(())
}

/// Interactive tracking session.
fn cmd_track(location: &str) -> Result<()> {
    let mut session = match CatalogSource::parse(location) {
        CatalogSource::File(path) => match load_catalog(&path) {
            Ok(catalog) => Session::with_catalog(catalog),
            Err(e) => {
                eprintln!("Could not load food catalog {}: {}", path.display(), e);
                eprintln!("Continuing without foods.");
                Session::with_catalog(Catalog::new())
            }
        },
        CatalogSource::Remote(url) => {
            info!("Loading food catalog from {}", url);
            let mut session = Session::new();
            session.attach_pending(PendingCatalog::spawn_fetch(url));
            session
        }
    };

    loop {
        match session.refresh_catalog() {
            CatalogStatus::Loading => println!("(food catalog is still loading)"),
            CatalogStatus::Unavailable => println!("(food catalog is unavailable)"),
            CatalogStatus::Ready(_) => {}
        }

        let action = prompt_action()?;
        if action == Action::Quit {
            break;
        }

        if let Err(e) = handle_action(&mut session, action) {
            match e {
                TrackerError::FoodNotFound(_)
                | TrackerError::InvalidDraft(_)
                | TrackerError::InvalidInput(_) => println!("{}", e),
                other => return Err(other),
            }
        }
    }

    display_entries(session.ledger().entries());
    display_summary(&session);
    Ok(())
}

fn handle_action(session: &mut Session, action: Action) -> Result<()> {
    match action {
        Action::EditProfile => {
            let profile = *session.profile();
            session.set_weight(prompt_measurement("Weight (kg)", profile.weight_kg)?);
            session.set_height(prompt_measurement("Height (cm)", profile.height_cm)?);
            session.set_age(prompt_measurement("Age", profile.age_years)?);
            session.set_sex(prompt_sex(profile.sex)?);
            display_budget(session.profile(), session.activity_level(), &session.budget());
        }
        Action::SetActivity => {
            let level = prompt_activity_level(session.activity_level())?;
            session.set_activity_level(level);
            display_budget(session.profile(), session.activity_level(), &session.budget());
        }
        Action::AddFood => {
            if let Some(name) = prompt_food_name(session.catalog())? {
                let quantity = prompt_quantity()?;
                let entry = session.record_food(&name, quantity)?;
                println!("Added {} ({:.2} cal)", entry.label, entry.calories);
                display_summary(session);
            }
        }
        Action::NameDraft => {
            let name = prompt_text("Meal name", session.draft().draft_name())?;
            session.start_draft(&name);
            display_draft(session.draft());
        }
        Action::AddToDraft => {
            if let Some(name) = prompt_food_name(session.catalog())? {
                let quantity = prompt_quantity()?;
                session.add_to_draft(&name, quantity)?;
                display_draft(session.draft());
            }
        }
        Action::RemoveFromDraft => {
            let items: Vec<String> = session
                .draft()
                .components()
                .iter()
                .map(|c| format!("{} x{}", c.food.name, c.quantity))
                .collect();
            if let Some(index) = prompt_pick("Remove which food?", &items)? {
                session.remove_from_draft(index)?;
            }
            display_draft(session.draft());
        }
        Action::FinalizeDraft => {
            let meal = session.finalize_draft()?;
            println!(
                "Created '{}' ({:.2} cal)",
                meal.name(),
                meal.total_calories()
            );
        }
        Action::ConsumeMeal => {
            display_custom_meals(session.custom_meals());
            let items: Vec<String> = session
                .custom_meals()
                .iter()
                .map(|m| format!("{} ({:.0} cal)", m.name(), m.total_calories()))
                .collect();
            if let Some(index) = prompt_pick("Eat which meal?", &items)? {
                let entry = session.record_meal(index)?;
                println!("Added {} ({:.2} cal)", entry.label, entry.calories);
                display_summary(session);
            }
        }
        Action::RemoveEntry => {
            let items: Vec<String> = session
                .ledger()
                .entries()
                .iter()
                .map(|e| format!("{} ({:.2} cal)", e.label, e.calories))
                .collect();
            if let Some(index) = prompt_pick("Remove which entry?", &items)? {
                if prompt_yes_no("Remove this entry?", false)? {
                    let entry = session.remove_entry(index)?;
                    println!("Removed {}", entry.label);
                }
            }
        }
        Action::ShowSummary => {
            display_budget(session.profile(), session.activity_level(), &session.budget());
            display_entries(session.ledger().entries());
            display_custom_meals(session.custom_meals());
            display_draft(session.draft());
            display_summary(session);
        }
        Action::ListFoods => display_catalog(session.catalog()),
        Action::Quit => {}
    }

    Ok(())
}
