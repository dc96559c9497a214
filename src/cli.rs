use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Sex};

/// Calorie tracker: daily energy budget and food intake for one session.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Food catalog: a JSON or CSV file, or an http(s) URL.
    #[arg(short, long, default_value = "foods.json", global = true)]
    pub catalog: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Track food intake against your daily budget interactively.
    Track,

    /// Print BMR and TDEE for the given measurements.
    Budget {
        /// Body weight in kilograms.
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in centimetres.
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Age in years.
        #[arg(long, allow_negative_numbers = true)]
        age: f64,

        #[arg(long, value_enum, default_value_t = Sex::Male)]
        sex: Sex,

        #[arg(long, value_enum, default_value_t = ActivityLevel::Sedentary)]
        activity: ActivityLevel,
    },

    /// List the foods in the catalog.
    Foods,
}

impl Cli {
    /// Log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_track() {
        let cli = Cli::parse_from(["calorie_tracker"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Track));
        assert_eq!(cli.catalog, "foods.json");
    }

    #[test]
    fn test_budget_args() {
        let cli = Cli::parse_from([
            "calorie_tracker",
            "budget",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "30",
            "--activity",
            "very-active",
        ]);

        match cli.command {
            Some(Command::Budget {
                weight,
                sex,
                activity,
                ..
            }) => {
                assert_eq!(weight, 70.0);
                assert_eq!(sex, Sex::Male);
                assert_eq!(activity, ActivityLevel::VeryActive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_remote_catalog_flag() {
        let cli = Cli::parse_from(["calorie_tracker", "foods", "--catalog", "https://x.test/f.json"]);
        assert_eq!(cli.catalog, "https://x.test/f.json");
        assert!(matches!(cli.command, Some(Command::Foods)));
    }

    #[test]
    fn test_verbose_selects_debug_level() {
        assert_eq!(Cli::parse_from(["calorie_tracker"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["calorie_tracker", "foods", "-v"]).log_level(), "debug");
    }
}
