pub mod alien;
pub mod blade_runner;
pub mod forbidden_lands;
pub mod mutant;
pub mod push_odds;
pub mod twilight;

use clap::Args;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use yze_dice::Rating;
use yze_odds::{OddsConfig, OddsReport, OddsResult};

/// Options shared by every odds command.
#[derive(Args)]
pub struct RunArgs {
    /// Number of trials
    #[arg(short, long, default_value = "100000")]
    pub trials: u64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    fn config(&self) -> OddsConfig {
        let config = OddsConfig::default().with_trials(self.trials);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Run a simulation with the command's options and print its report.
fn run_and_print(
    args: &RunArgs,
    title: &str,
    simulate: impl FnOnce(&OddsConfig) -> OddsResult<OddsReport>,
) -> Result<(), String> {
    let config = args.config();
    tracing::debug!(title, trials = config.trials, seed = ?config.seed, "running odds command");
    let report = simulate(&config).map_err(|e| e.to_string())?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        print_report(title, &report);
    }
    Ok(())
}

/// Parse an optional rating letter, with a readable error.
fn parse_rating(input: &str) -> Result<Option<Rating>, String> {
    Rating::parse_optional(input).map_err(|e| e.to_string())
}

fn print_report(title: &str, report: &OddsReport) {
    println!(
        "  {} {}",
        title.bold(),
        format!("({} trials, seed={})", report.trials, report.seed).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "At least one", "Mean", "Distribution"]);

    for row in &report.rows {
        let distribution: Vec<String> = row
            .tally
            .distribution()
            .map(|(count, _)| format!("{count}: {}", pct(row.tally.percent(count, report.trials))))
            .collect();
        let distribution = if distribution.is_empty() {
            "-".to_string()
        } else {
            distribution.join(", ")
        };
        table.add_row(vec![
            row.label.clone(),
            pct(row.tally.at_least_one_percent(report.trials)),
            format!("{:.2}", row.tally.mean(report.trials)),
            distribution,
        ]);
    }

    println!("{table}");

    if !report.categories.is_empty() {
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Hit location", "Odds"]);
        for category in report.categories.keys() {
            table.add_row(vec![
                category.clone(),
                pct(report.category_percent(category)),
            ]);
        }
        println!("{table}");
    }
    println!();
}

fn pct(value: f64) -> String {
    format!("{value:.2} %")
}
