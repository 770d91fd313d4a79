//! CLI frontend for the Year Zero Engine dice odds calculator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RunArgs;

#[derive(Parser)]
#[command(
    name = "yze",
    about = "Year Zero Engine dice odds: throw, push and count, many times over",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mutant: Year Zero odds for a throw and a push
    Mutant {
        /// Attribute dice
        #[arg(short, long, default_value = "1")]
        attr: u32,

        /// Skill dice
        #[arg(short, long, default_value = "0")]
        skill: u32,

        /// Gear dice
        #[arg(short, long, default_value = "0")]
        gear: u32,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Forbidden Lands odds, with an optional artefact die and dwarf pushes
    ForbiddenLands {
        /// Attribute dice
        #[arg(short, long, default_value = "1")]
        attr: u32,

        /// Skill dice
        #[arg(short, long, default_value = "0")]
        skill: u32,

        /// Gear dice
        #[arg(short, long, default_value = "0")]
        gear: u32,

        /// Artefact die, e.g. d8, d10 or d12
        #[arg(long)]
        artefact: Option<String>,

        /// Extra pushes after the first
        #[arg(short, long, default_value = "0")]
        multipush: u32,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Alien odds for base and stress dice
    Alien {
        /// Base dice
        #[arg(short, long, default_value = "1")]
        pool: u32,

        /// Stress dice
        #[arg(short = 'S', long, default_value = "0")]
        stress: u32,

        /// Push a second time
        #[arg(short, long)]
        multipush: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Twilight 2000 odds for rated attribute and skill plus ammo dice
    Twilight {
        /// Attribute rating (A, B, C, D or none)
        #[arg(long, default_value = "")]
        attr: String,

        /// Skill rating (A, B, C, D or none)
        #[arg(long, default_value = "")]
        skill: String,

        /// Ammo dice
        #[arg(long, default_value = "0")]
        ammo: u32,

        /// Also roll a hit location each trial
        #[arg(long)]
        hit_location: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Blade Runner odds, with advantage or disadvantage
    BladeRunner {
        /// Attribute rating (A, B, C, D or none)
        #[arg(long, default_value = "")]
        attr: String,

        /// Skill rating (A, B, C, D or none)
        #[arg(long, default_value = "")]
        skill: String,

        /// Roll an extra die of the higher rating
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Drop the lower-rated die
        #[arg(long)]
        disadvantage: bool,

        /// Let the push reroll dice with a single success too
        #[arg(long)]
        even_one: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Odds of pushing a Mutant roll that is already on the table
    PushOdds {
        /// Attribute faces, e.g. 253
        #[arg(short, long)]
        attr: String,

        /// Skill faces, e.g. 45
        #[arg(short, long, default_value = "0")]
        skill: String,

        /// Gear faces, e.g. 32
        #[arg(short, long, default_value = "0")]
        gear: String,

        #[command(flatten)]
        run: RunArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mutant {
            attr,
            skill,
            gear,
            run,
        } => commands::mutant::run(attr, skill, gear, &run),
        Commands::ForbiddenLands {
            attr,
            skill,
            gear,
            artefact,
            multipush,
            run,
        } => {
            commands::forbidden_lands::run(attr, skill, gear, artefact.as_deref(), multipush, &run)
        }
        Commands::Alien {
            pool,
            stress,
            multipush,
            run,
        } => commands::alien::run(pool, stress, multipush, &run),
        Commands::Twilight {
            attr,
            skill,
            ammo,
            hit_location,
            run,
        } => commands::twilight::run(&attr, &skill, ammo, hit_location, &run),
        Commands::BladeRunner {
            attr,
            skill,
            advantage,
            disadvantage,
            even_one,
            run,
        } => {
            let edge = match (advantage, disadvantage) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::blade_runner::run(&attr, &skill, edge, even_one, &run)
        }
        Commands::PushOdds {
            attr,
            skill,
            gear,
            run,
        } => commands::push_odds::run(&attr, &skill, &gear, &run),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
