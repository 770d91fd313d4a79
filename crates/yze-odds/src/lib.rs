//! Monte-Carlo odds for Year Zero Engine dice pools.
//!
//! Runs many independent trials of a pool configuration, each with its own
//! freshly built pool, and tallies how often each number of successes or
//! botches comes up. Also answers the reverse question: given faces already
//! on the table, what does pushing them give?

/// Configuration for odds runs.
pub mod config;
/// Error types for the odds crate.
pub mod error;
/// Reverse mode: push odds for an existing roll.
pub mod push_odds;
/// Labelled tallies collected over a run.
pub mod report;
/// Forward simulations for each game variant.
pub mod simulate;
/// Frequency tables.
pub mod tally;

/// Re-export of [`config::OddsConfig`].
pub use config::OddsConfig;
/// Re-exports of [`error::OddsError`] and [`error::OddsResult`].
pub use error::{OddsError, OddsResult};
/// Re-exports of [`push_odds::PushOddsSetup`], [`push_odds::parse_faces`] and [`push_odds::simulate_push_odds`].
pub use push_odds::{PushOddsSetup, parse_faces, simulate_push_odds};
/// Re-exports of [`report::OddsReport`] and [`report::OddsRow`].
pub use report::{OddsReport, OddsRow};
/// Re-exports of the per-variant setups and simulations.
pub use simulate::{
    AlienSetup, BladeRunnerSetup, ForbiddenLandsSetup, MutantSetup, TwilightSetup,
    simulate_alien, simulate_blade_runner, simulate_forbidden_lands, simulate_mutant,
    simulate_twilight,
};
/// Re-export of [`tally::Tally`].
pub use tally::Tally;
