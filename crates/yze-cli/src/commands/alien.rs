use yze_odds::{AlienSetup, simulate_alien};

use super::RunArgs;

pub fn run(pool: u32, stress: u32, multipush: bool, args: &RunArgs) -> Result<(), String> {
    let setup = AlienSetup {
        pool,
        stress,
        multipush,
    };
    let title = format!("Alien: {pool} base, {stress} stress");
    super::run_and_print(args, &title, |config| simulate_alien(config, &setup))
}
