use yze_odds::{MutantSetup, simulate_mutant};

use super::RunArgs;

pub fn run(attr: u32, skill: u32, gear: u32, args: &RunArgs) -> Result<(), String> {
    let setup = MutantSetup { attr, skill, gear };
    let title = format!("Mutant: Year Zero: {attr} attribute, {skill} skill, {gear} gear");
    super::run_and_print(args, &title, |config| simulate_mutant(config, &setup))
}
