use yze_dice::PushPolicy;
use yze_odds::{BladeRunnerSetup, simulate_blade_runner};

use super::twilight::rating_label;
use super::{RunArgs, parse_rating};

pub fn run(
    attr: &str,
    skill: &str,
    advantage: Option<bool>,
    even_one: bool,
    args: &RunArgs,
) -> Result<(), String> {
    let setup = BladeRunnerSetup {
        attr: parse_rating(attr)?,
        skill: parse_rating(skill)?,
        advantage,
        policy: if even_one {
            PushPolicy::UpToOneSuccess
        } else {
            PushPolicy::Failures
        },
    };
    let edge = match advantage {
        Some(true) => ", advantage",
        Some(false) => ", disadvantage",
        None => "",
    };
    let title = format!(
        "Blade Runner: attribute {}, skill {}{edge}",
        rating_label(setup.attr),
        rating_label(setup.skill),
    );
    super::run_and_print(args, &title, |config| {
        simulate_blade_runner(config, &setup)
    })
}
