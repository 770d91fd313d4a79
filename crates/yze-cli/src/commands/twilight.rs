use yze_odds::{TwilightSetup, simulate_twilight};

use super::{RunArgs, parse_rating};

pub fn run(
    attr: &str,
    skill: &str,
    ammo: u32,
    hit_location: bool,
    args: &RunArgs,
) -> Result<(), String> {
    let setup = TwilightSetup {
        attr: parse_rating(attr)?,
        skill: parse_rating(skill)?,
        ammo,
        hit_location,
    };
    let title = format!(
        "Twilight 2000: attribute {}, skill {}, {ammo} ammo",
        rating_label(setup.attr),
        rating_label(setup.skill),
    );
    super::run_and_print(args, &title, |config| simulate_twilight(config, &setup))
}

pub(super) fn rating_label(rating: Option<yze_dice::Rating>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| r.to_string())
}
