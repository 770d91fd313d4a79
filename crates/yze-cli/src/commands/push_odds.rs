use yze_odds::{PushOddsSetup, parse_faces, simulate_push_odds};

use super::RunArgs;

pub fn run(attr: &str, skill: &str, gear: &str, args: &RunArgs) -> Result<(), String> {
    let setup = PushOddsSetup {
        attr: parse_faces("attr", attr).map_err(|e| e.to_string())?,
        skill: parse_faces("skill", skill).map_err(|e| e.to_string())?,
        gear: parse_faces("gear", gear).map_err(|e| e.to_string())?,
    };
    let title = format!(
        "Pushing attribute {:?}, skill {:?}, gear {:?}",
        setup.attr, setup.skill, setup.gear
    );
    super::run_and_print(args, &title, |config| simulate_push_odds(config, &setup))
}
