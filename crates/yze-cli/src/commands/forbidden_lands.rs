use yze_dice::DieSize;
use yze_odds::{ForbiddenLandsSetup, simulate_forbidden_lands};

use super::RunArgs;

pub fn run(
    attr: u32,
    skill: u32,
    gear: u32,
    artefact: Option<&str>,
    multipushes: u32,
    args: &RunArgs,
) -> Result<(), String> {
    let artefact = artefact.map(parse_artefact).transpose()?;
    let setup = ForbiddenLandsSetup {
        attr,
        skill,
        gear,
        artefact: artefact.map(DieSize::sides),
        multipushes,
    };
    let mut title = format!("Forbidden Lands: {attr} attribute, {skill} skill, {gear} gear");
    if let Some(size) = artefact {
        title.push_str(&format!(", {size} artefact"));
    }
    if multipushes > 0 {
        title.push_str(&format!(", {multipushes} extra push(es)"));
    }
    super::run_and_print(args, &title, |config| {
        simulate_forbidden_lands(config, &setup)
    })
}

fn parse_artefact(tag: &str) -> Result<DieSize, String> {
    DieSize::from_str_tag(tag).ok_or_else(|| {
        format!("invalid artefact die '{tag}': die size should be one of d6, d8, d10, d12")
    })
}
