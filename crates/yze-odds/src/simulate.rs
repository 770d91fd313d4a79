use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use yze_dice::{
    AlienPool, BladeRunnerPool, DicePool, ForbiddenLandsPool, MutantPool, PushPolicy, Rating,
    Snapshot, TwilightPool,
};

use crate::config::OddsConfig;
use crate::error::OddsResult;
use crate::report::OddsReport;

/// Successes on the initial throw.
pub const THROW_SUCCESSES: &str = "throw successes";
/// Successes after the push.
pub const PUSH_SUCCESSES: &str = "push successes";
/// Attribute botches after the push.
pub const PUSH_ATTR_BOTCHES: &str = "push attr botches";
/// Gear botches after the push.
pub const PUSH_GEAR_BOTCHES: &str = "push gear botches";
/// Artefact die successes after the push.
pub const PUSH_ARTEFACT_SUCCESSES: &str = "push artefact successes";
/// Successes after the last multipush.
pub const MULTIPUSH_SUCCESSES: &str = "multipush successes";
/// Attribute botches after the last multipush.
pub const MULTIPUSH_ATTR_BOTCHES: &str = "multipush attr botches";
/// Gear botches after the last multipush.
pub const MULTIPUSH_GEAR_BOTCHES: &str = "multipush gear botches";
/// Stress dice showing 1 on the initial throw.
pub const THROW_STRESS_ONES: &str = "throw stress ones";
/// Stress dice showing 1 after the push.
pub const PUSH_STRESS_ONES: &str = "push stress ones";
/// Stress dice showing 1 after the multipush.
pub const MULTIPUSH_STRESS_ONES: &str = "multipush stress ones";
/// Ammo dice showing 1 after the push.
pub const PUSH_AMMO_ONES: &str = "push ammo ones";

/// A Mutant: Year Zero pool to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutantSetup {
    /// Attribute dice.
    pub attr: u32,
    /// Skill dice.
    pub skill: u32,
    /// Gear dice.
    pub gear: u32,
}

/// A Forbidden Lands pool to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenLandsSetup {
    /// Attribute dice.
    pub attr: u32,
    /// Skill dice.
    pub skill: u32,
    /// Gear dice.
    pub gear: u32,
    /// Sides of the artefact die, if any.
    pub artefact: Option<u32>,
    /// Extra pushes after the first (the dwarf talent).
    pub multipushes: u32,
}

/// An Alien pool to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienSetup {
    /// Base dice.
    pub pool: u32,
    /// Stress dice.
    pub stress: u32,
    /// Push a second time.
    pub multipush: bool,
}

/// A Twilight 2000 pool to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwilightSetup {
    /// Attribute rating.
    pub attr: Option<Rating>,
    /// Skill rating.
    pub skill: Option<Rating>,
    /// Ammo dice.
    pub ammo: u32,
    /// Also roll a hit location each trial.
    pub hit_location: bool,
}

/// A Blade Runner pool to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladeRunnerSetup {
    /// Attribute rating.
    pub attr: Option<Rating>,
    /// Skill rating.
    pub skill: Option<Rating>,
    /// Advantage (`Some(true)`), disadvantage (`Some(false)`) or neither.
    pub advantage: Option<bool>,
    /// Which channels the push may reroll.
    pub policy: PushPolicy,
}

/// Simulate a Mutant throw and push.
pub fn simulate_mutant(config: &OddsConfig, setup: &MutantSetup) -> OddsResult<OddsReport> {
    let template = MutantPool::new(setup.attr, setup.skill, setup.gear);
    let labels = [
        THROW_SUCCESSES,
        PUSH_SUCCESSES,
        PUSH_ATTR_BOTCHES,
        PUSH_GEAR_BOTCHES,
    ];
    run_trials(config, MutantPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        let pushed = throw_and_push(&mut pool, rng, report)?;
        report.record(PUSH_ATTR_BOTCHES, pushed.attr_botches());
        report.record(PUSH_GEAR_BOTCHES, pushed.gear_botches());
        Ok(())
    })
}

/// Simulate a Forbidden Lands throw, push and any further pushes.
pub fn simulate_forbidden_lands(
    config: &OddsConfig,
    setup: &ForbiddenLandsSetup,
) -> OddsResult<OddsReport> {
    let mut template = ForbiddenLandsPool::new(setup.attr, setup.skill, setup.gear);
    if let Some(sides) = setup.artefact {
        template = template.with_artefact(sides)?;
    }
    let mut labels = vec![
        THROW_SUCCESSES,
        PUSH_SUCCESSES,
        PUSH_ATTR_BOTCHES,
        PUSH_GEAR_BOTCHES,
    ];
    if setup.artefact.is_some() {
        labels.push(PUSH_ARTEFACT_SUCCESSES);
    }
    if setup.multipushes > 0 {
        labels.extend([
            MULTIPUSH_SUCCESSES,
            MULTIPUSH_ATTR_BOTCHES,
            MULTIPUSH_GEAR_BOTCHES,
        ]);
    }
    run_trials(config, ForbiddenLandsPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        let pushed = throw_and_push(&mut pool, rng, report)?;
        report.record(PUSH_ATTR_BOTCHES, pushed.attr_botches());
        report.record(PUSH_GEAR_BOTCHES, pushed.gear_botches());
        if setup.artefact.is_some() {
            report.record(PUSH_ARTEFACT_SUCCESSES, pushed.artefact_successes());
        }
        if setup.multipushes > 0 {
            for _ in 1..setup.multipushes {
                pool.multipush(rng)?;
            }
            let last = pool.multipush(rng)?;
            report.record(MULTIPUSH_SUCCESSES, last.successes());
            report.record(MULTIPUSH_ATTR_BOTCHES, last.attr_botches());
            report.record(MULTIPUSH_GEAR_BOTCHES, last.gear_botches());
        }
        Ok(())
    })
}

/// Simulate an Alien throw, push and optional second push.
pub fn simulate_alien(config: &OddsConfig, setup: &AlienSetup) -> OddsResult<OddsReport> {
    let template = AlienPool::new(setup.pool, setup.stress);
    let mut labels = vec![
        THROW_SUCCESSES,
        THROW_STRESS_ONES,
        PUSH_SUCCESSES,
        PUSH_STRESS_ONES,
    ];
    if setup.multipush {
        labels.extend([MULTIPUSH_SUCCESSES, MULTIPUSH_STRESS_ONES]);
    }
    run_trials(config, AlienPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        let thrown = pool.throw(rng);
        report.record(THROW_STRESS_ONES, thrown.stress_ones());
        let pushed = throw_and_push(&mut pool, rng, report)?;
        report.record(PUSH_STRESS_ONES, pushed.stress_ones());
        if setup.multipush {
            let last = pool.multipush(rng)?;
            report.record(MULTIPUSH_SUCCESSES, last.successes());
            report.record(MULTIPUSH_STRESS_ONES, last.stress_ones());
        }
        Ok(())
    })
}

/// Simulate a Twilight 2000 throw and push, and optionally a hit location.
pub fn simulate_twilight(config: &OddsConfig, setup: &TwilightSetup) -> OddsResult<OddsReport> {
    let template = TwilightPool::new(setup.attr, setup.skill, setup.ammo);
    let labels = [THROW_SUCCESSES, PUSH_SUCCESSES, PUSH_AMMO_ONES];
    run_trials(config, TwilightPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        let pushed = throw_and_push(&mut pool, rng, report)?;
        report.record(PUSH_AMMO_ONES, pushed.ammo_ones());
        if setup.hit_location {
            report.record_category(pool.hit_location(rng).to_string());
        }
        Ok(())
    })
}

/// Simulate a Blade Runner throw and push.
pub fn simulate_blade_runner(
    config: &OddsConfig,
    setup: &BladeRunnerSetup,
) -> OddsResult<OddsReport> {
    let template = BladeRunnerPool::new(setup.attr, setup.skill, setup.advantage);
    let labels = [THROW_SUCCESSES, PUSH_SUCCESSES];
    run_trials(config, BladeRunnerPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        report.record(THROW_SUCCESSES, pool.throw(rng).successes());
        let pushed = pool.push_with(rng, setup.policy)?;
        report.record(PUSH_SUCCESSES, pushed.successes());
        Ok(())
    })
}

/// Throw and push a pool, recording successes for both stages.
fn throw_and_push<'p, P: DicePool>(
    pool: &'p mut P,
    rng: &mut StdRng,
    report: &mut OddsReport,
) -> OddsResult<&'p P::Roll> {
    report.record(THROW_SUCCESSES, pool.throw(rng).successes());
    let pushed = pool.push(rng)?;
    report.record(PUSH_SUCCESSES, pushed.successes());
    Ok(pushed)
}

/// Run `config.trials` trials with one seeded RNG, collecting into a report.
pub(crate) fn run_trials(
    config: &OddsConfig,
    variant: &str,
    labels: &[&str],
    mut trial: impl FnMut(&mut StdRng, &mut OddsReport) -> OddsResult<()>,
) -> OddsResult<OddsReport> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = OddsReport::new(variant, config.trials, seed, labels);

    tracing::info!(variant, trials = config.trials, seed, "odds run started");
    for _ in 0..config.trials {
        trial(&mut rng, &mut report)?;
    }
    tracing::info!(variant, trials = config.trials, "odds run finished");

    Ok(report)
}
