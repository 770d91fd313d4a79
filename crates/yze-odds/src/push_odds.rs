use serde::{Deserialize, Serialize};
use yze_dice::{DicePool, MutantPool, Snapshot, YzeError};

use crate::config::OddsConfig;
use crate::error::{OddsError, OddsResult};
use crate::report::OddsReport;
use crate::simulate::{PUSH_ATTR_BOTCHES, PUSH_GEAR_BOTCHES, PUSH_SUCCESSES, run_trials};

/// Faces already on the table, to be pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOddsSetup {
    /// Attribute dice faces.
    pub attr: Vec<u32>,
    /// Skill dice faces.
    pub skill: Vec<u32>,
    /// Gear dice faces.
    pub gear: Vec<u32>,
}

/// Parse a run of digits such as `"253"` into faces.
///
/// A `0` stands for "no die" and is skipped, so `"0"` gives an empty channel.
pub fn parse_faces(channel: &'static str, input: &str) -> OddsResult<Vec<u32>> {
    let mut faces = Vec::with_capacity(input.len());
    for c in input.trim().chars() {
        let face = c
            .to_digit(10)
            .ok_or(OddsError::NotADigit { channel, found: c })?;
        match face {
            0 => {}
            1..=6 => faces.push(face),
            value => {
                return Err(YzeError::InvalidChannelValue {
                    channel,
                    value,
                    max: 6,
                }
                .into());
            }
        }
    }
    Ok(faces)
}

/// Push the same Mutant roll over and over and tally what pushing gives.
pub fn simulate_push_odds(config: &OddsConfig, setup: &PushOddsSetup) -> OddsResult<OddsReport> {
    let template = MutantPool::from_result(&setup.attr, &setup.skill, &setup.gear)?;
    let labels = [PUSH_SUCCESSES, PUSH_ATTR_BOTCHES, PUSH_GEAR_BOTCHES];
    run_trials(config, MutantPool::VARIANT, &labels, |rng, report| {
        let mut pool = template.clone();
        let pushed = pool.push(rng)?;
        report.record(PUSH_SUCCESSES, pushed.successes());
        report.record(PUSH_ATTR_BOTCHES, pushed.attr_botches());
        report.record(PUSH_GEAR_BOTCHES, pushed.gear_botches());
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(parse_faces("attr", "253").unwrap(), vec![2, 5, 3]);
        assert_eq!(parse_faces("skill", "0").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_faces("gear", "").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_faces("attr", "1606").unwrap(), vec![1, 6, 6]);
    }

    #[test]
    fn parse_rejects_high_faces() {
        assert!(matches!(
            parse_faces("attr", "27"),
            Err(OddsError::Dice(YzeError::InvalidChannelValue {
                channel: "attr",
                value: 7,
                max: 6
            }))
        ));
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(matches!(
            parse_faces("gear", "2x"),
            Err(OddsError::NotADigit {
                channel: "gear",
                found: 'x'
            })
        ));
    }

    #[test]
    fn locked_roll_never_changes() {
        let setup = PushOddsSetup {
            attr: vec![6, 1],
            skill: vec![6],
            gear: vec![1],
        };
        let config = OddsConfig::default().with_trials(200).with_seed(1);
        let report = simulate_push_odds(&config, &setup).unwrap();
        assert_eq!(report.find(PUSH_SUCCESSES).unwrap().occurrences(2), 200);
        assert_eq!(report.find(PUSH_ATTR_BOTCHES).unwrap().occurrences(1), 200);
        assert_eq!(report.find(PUSH_GEAR_BOTCHES).unwrap().occurrences(1), 200);
    }

    #[test]
    fn single_die_push_odds() {
        let setup = PushOddsSetup {
            attr: vec![3],
            ..Default::default()
        };
        let config = OddsConfig::default().with_trials(60_000).with_seed(9);
        let report = simulate_push_odds(&config, &setup).unwrap();
        let success = report
            .find(PUSH_SUCCESSES)
            .unwrap()
            .at_least_one_percent(60_000);
        let botch = report
            .find(PUSH_ATTR_BOTCHES)
            .unwrap()
            .at_least_one_percent(60_000);
        assert!((success - 100.0 / 6.0).abs() < 1.0);
        assert!((botch - 100.0 / 6.0).abs() < 1.0);
    }

    #[test]
    fn invalid_seeded_faces() {
        let setup = PushOddsSetup {
            attr: vec![9],
            ..Default::default()
        };
        let config = OddsConfig::default().with_trials(1);
        assert!(matches!(
            simulate_push_odds(&config, &setup),
            Err(OddsError::Dice(YzeError::InvalidChannelValue { .. }))
        ));
    }
}
