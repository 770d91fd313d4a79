//! Mutant: Year Zero pool.
//!
//! Three channels of d6: attribute, skill and gear. A push rerolls every
//! die except successes (6) and, on attribute and gear dice, botches (1).
//! Skill dice never botch, so their 1s are rerolled like any other face.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    DicePool, PoolState, RollHistory, Snapshot, plain_channel, reroll_plain, throw_plain,
    validate_faces,
};
use crate::error::YzeResult;
use crate::outcome::{self, ChannelFaces, LockRule};

/// One stored Mutant roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutantRoll {
    /// Attribute dice.
    pub attr: Vec<u32>,
    /// Skill dice.
    pub skill: Vec<u32>,
    /// Gear dice.
    pub gear: Vec<u32>,
}

impl MutantRoll {
    /// Botches on attribute dice (damage to the attribute when pushed).
    pub fn attr_botches(&self) -> u32 {
        outcome::botches(&self.attr)
    }

    /// Botches on gear dice (damage to the gear when pushed).
    pub fn gear_botches(&self) -> u32 {
        outcome::botches(&self.gear)
    }

    /// All botches that count: attribute and gear, never skill.
    pub fn botches(&self) -> u32 {
        self.attr_botches() + self.gear_botches()
    }

    /// Reroll this roll under the Mutant push rule.
    pub(crate) fn pushed<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            attr: reroll_plain(&self.attr, LockRule::SuccessesAndBotches, rng),
            skill: reroll_plain(&self.skill, LockRule::Successes, rng),
            gear: reroll_plain(&self.gear, LockRule::SuccessesAndBotches, rng),
        }
    }
}

impl Snapshot for MutantRoll {
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)> {
        let mut channels = Vec::with_capacity(3);
        plain_channel(&mut channels, "attr", &self.attr);
        plain_channel(&mut channels, "skill", &self.skill);
        plain_channel(&mut channels, "gear", &self.gear);
        channels
    }
}

/// A Mutant: Year Zero dice pool. Throw once, push once.
#[derive(Debug, Clone)]
pub struct MutantPool {
    attr: u32,
    skill: u32,
    gear: u32,
    rolls: RollHistory<MutantRoll>,
}

impl MutantPool {
    /// Create a pool with the given number of attribute, skill and gear dice.
    pub fn new(attr: u32, skill: u32, gear: u32) -> Self {
        Self {
            attr,
            skill,
            gear,
            rolls: RollHistory::new(Self::VARIANT),
        }
    }

    /// Create an already-thrown pool from faces rolled at the table.
    ///
    /// Every face must be in 1..=6. The pool can then be pushed to study
    /// what pushing this particular roll is likely to give.
    pub fn from_result(attr: &[u32], skill: &[u32], gear: &[u32]) -> YzeResult<Self> {
        let roll = MutantRoll {
            attr: validate_faces("attr", attr)?,
            skill: validate_faces("skill", skill)?,
            gear: validate_faces("gear", gear)?,
        };
        Ok(Self {
            attr: roll.attr.len() as u32,
            skill: roll.skill.len() as u32,
            gear: roll.gear.len() as u32,
            rolls: RollHistory::seeded(Self::VARIANT, roll),
        })
    }

    /// Number of attribute dice.
    pub fn attr(&self) -> u32 {
        self.attr
    }

    /// Number of skill dice.
    pub fn skill(&self) -> u32 {
        self.skill
    }

    /// Number of gear dice.
    pub fn gear(&self) -> u32 {
        self.gear
    }
}

impl Default for MutantPool {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl DicePool for MutantPool {
    type Roll = MutantRoll;

    const VARIANT: &'static str = "mutant";

    fn state(&self) -> PoolState {
        self.rolls.state()
    }

    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &MutantRoll {
        let (attr, skill, gear) = (self.attr, self.skill, self.gear);
        self.rolls.throw_with(|| MutantRoll {
            attr: throw_plain(attr, rng),
            skill: throw_plain(skill, rng),
            gear: throw_plain(gear, rng),
        })
    }

    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&MutantRoll> {
        self.rolls.push_with(|prev| prev.pushed(rng))
    }

    fn result(&self) -> Option<&MutantRoll> {
        self.rolls.thrown()
    }

    fn pushed_result(&self) -> Option<&MutantRoll> {
        self.rolls.pushed()
    }
}
