//! Blade Runner pool.
//!
//! Attribute and skill are rated A-D and rolled as step dice. With
//! advantage, an extra step die of the higher rating is rolled. With
//! disadvantage, the lower-rated channel is dropped before throwing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    DicePool, PoolState, RollHistory, Snapshot, graded_channel, reroll_graded, throw_graded,
};
use crate::dice::{GradedRoll, Rating};
use crate::error::YzeResult;
use crate::outcome::ChannelFaces;

/// Which graded channels a push may reroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushPolicy {
    /// Only channels that scored nothing.
    #[default]
    Failures,
    /// Channels that scored nothing or exactly one success.
    UpToOneSuccess,
}

impl PushPolicy {
    /// The highest success count a channel can show and still be rerolled.
    pub fn max_rerolled_successes(self) -> u32 {
        match self {
            Self::Failures => 0,
            Self::UpToOneSuccess => 1,
        }
    }
}

/// One stored Blade Runner roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladeRunnerRoll {
    /// The attribute step die, unless absent or dropped.
    pub attr: Option<GradedRoll>,
    /// The skill step die, unless absent or dropped.
    pub skill: Option<GradedRoll>,
    /// The extra die granted by advantage.
    pub advantage: Option<GradedRoll>,
}

impl Snapshot for BladeRunnerRoll {
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)> {
        let mut channels = Vec::with_capacity(3);
        graded_channel(&mut channels, "attr", self.attr);
        graded_channel(&mut channels, "skill", self.skill);
        graded_channel(&mut channels, "advantage", self.advantage);
        channels
    }
}

/// Ratings actually rolled once advantage or disadvantage is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Resolved {
    attr: Option<Rating>,
    skill: Option<Rating>,
    advantage: Option<Rating>,
}

impl Resolved {
    fn new(attr: Option<Rating>, skill: Option<Rating>, advantage: Option<bool>) -> Self {
        // the skill wins only when strictly higher
        let skill_higher = attr < skill;
        match advantage {
            Some(true) => Self {
                attr,
                skill,
                advantage: if skill_higher { skill } else { attr },
            },
            Some(false) if skill_higher => Self {
                attr: None,
                skill,
                advantage: None,
            },
            Some(false) => Self {
                attr,
                skill: None,
                advantage: None,
            },
            None => Self {
                attr,
                skill,
                advantage: None,
            },
        }
    }

    fn pushed<R: Rng + ?Sized>(
        &self,
        prev: &BladeRunnerRoll,
        policy: PushPolicy,
        rng: &mut R,
    ) -> BladeRunnerRoll {
        let max = policy.max_rerolled_successes();
        BladeRunnerRoll {
            attr: reroll_graded(prev.attr, self.attr, max, rng),
            skill: reroll_graded(prev.skill, self.skill, max, rng),
            advantage: reroll_graded(prev.advantage, self.advantage, max, rng),
        }
    }
}

/// A Blade Runner dice pool.
#[derive(Debug, Clone)]
pub struct BladeRunnerPool {
    attr: Option<Rating>,
    skill: Option<Rating>,
    advantage: Option<bool>,
    resolved: Resolved,
    rolls: RollHistory<BladeRunnerRoll>,
}

impl BladeRunnerPool {
    /// Create a pool.
    ///
    /// `advantage` is `Some(true)` for advantage, `Some(false)` for
    /// disadvantage and `None` for a plain roll.
    pub fn new(attr: Option<Rating>, skill: Option<Rating>, advantage: Option<bool>) -> Self {
        Self {
            attr,
            skill,
            advantage,
            resolved: Resolved::new(attr, skill, advantage),
            rolls: RollHistory::new(Self::VARIANT),
        }
    }

    /// Create a pool from rating letters; see [`Rating::parse_optional`].
    pub fn from_letters(attr: &str, skill: &str, advantage: Option<bool>) -> YzeResult<Self> {
        Ok(Self::new(
            Rating::parse_optional(attr)?,
            Rating::parse_optional(skill)?,
            advantage,
        ))
    }

    /// Attribute rating as given.
    pub fn attr(&self) -> Option<Rating> {
        self.attr
    }

    /// Skill rating as given.
    pub fn skill(&self) -> Option<Rating> {
        self.skill
    }

    /// Advantage (`Some(true)`), disadvantage (`Some(false)`) or neither.
    pub fn advantage(&self) -> Option<bool> {
        self.advantage
    }

    /// The rating the advantage die is rolled with, if there is one.
    pub fn advantage_rating(&self) -> Option<Rating> {
        self.resolved.advantage
    }

    /// Push under the given policy. Returns the stored push if already pushed.
    pub fn push_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        policy: PushPolicy,
    ) -> YzeResult<&BladeRunnerRoll> {
        let resolved = self.resolved;
        self.rolls.push_with(|prev| resolved.pushed(prev, policy, rng))
    }
}

impl DicePool for BladeRunnerPool {
    type Roll = BladeRunnerRoll;

    const VARIANT: &'static str = "blade-runner";

    fn state(&self) -> PoolState {
        self.rolls.state()
    }

    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &BladeRunnerRoll {
        let resolved = self.resolved;
        self.rolls.throw_with(|| BladeRunnerRoll {
            attr: throw_graded(resolved.attr, rng),
            skill: throw_graded(resolved.skill, rng),
            advantage: throw_graded(resolved.advantage, rng),
        })
    }

    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&BladeRunnerRoll> {
        self.push_with(rng, PushPolicy::Failures)
    }

    fn result(&self) -> Option<&BladeRunnerRoll> {
        self.rolls.thrown()
    }

    fn pushed_result(&self) -> Option<&BladeRunnerRoll> {
        self.rolls.pushed()
    }
}
