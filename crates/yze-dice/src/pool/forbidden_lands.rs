//! Forbidden Lands pool.
//!
//! Mutant channels plus an optional artefact die. On a push the artefact
//! die is rerolled only if it scored nothing. Dwarves may keep pushing:
//! every [`ForbiddenLandsPool::multipush`] rerolls the newest snapshot
//! again and only the snapshot it replaced is kept.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    DicePool, MutantRoll, PoolState, RollHistory, Snapshot, graded_channel, throw_plain,
    validate_face_range, validate_faces,
};
use crate::dice::{ArtefactDie, Die, DieSize, GradedRoll};
use crate::error::{YzeError, YzeResult};
use crate::outcome::{self, ChannelFaces};

/// One stored Forbidden Lands roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenLandsRoll {
    /// Attribute, skill and gear dice.
    #[serde(flatten)]
    pub dice: MutantRoll,
    /// The artefact die, if the pool has one.
    pub artefact: Option<GradedRoll>,
}

impl ForbiddenLandsRoll {
    /// Botches on attribute dice.
    pub fn attr_botches(&self) -> u32 {
        self.dice.attr_botches()
    }

    /// Botches on gear dice.
    pub fn gear_botches(&self) -> u32 {
        self.dice.gear_botches()
    }

    /// Successes scored by the artefact die alone.
    pub fn artefact_successes(&self) -> u32 {
        outcome::graded_successes(self.artefact)
    }

    fn pushed<R: Rng + ?Sized>(&self, artefact_die: Option<ArtefactDie>, rng: &mut R) -> Self {
        let dice = self.dice.pushed(rng);
        let artefact = match (self.artefact, artefact_die) {
            (Some(prev), Some(die)) if prev.is_failure() => Some(die.throw(rng)),
            (prev, _) => prev,
        };
        Self { dice, artefact }
    }
}

impl Snapshot for ForbiddenLandsRoll {
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)> {
        let mut channels = self.dice.channels();
        graded_channel(&mut channels, "artefact", self.artefact);
        channels
    }
}

/// A Forbidden Lands dice pool.
#[derive(Debug, Clone)]
pub struct ForbiddenLandsPool {
    attr: u32,
    skill: u32,
    gear: u32,
    artefact: Option<ArtefactDie>,
    rolls: RollHistory<ForbiddenLandsRoll>,
}

impl ForbiddenLandsPool {
    /// Create a pool without an artefact die.
    pub fn new(attr: u32, skill: u32, gear: u32) -> Self {
        Self {
            attr,
            skill,
            gear,
            artefact: None,
            rolls: RollHistory::new(Self::VARIANT),
        }
    }

    /// Add an artefact die with `sides` faces (8, 10 or 12 in play, 6 allowed).
    pub fn with_artefact(mut self, sides: u32) -> YzeResult<Self> {
        self.artefact = Some(ArtefactDie::new(sides)?);
        Ok(self)
    }

    /// Create an already-thrown pool from faces rolled at the table.
    ///
    /// `artefact` is the artefact die's `(sides, face)`, if one was rolled.
    pub fn from_result(
        attr: &[u32],
        skill: &[u32],
        gear: &[u32],
        artefact: Option<(u32, u32)>,
    ) -> YzeResult<Self> {
        let dice = MutantRoll {
            attr: validate_faces("attr", attr)?,
            skill: validate_faces("skill", skill)?,
            gear: validate_faces("gear", gear)?,
        };
        let (die, roll) = match artefact {
            Some((sides, face)) => {
                let size = DieSize::try_from(sides)?;
                validate_face_range("artefact", &[face], size.sides())?;
                (
                    Some(ArtefactDie::from_size(size)),
                    Some(GradedRoll::artefact(face)),
                )
            }
            None => (None, None),
        };
        Ok(Self {
            attr: dice.attr.len() as u32,
            skill: dice.skill.len() as u32,
            gear: dice.gear.len() as u32,
            artefact: die,
            rolls: RollHistory::seeded(
                Self::VARIANT,
                ForbiddenLandsRoll {
                    dice,
                    artefact: roll,
                },
            ),
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

    /// Size of the artefact die, if any.
    pub fn artefact(&self) -> Option<DieSize> {
        self.artefact.map(|die| die.size())
    }

    /// Push again on top of the newest push.
    ///
    /// Unlike every other transition this is not idempotent: each call
    /// rerolls and replaces the multipushed snapshot. If the pool has not
    /// been pushed yet, the push is performed first.
    pub fn multipush<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&ForbiddenLandsRoll> {
        let artefact = self.artefact;
        self.rolls.multipush_again(|prev| prev.pushed(artefact, rng))
    }

    /// The newest multipush, once multipushed.
    pub fn multipushed_result(&self) -> Option<&ForbiddenLandsRoll> {
        self.rolls.multipushed()
    }

    /// The multipush that the newest one replaced, if there were two or more.
    pub fn previous_multipush(&self) -> Option<&ForbiddenLandsRoll> {
        self.rolls.previous_multipush()
    }

    /// How many times the pool has been multipushed.
    pub fn multipushes(&self) -> u32 {
        self.rolls.multipushes()
    }

    /// An endless, lazy chain of further pushes starting from the newest snapshot.
    ///
    /// The pool itself is not changed; take as many steps as the table allows.
    pub fn push_chain<'a, R: Rng + ?Sized>(
        &self,
        rng: &'a mut R,
    ) -> YzeResult<impl Iterator<Item = ForbiddenLandsRoll> + use<'a, R>> {
        let start = self
            .rolls
            .latest()
            .cloned()
            .ok_or(YzeError::NotThrown { operation: "push" })?;
        let artefact = self.artefact;
        Ok(
            std::iter::successors(Some(start), move |prev| Some(prev.pushed(artefact, rng)))
                .skip(1),
        )
    }
}

impl Default for ForbiddenLandsPool {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl DicePool for ForbiddenLandsPool {
    type Roll = ForbiddenLandsRoll;

    const VARIANT: &'static str = "forbidden-lands";

    fn state(&self) -> PoolState {
        self.rolls.state()
    }

    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ForbiddenLandsRoll {
        let (attr, skill, gear, artefact) = (self.attr, self.skill, self.gear, self.artefact);
        self.rolls.throw_with(|| ForbiddenLandsRoll {
            dice: MutantRoll {
                attr: throw_plain(attr, rng),
                skill: throw_plain(skill, rng),
                gear: throw_plain(gear, rng),
            },
            artefact: artefact.map(|die| die.throw(rng)),
        })
    }

    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&ForbiddenLandsRoll> {
        let artefact = self.artefact;
        self.rolls.push_with(|prev| prev.pushed(artefact, rng))
    }

    fn result(&self) -> Option<&ForbiddenLandsRoll> {
        self.rolls.thrown()
    }

    fn pushed_result(&self) -> Option<&ForbiddenLandsRoll> {
        self.rolls.pushed()
    }
}
