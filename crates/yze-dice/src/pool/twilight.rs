//! Twilight 2000 pool.
//!
//! Attribute and skill are letter ratings rolled as one step die each; ammo
//! is a channel of d6. A graded channel is rerolled on a push only if it
//! scored nothing. Ammo dice keep their 1s and 6s, like Mutant attribute
//! dice. Hit location is rolled apart from the push chain, at most once.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    DicePool, PoolState, RollHistory, Snapshot, graded_channel, plain_channel, reroll_graded,
    reroll_plain, throw_graded, throw_plain,
};
use crate::dice::{Die, GradedRoll, HitLocation, HitLocationDie, Rating};
use crate::error::YzeResult;
use crate::outcome::{self, ChannelFaces, LockRule};

/// One stored Twilight 2000 roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwilightRoll {
    /// The attribute step die, if rated.
    pub attr: Option<GradedRoll>,
    /// The skill step die, if rated.
    pub skill: Option<GradedRoll>,
    /// Ammo dice.
    pub ammo: Vec<u32>,
}

impl TwilightRoll {
    /// Ammo dice showing a 1.
    pub fn ammo_ones(&self) -> u32 {
        outcome::botches(&self.ammo)
    }

    fn pushed<R: Rng + ?Sized>(
        &self,
        attr: Option<Rating>,
        skill: Option<Rating>,
        rng: &mut R,
    ) -> Self {
        Self {
            attr: reroll_graded(self.attr, attr, 0, rng),
            skill: reroll_graded(self.skill, skill, 0, rng),
            ammo: reroll_plain(&self.ammo, LockRule::SuccessesAndBotches, rng),
        }
    }
}

impl Snapshot for TwilightRoll {
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)> {
        let mut channels = Vec::with_capacity(3);
        graded_channel(&mut channels, "attr", self.attr);
        graded_channel(&mut channels, "skill", self.skill);
        plain_channel(&mut channels, "ammo", &self.ammo);
        channels
    }
}

/// A Twilight 2000 dice pool.
#[derive(Debug, Clone)]
pub struct TwilightPool {
    attr: Option<Rating>,
    skill: Option<Rating>,
    ammo: u32,
    rolls: RollHistory<TwilightRoll>,
    hit_location: Option<HitLocation>,
}

impl TwilightPool {
    /// Create a pool from attribute and skill ratings and a number of ammo dice.
    pub fn new(attr: Option<Rating>, skill: Option<Rating>, ammo: u32) -> Self {
        Self {
            attr,
            skill,
            ammo,
            rolls: RollHistory::new(Self::VARIANT),
            hit_location: None,
        }
    }

    /// Create a pool from rating letters; see [`Rating::parse_optional`].
    pub fn from_letters(attr: &str, skill: &str, ammo: u32) -> YzeResult<Self> {
        Ok(Self::new(
            Rating::parse_optional(attr)?,
            Rating::parse_optional(skill)?,
            ammo,
        ))
    }

    /// Attribute rating.
    pub fn attr(&self) -> Option<Rating> {
        self.attr
    }

    /// Skill rating.
    pub fn skill(&self) -> Option<Rating> {
        self.skill
    }

    /// Number of ammo dice.
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    /// Roll where a hit lands. Rolled once; later calls return the same location.
    pub fn hit_location<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HitLocation {
        *self
            .hit_location
            .get_or_insert_with(|| HitLocationDie.throw(rng))
    }

    /// Returns true once the hit location has been rolled.
    pub fn hit_location_resolved(&self) -> bool {
        self.hit_location.is_some()
    }
}

impl DicePool for TwilightPool {
    type Roll = TwilightRoll;

    const VARIANT: &'static str = "twilight-2000";

    fn state(&self) -> PoolState {
        self.rolls.state()
    }

    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &TwilightRoll {
        let (attr, skill, ammo) = (self.attr, self.skill, self.ammo);
        self.rolls.throw_with(|| TwilightRoll {
            attr: throw_graded(attr, rng),
            skill: throw_graded(skill, rng),
            ammo: throw_plain(ammo, rng),
        })
    }

    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&TwilightRoll> {
        let (attr, skill) = (self.attr, self.skill);
        self.rolls.push_with(|prev| prev.pushed(attr, skill, rng))
    }

    fn result(&self) -> Option<&TwilightRoll> {
        self.rolls.thrown()
    }

    fn pushed_result(&self) -> Option<&TwilightRoll> {
        self.rolls.pushed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YzeError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn attr_only_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = TwilightPool::from_letters("A", "", 0).unwrap();
        let roll = pool.throw(&mut rng);
        let attr = roll.attr.unwrap();
        assert!((1..=12).contains(&attr.face));
        assert_eq!(attr, GradedRoll::step(attr.face));
        assert!(roll.skill.is_none());
        assert!(roll.ammo.is_empty());
        let names: Vec<_> = roll.channels().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["attr"]);
    }

    #[test]
    fn invalid_rating() {
        assert_eq!(
            TwilightPool::from_letters("A", "E", 2).unwrap_err(),
            YzeError::InvalidRating("E".to_string())
        );
    }

    #[test]
    fn push_keeps_any_success() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..100 {
            let mut pool = TwilightPool::new(Some(Rating::B), Some(Rating::C), 3);
            let before = pool.throw(&mut rng).clone();
            let after = pool.push(&mut rng).unwrap().clone();
            for (b, a) in [(before.attr, after.attr), (before.skill, after.skill)] {
                let (b, a) = (b.unwrap(), a.unwrap());
                if b.successes > 0 {
                    assert_eq!(a, b);
                }
            }
            for (b, a) in before.ammo.iter().zip(&after.ammo) {
                if *b == 1 || *b == 6 {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn rerolled_channel_uses_rating_die() {
        let mut rng = StdRng::seed_from_u64(78);
        for _ in 0..100 {
            let mut pool = TwilightPool::new(Some(Rating::D), None, 0);
            pool.throw(&mut rng);
            let pushed = pool.push(&mut rng).unwrap();
            assert!(pushed.attr.unwrap().face <= 6);
            assert!(pushed.skill.is_none());
        }
    }

    #[test]
    fn throw_and_push_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut pool = TwilightPool::new(Some(Rating::A), Some(Rating::D), 2);
        let thrown = pool.throw(&mut rng).clone();
        assert_eq!(pool.throw(&mut rng), &thrown);
        let pushed = pool.push(&mut rng).unwrap().clone();
        assert_eq!(pool.push(&mut rng).unwrap(), &pushed);
        assert_eq!(pool.result(), Some(&thrown));
        assert_eq!(pool.state(), PoolState::Pushed);
    }

    #[test]
    fn roll_json_round_trip() {
        let roll = TwilightRoll {
            attr: Some(GradedRoll::step(11)),
            skill: None,
            ammo: vec![1, 4],
        };
        let text = serde_json::to_string(&roll).unwrap();
        assert_eq!(
            text,
            r#"{"attr":{"face":11,"successes":2},"skill":null,"ammo":[1,4]}"#
        );
        assert_eq!(serde_json::from_str::<TwilightRoll>(&text).unwrap(), roll);
    }

    #[test]
    fn ratings_and_locations_serialize_by_name() {
        assert_eq!(serde_json::to_string(&Rating::B).unwrap(), r#""B""#);
        assert_eq!(
            serde_json::to_string(&HitLocation::Torso).unwrap(),
            r#""Torso""#
        );
        assert_eq!(
            serde_json::from_str::<PoolState>(r#""Pushed""#).unwrap(),
            PoolState::Pushed
        );
    }

    #[test]
    fn hit_location_is_cached() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = TwilightPool::new(Some(Rating::C), Some(Rating::C), 1);
        assert!(!pool.hit_location_resolved());
        let first = pool.hit_location(&mut rng);
        for _ in 0..20 {
            assert_eq!(pool.hit_location(&mut rng), first);
        }
        assert!(pool.hit_location_resolved());
        assert_eq!(pool.state(), PoolState::Fresh);
    }

    #[test]
    fn ammo_ones() {
        let roll = TwilightRoll {
            attr: Some(GradedRoll::step(10)),
            skill: None,
            ammo: vec![1, 6, 1],
        };
        assert_eq!(roll.ammo_ones(), 2);
        assert_eq!(roll.successes(), 3);
    }
}
