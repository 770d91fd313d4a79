//! Alien pool.
//!
//! Base dice and stress dice, both d6, both keeping only 6s when pushed.
//! Every push adds one stress die to the stress channel before rerolling it,
//! so stress grows by one die per push. A 1 on a stress die is left for the
//! caller to interpret (the panic rule); the engine does not score it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    DicePool, PoolState, RollHistory, Snapshot, plain_channel, reroll_plain, throw_plain,
    validate_faces,
};
use crate::error::YzeResult;
use crate::outcome::{self, ChannelFaces, LockRule};

/// Face given to the stress die added by a push. It is always rerolled.
pub const ADDED_STRESS_FACE: u32 = 2;

/// One stored Alien roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienRoll {
    /// Base dice.
    pub pool: Vec<u32>,
    /// Stress dice.
    pub stress: Vec<u32>,
}

impl AlienRoll {
    /// Stress dice showing a 1.
    pub fn stress_ones(&self) -> u32 {
        outcome::botches(&self.stress)
    }

    fn pushed<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut stress = self.stress.clone();
        stress.push(ADDED_STRESS_FACE);
        Self {
            pool: reroll_plain(&self.pool, LockRule::Successes, rng),
            stress: reroll_plain(&stress, LockRule::Successes, rng),
        }
    }
}

impl Snapshot for AlienRoll {
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)> {
        let mut channels = Vec::with_capacity(2);
        plain_channel(&mut channels, "pool", &self.pool);
        plain_channel(&mut channels, "stress", &self.stress);
        channels
    }
}

/// An Alien dice pool. Throw once, push once, multipush once.
#[derive(Debug, Clone)]
pub struct AlienPool {
    pool: u32,
    stress: u32,
    rolls: RollHistory<AlienRoll>,
}

impl AlienPool {
    /// Create a pool with the given number of base and stress dice.
    pub fn new(pool: u32, stress: u32) -> Self {
        Self {
            pool,
            stress,
            rolls: RollHistory::new(Self::VARIANT),
        }
    }

    /// Create an already-thrown pool from faces rolled at the table.
    pub fn from_result(pool: &[u32], stress: &[u32]) -> YzeResult<Self> {
        let roll = AlienRoll {
            pool: validate_faces("pool", pool)?,
            stress: validate_faces("stress", stress)?,
        };
        Ok(Self {
            pool: roll.pool.len() as u32,
            stress: roll.stress.len() as u32,
            rolls: RollHistory::seeded(Self::VARIANT, roll),
        })
    }

    /// Number of base dice.
    pub fn pool(&self) -> u32 {
        self.pool
    }

    /// Number of stress dice before any push.
    pub fn stress(&self) -> u32 {
        self.stress
    }

    /// Push the pushed roll a second time, adding another stress die.
    ///
    /// Idempotent. A thrown but unpushed pool is pushed first.
    pub fn multipush<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&AlienRoll> {
        self.rolls.multipush_once(|prev| prev.pushed(rng))
    }

    /// The second push, once multipushed.
    pub fn multipushed_result(&self) -> Option<&AlienRoll> {
        self.rolls.multipushed()
    }
}

impl Default for AlienPool {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl DicePool for AlienPool {
    type Roll = AlienRoll;

    const VARIANT: &'static str = "alien";

    fn state(&self) -> PoolState {
        self.rolls.state()
    }

    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &AlienRoll {
        let (pool, stress) = (self.pool, self.stress);
        self.rolls.throw_with(|| AlienRoll {
            pool: throw_plain(pool, rng),
            stress: throw_plain(stress, rng),
        })
    }

    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&AlienRoll> {
        self.rolls.push_with(|prev| prev.pushed(rng))
    }

    fn result(&self) -> Option<&AlienRoll> {
        self.rolls.thrown()
    }

    fn pushed_result(&self) -> Option<&AlienRoll> {
        self.rolls.pushed()
    }
}
