//! Die primitives.
//!
//! Every YZE die is a d6, d8, d10 or d12. A plain [`SimpleDie`] yields its
//! face, the graded [`StepDie`] and [`ArtefactDie`] also yield a success
//! count, and the [`HitLocationDie`] maps a d6 onto a body part. Dice hold
//! no state: each throw is an independent draw from the caller's RNG.

pub mod graded;
pub mod location;
pub mod rating;

pub use graded::{ArtefactDie, GradedRoll, StepDie};
pub use location::{HitLocation, HitLocationDie};
pub use rating::Rating;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{YzeError, YzeResult};

/// The die sizes used by Year Zero Engine games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieSize {
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
}

impl DieSize {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// Parse a die from a string like "d6", "D12" or a bare "10".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d').unwrap_or(s.as_str()).parse::<u32>().ok()?;
        Self::try_from(sides).ok()
    }
}

impl TryFrom<u32> for DieSize {
    type Error = YzeError;

    fn try_from(sides: u32) -> YzeResult<Self> {
        match sides {
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            other => Err(YzeError::InvalidDieSize(other)),
        }
    }
}

impl std::fmt::Display for DieSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Something that can be thrown to produce an outcome.
pub trait Die {
    /// What a single throw produces.
    type Outcome;

    /// Throw the die once using the given RNG.
    fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Outcome;
}

/// A plain die returning its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleDie {
    size: DieSize,
}

impl SimpleDie {
    /// The six-sided die used by every plain dice channel.
    pub const D6: Self = Self { size: DieSize::D6 };

    /// Create a die with `sides` faces. Fails unless `sides` is 6, 8, 10 or 12.
    pub fn new(sides: u32) -> YzeResult<Self> {
        Ok(Self::from_size(DieSize::try_from(sides)?))
    }

    /// Create a die of a known size.
    pub fn from_size(size: DieSize) -> Self {
        Self { size }
    }

    /// The size of this die.
    pub fn size(&self) -> DieSize {
        self.size
    }
}

impl Default for SimpleDie {
    fn default() -> Self {
        Self::D6
    }
}

impl Die for SimpleDie {
    type Outcome = u32;

    fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.size.sides())
    }
}
