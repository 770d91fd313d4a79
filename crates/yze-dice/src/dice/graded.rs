//! Graded dice: dice that score more than one success on high faces.
//!
//! Step dice (Twilight 2000, Blade Runner) score 1 success on 6-9 and 2 on
//! 10-12. Artefact dice (Forbidden Lands) score 1 on 6-7, 2 on 8-9, 3 on
//! 10-11 and 4 on 12.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Die, DieSize, Rating};
use crate::error::YzeResult;

/// The result of throwing a graded die: the face and the successes it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradedRoll {
    /// The face rolled.
    pub face: u32,
    /// Successes scored by that face.
    pub successes: u32,
}

impl GradedRoll {
    /// Grade a face using the step die table.
    pub fn step(face: u32) -> Self {
        let successes = match face {
            6..=9 => 1,
            10..=12 => 2,
            _ => 0,
        };
        Self { face, successes }
    }

    /// Grade a face using the artefact die table.
    pub fn artefact(face: u32) -> Self {
        let successes = match face {
            6..=7 => 1,
            8..=9 => 2,
            10..=11 => 3,
            12 => 4,
            _ => 0,
        };
        Self { face, successes }
    }

    /// Returns true if the roll scored nothing.
    pub fn is_failure(&self) -> bool {
        self.successes == 0
    }
}

impl std::fmt::Display for GradedRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.face, self.successes)
    }
}

/// A graded die for attribute and skill ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDie {
    size: DieSize,
}

impl StepDie {
    /// Create a step die with `sides` faces.
    pub fn new(sides: u32) -> YzeResult<Self> {
        Ok(Self {
            size: DieSize::try_from(sides)?,
        })
    }

    /// The step die a rating rolls.
    pub fn for_rating(rating: Rating) -> Self {
        Self {
            size: rating.die_size(),
        }
    }

    /// The size of this die.
    pub fn size(&self) -> DieSize {
        self.size
    }
}

impl Default for StepDie {
    fn default() -> Self {
        Self { size: DieSize::D6 }
    }
}

impl Die for StepDie {
    type Outcome = GradedRoll;

    fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> GradedRoll {
        GradedRoll::step(rng.random_range(1..=self.size.sides()))
    }
}

/// A graded die for magical or technological items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtefactDie {
    size: DieSize,
}

impl ArtefactDie {
    /// Create an artefact die with `sides` faces.
    pub fn new(sides: u32) -> YzeResult<Self> {
        Ok(Self::from_size(DieSize::try_from(sides)?))
    }

    /// Create an artefact die of a known size.
    pub fn from_size(size: DieSize) -> Self {
        Self { size }
    }

    /// The size of this die.
    pub fn size(&self) -> DieSize {
        self.size
    }
}

impl Default for ArtefactDie {
    fn default() -> Self {
        Self::from_size(DieSize::D6)
    }
}

impl Die for ArtefactDie {
    type Outcome = GradedRoll;

    fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> GradedRoll {
        GradedRoll::artefact(rng.random_range(1..=self.size.sides()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YzeError;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn step_table() {
        let expected = [0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2];
        for (i, successes) in expected.iter().enumerate() {
            assert_eq!(GradedRoll::step(i as u32 + 1).successes, *successes);
        }
    }

    #[test]
    fn artefact_table() {
        let expected = [0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4];
        for (i, successes) in expected.iter().enumerate() {
            assert_eq!(GradedRoll::artefact(i as u32 + 1).successes, *successes);
        }
    }

    #[test]
    fn graded_display() {
        assert_eq!(GradedRoll::step(11).to_string(), "11 (2)");
        assert!(GradedRoll::artefact(4).is_failure());
    }

    #[test]
    fn step_die_for_rating() {
        assert_eq!(StepDie::for_rating(Rating::A).size(), DieSize::D12);
        assert_eq!(StepDie::for_rating(Rating::D).size(), DieSize::D6);
    }

    #[test]
    fn graded_dice_reject_odd_sizes() {
        assert_eq!(StepDie::new(20), Err(YzeError::InvalidDieSize(20)));
        assert_eq!(ArtefactDie::new(4), Err(YzeError::InvalidDieSize(4)));
        assert!(ArtefactDie::new(12).is_ok());
    }

    #[test]
    fn d6_step_die_never_scores_two() {
        let die = StepDie::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(die.throw(&mut rng).successes <= 1);
        }
    }

    proptest! {
        #[test]
        fn step_die_successes_follow_face(
            seed in any::<u64>(),
            sides in prop::sample::select(vec![6u32, 8, 10, 12]),
        ) {
            let die = StepDie::new(sides).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = die.throw(&mut rng);
            prop_assert!((1..=sides).contains(&roll.face));
            prop_assert_eq!(roll, GradedRoll::step(roll.face));
        }

        #[test]
        fn artefact_die_successes_follow_face(
            seed in any::<u64>(),
            sides in prop::sample::select(vec![6u32, 8, 10, 12]),
        ) {
            let die = ArtefactDie::new(sides).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = die.throw(&mut rng);
            prop_assert!((1..=sides).contains(&roll.face));
            prop_assert_eq!(roll, GradedRoll::artefact(roll.face));
        }
    }
}
