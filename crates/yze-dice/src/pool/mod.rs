//! Dice pool state machines.
//!
//! Each game variant has its own pool type, but all share one lifecycle:
//!
//! ```text
//! Fresh --throw--> Thrown --push--> Pushed --multipush--> Multipushed
//! ```
//!
//! Every transition stores an immutable snapshot and is idempotent: calling
//! it again returns the stored snapshot. The Forbidden Lands multipush is
//! the one exception and rolls forward on every call.
//!
//! Preconditions are enforced the same way in every variant: `push` on a
//! pool that was never thrown fails with [`YzeError::NotThrown`], and
//! `multipush` on a thrown but unpushed pool performs the push first.

pub mod alien;
pub mod blade_runner;
pub mod forbidden_lands;
pub mod mutant;
pub mod twilight;

pub use alien::{AlienPool, AlienRoll};
pub use blade_runner::{BladeRunnerPool, BladeRunnerRoll, PushPolicy};
pub use forbidden_lands::{ForbiddenLandsPool, ForbiddenLandsRoll};
pub use mutant::{MutantPool, MutantRoll};
pub use twilight::{TwilightPool, TwilightRoll};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{Die, GradedRoll, Rating, SimpleDie, StepDie};
use crate::error::{YzeError, YzeResult};
use crate::outcome::{ChannelFaces, LockRule};

/// Where a pool is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PoolState {
    /// Constructed, nothing rolled yet.
    Fresh,
    /// The initial roll is stored.
    Thrown,
    /// The first push is stored.
    Pushed,
    /// At least one further push is stored.
    Multipushed,
}

impl std::fmt::Display for PoolState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Thrown => write!(f, "thrown"),
            Self::Pushed => write!(f, "pushed"),
            Self::Multipushed => write!(f, "multipushed"),
        }
    }
}

/// A stored roll, viewed as named channels.
pub trait Snapshot {
    /// The channels holding at least one die, in display order.
    fn channels(&self) -> Vec<(&'static str, ChannelFaces<'_>)>;

    /// Total successes across every channel.
    fn successes(&self) -> u32 {
        self.channels().iter().map(|(_, c)| c.successes()).sum()
    }
}

/// The lifecycle shared by every variant's pool.
pub trait DicePool {
    /// The snapshot type this pool stores.
    type Roll: Snapshot + Clone;

    /// Short name of the game variant, used in logs and reports.
    const VARIANT: &'static str;

    /// Current lifecycle state.
    fn state(&self) -> PoolState;

    /// Roll every channel once. Returns the stored roll if already thrown.
    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Self::Roll;

    /// Reroll the dice the variant allows. Returns the stored push if already pushed.
    fn push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> YzeResult<&Self::Roll>;

    /// The initial roll, once thrown.
    fn result(&self) -> Option<&Self::Roll>;

    /// The pushed roll, once pushed.
    fn pushed_result(&self) -> Option<&Self::Roll>;
}

/// Stored snapshots of one pool, and the transitions between them.
#[derive(Debug, Clone)]
pub(crate) struct RollHistory<S> {
    variant: &'static str,
    thrown: Option<S>,
    pushed: Option<S>,
    multipushed: Option<S>,
    previous_multipush: Option<S>,
    multipushes: u32,
}

impl<S> RollHistory<S> {
    pub(crate) fn new(variant: &'static str) -> Self {
        Self {
            variant,
            thrown: None,
            pushed: None,
            multipushed: None,
            previous_multipush: None,
            multipushes: 0,
        }
    }

    /// A history whose initial roll was supplied by the caller.
    pub(crate) fn seeded(variant: &'static str, roll: S) -> Self {
        Self {
            thrown: Some(roll),
            ..Self::new(variant)
        }
    }

    pub(crate) fn state(&self) -> PoolState {
        if self.multipushed.is_some() {
            PoolState::Multipushed
        } else if self.pushed.is_some() {
            PoolState::Pushed
        } else if self.thrown.is_some() {
            PoolState::Thrown
        } else {
            PoolState::Fresh
        }
    }

    pub(crate) fn thrown(&self) -> Option<&S> {
        self.thrown.as_ref()
    }

    pub(crate) fn pushed(&self) -> Option<&S> {
        self.pushed.as_ref()
    }

    pub(crate) fn multipushed(&self) -> Option<&S> {
        self.multipushed.as_ref()
    }

    pub(crate) fn previous_multipush(&self) -> Option<&S> {
        self.previous_multipush.as_ref()
    }

    pub(crate) fn multipushes(&self) -> u32 {
        self.multipushes
    }

    /// The newest stored snapshot.
    pub(crate) fn latest(&self) -> Option<&S> {
        self.multipushed
            .as_ref()
            .or(self.pushed.as_ref())
            .or(self.thrown.as_ref())
    }

    pub(crate) fn throw_with(&mut self, roll: impl FnOnce() -> S) -> &S {
        if self.thrown.is_none() {
            self.log_transition(PoolState::Thrown);
        }
        self.thrown.get_or_insert_with(roll)
    }

    pub(crate) fn push_with(&mut self, reroll: impl FnOnce(&S) -> S) -> YzeResult<&S> {
        const NOT_THROWN: YzeError = YzeError::NotThrown { operation: "push" };
        if self.pushed.is_none() {
            let base = self.thrown.as_ref().ok_or(NOT_THROWN)?;
            let next = reroll(base);
            self.log_transition(PoolState::Pushed);
            self.pushed = Some(next);
        }
        self.pushed.as_ref().ok_or(NOT_THROWN)
    }

    /// Push once more on top of the push. Idempotent.
    pub(crate) fn multipush_once(&mut self, mut reroll: impl FnMut(&S) -> S) -> YzeResult<&S> {
        const NOT_THROWN: YzeError = YzeError::NotThrown {
            operation: "multipush",
        };
        if self.multipushed.is_none() {
            if self.thrown.is_none() {
                return Err(NOT_THROWN);
            }
            self.push_with(&mut reroll)?;
            let base = self.pushed.as_ref().ok_or(NOT_THROWN)?;
            let next = reroll(base);
            self.log_transition(PoolState::Multipushed);
            self.multipushes = 1;
            self.multipushed = Some(next);
        }
        self.multipushed.as_ref().ok_or(NOT_THROWN)
    }

    /// Push again on top of the newest push, replacing the previous multipush.
    pub(crate) fn multipush_again(&mut self, mut reroll: impl FnMut(&S) -> S) -> YzeResult<&S> {
        const NOT_THROWN: YzeError = YzeError::NotThrown {
            operation: "multipush",
        };
        if self.thrown.is_none() {
            return Err(NOT_THROWN);
        }
        self.push_with(&mut reroll)?;
        let base = match &self.multipushed {
            Some(multipushed) => multipushed,
            None => self.pushed.as_ref().ok_or(NOT_THROWN)?,
        };
        let next = reroll(base);
        self.log_transition(PoolState::Multipushed);
        self.multipushes += 1;
        self.previous_multipush = self.multipushed.take();
        Ok(&*self.multipushed.insert(next))
    }

    fn log_transition(&self, to: PoolState) {
        tracing::debug!(
            variant = self.variant,
            from = %self.state(),
            to = %to,
            multipushes = self.multipushes,
            "pool transition"
        );
    }
}

/// Roll `count` plain d6.
pub(crate) fn throw_plain<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<u32> {
    (0..count).map(|_| SimpleDie::D6.throw(rng)).collect()
}

/// Reroll every plain d6 the lock rule does not keep.
pub(crate) fn reroll_plain<R: Rng + ?Sized>(faces: &[u32], rule: LockRule, rng: &mut R) -> Vec<u32> {
    faces
        .iter()
        .map(|&face| {
            if rule.locks(face) {
                face
            } else {
                SimpleDie::D6.throw(rng)
            }
        })
        .collect()
}

/// Roll the step die for a rating, if the rating is present.
pub(crate) fn throw_graded<R: Rng + ?Sized>(
    rating: Option<Rating>,
    rng: &mut R,
) -> Option<GradedRoll> {
    rating.map(|r| StepDie::for_rating(r).throw(rng))
}

/// Reroll a graded channel scoring at most `max_successes`; keep it otherwise.
pub(crate) fn reroll_graded<R: Rng + ?Sized>(
    roll: Option<GradedRoll>,
    rating: Option<Rating>,
    max_successes: u32,
    rng: &mut R,
) -> Option<GradedRoll> {
    match (roll, rating) {
        (Some(prev), Some(rating)) if prev.successes <= max_successes => {
            Some(StepDie::for_rating(rating).throw(rng))
        }
        (roll, _) => roll,
    }
}

/// Check caller-supplied d6 faces.
pub(crate) fn validate_faces(channel: &'static str, faces: &[u32]) -> YzeResult<Vec<u32>> {
    validate_face_range(channel, faces, 6)
}

pub(crate) fn validate_face_range(
    channel: &'static str,
    faces: &[u32],
    max: u32,
) -> YzeResult<Vec<u32>> {
    match faces.iter().find(|f| !(1..=max).contains(*f)) {
        Some(&value) => Err(YzeError::InvalidChannelValue {
            channel,
            value,
            max,
        }),
        None => Ok(faces.to_vec()),
    }
}

/// Add a plain channel to `channels` unless it holds no dice.
pub(crate) fn plain_channel<'a>(
    channels: &mut Vec<(&'static str, ChannelFaces<'a>)>,
    name: &'static str,
    faces: &'a [u32],
) {
    if !faces.is_empty() {
        channels.push((name, ChannelFaces::Plain(faces)));
    }
}

/// Add a graded channel to `channels` if it was rolled.
pub(crate) fn graded_channel(
    channels: &mut Vec<(&'static str, ChannelFaces<'_>)>,
    name: &'static str,
    roll: Option<GradedRoll>,
) {
    if let Some(roll) = roll {
        channels.push((name, ChannelFaces::Graded(roll)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn history_starts_fresh() {
        let history: RollHistory<u32> = RollHistory::new("test");
        assert_eq!(history.state(), PoolState::Fresh);
        assert!(history.thrown().is_none());
        assert!(history.latest().is_none());
    }

    #[test]
    fn history_throw_is_idempotent() {
        let mut history = RollHistory::new("test");
        assert_eq!(*history.throw_with(|| 3), 3);
        assert_eq!(*history.throw_with(|| 5), 3);
        assert_eq!(history.state(), PoolState::Thrown);
    }

    #[test]
    fn history_push_requires_throw() {
        let mut history: RollHistory<u32> = RollHistory::new("test");
        assert_eq!(
            history.push_with(|n| n + 1),
            Err(YzeError::NotThrown { operation: "push" })
        );
        assert_eq!(history.state(), PoolState::Fresh);
    }

    #[test]
    fn history_push_is_idempotent() {
        let mut history = RollHistory::seeded("test", 1);
        assert_eq!(history.push_with(|n| n + 1), Ok(&2));
        assert_eq!(history.push_with(|n| n + 10), Ok(&2));
        assert_eq!(history.state(), PoolState::Pushed);
    }

    #[test]
    fn history_multipush_once_pushes_first() {
        let mut history = RollHistory::seeded("test", 1);
        assert_eq!(history.multipush_once(|n| n + 1), Ok(&3));
        assert_eq!(history.pushed(), Some(&2));
        assert_eq!(history.multipush_once(|n| n + 100), Ok(&3));
        assert_eq!(history.multipushes(), 1);
    }

    #[test]
    fn history_multipush_again_rolls_forward() {
        let mut history = RollHistory::seeded("test", 0);
        history.push_with(|n| n + 1).unwrap();
        assert_eq!(history.multipush_again(|n| n + 1), Ok(&2));
        assert_eq!(history.previous_multipush(), None);
        assert_eq!(history.multipush_again(|n| n + 1), Ok(&3));
        assert_eq!(history.previous_multipush(), Some(&2));
        assert_eq!(history.multipush_again(|n| n + 1), Ok(&4));
        assert_eq!(history.previous_multipush(), Some(&3));
        assert_eq!(history.multipushes(), 3);
        assert_eq!(history.latest(), Some(&4));
    }

    #[test]
    fn history_multipush_requires_throw() {
        let mut history: RollHistory<u32> = RollHistory::new("test");
        let err = YzeError::NotThrown {
            operation: "multipush",
        };
        assert_eq!(history.multipush_once(|n| n + 1), Err(err.clone()));
        assert_eq!(history.multipush_again(|n| n + 1), Err(err));
    }

    #[test]
    fn reroll_plain_keeps_locked_faces() {
        let mut rng = StdRng::seed_from_u64(11);
        let faces = [1, 2, 3, 4, 5, 6];
        for _ in 0..50 {
            let kept = reroll_plain(&faces, LockRule::SuccessesAndBotches, &mut rng);
            assert_eq!(kept.len(), 6);
            assert_eq!(kept[0], 1);
            assert_eq!(kept[5], 6);
            let skill = reroll_plain(&faces, LockRule::Successes, &mut rng);
            assert_eq!(skill[5], 6);
        }
    }

    #[test]
    fn reroll_graded_respects_threshold() {
        let mut rng = StdRng::seed_from_u64(5);
        let one = Some(GradedRoll::step(7));
        assert_eq!(reroll_graded(one, Some(Rating::B), 0, &mut rng), one);
        assert_eq!(reroll_graded(None, Some(Rating::B), 1, &mut rng), None);
        let two = Some(GradedRoll::step(11));
        assert_eq!(reroll_graded(two, Some(Rating::A), 1, &mut rng), two);
    }

    #[test]
    fn validate_faces_rejects_out_of_range() {
        assert_eq!(validate_faces("attr", &[2, 5, 3]), Ok(vec![2, 5, 3]));
        assert_eq!(
            validate_faces("gear", &[2, 7]),
            Err(YzeError::InvalidChannelValue {
                channel: "gear",
                value: 7,
                max: 6
            })
        );
        assert!(validate_faces("skill", &[0]).is_err());
    }

    #[test]
    fn pool_state_display() {
        assert_eq!(PoolState::Fresh.to_string(), "fresh");
        assert_eq!(PoolState::Multipushed.to_string(), "multipushed");
        assert!(PoolState::Thrown < PoolState::Pushed);
    }
}
