//! Success and botch derivation.
//!
//! Plain dice succeed on a 6 and botch on a 1. Graded dice carry their own
//! success count. These functions are pure: the pools use them to decide
//! which dice a push may reroll, and callers use them to score snapshots.

use crate::dice::GradedRoll;

/// The face that scores a success on a plain die.
pub const SUCCESS_FACE: u32 = 6;

/// The face that counts as a botch on a plain die.
pub const BOTCH_FACE: u32 = 1;

/// Count the successes in a channel of plain dice.
pub fn successes(faces: &[u32]) -> u32 {
    faces.iter().filter(|&&f| f == SUCCESS_FACE).count() as u32
}

/// Count the botches in a channel of plain dice.
pub fn botches(faces: &[u32]) -> u32 {
    faces.iter().filter(|&&f| f == BOTCH_FACE).count() as u32
}

/// Successes scored by an optional graded die (0 when absent).
pub fn graded_successes(roll: Option<GradedRoll>) -> u32 {
    roll.map_or(0, |r| r.successes)
}

/// Which plain-die faces survive a push unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockRule {
    /// Only successes are kept (skill dice, Alien dice).
    Successes,
    /// Successes and botches are kept (attribute, gear and ammo dice).
    SuccessesAndBotches,
}

impl LockRule {
    /// Returns true if a die showing `face` must be kept when pushing.
    pub fn locks(self, face: u32) -> bool {
        match self {
            Self::Successes => face == SUCCESS_FACE,
            Self::SuccessesAndBotches => face == SUCCESS_FACE || face == BOTCH_FACE,
        }
    }
}

/// A view of one named channel of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFaces<'a> {
    /// An ordered run of plain die faces.
    Plain(&'a [u32]),
    /// A single graded die.
    Graded(GradedRoll),
}

impl ChannelFaces<'_> {
    /// Successes scored by this channel.
    pub fn successes(&self) -> u32 {
        match self {
            Self::Plain(faces) => successes(faces),
            Self::Graded(roll) => roll.successes,
        }
    }
}

impl std::fmt::Display for ChannelFaces<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(faces) => {
                let values: Vec<String> = faces.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", values.join(", "))
            }
            Self::Graded(roll) => write!(f, "{roll}"),
        }
    }
}
