//! Hit location die.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Die, SimpleDie};

/// Where a hit lands on the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HitLocation {
    /// Legs.
    Legs,
    /// Torso.
    Torso,
    /// Arm.
    Arm,
    /// Head.
    Head,
}

impl HitLocation {
    /// Every location, in table order.
    pub const ALL: [Self; 4] = [Self::Legs, Self::Torso, Self::Arm, Self::Head];
}

impl std::fmt::Display for HitLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legs => write!(f, "Legs"),
            Self::Torso => write!(f, "Torso"),
            Self::Arm => write!(f, "Arm"),
            Self::Head => write!(f, "Head"),
        }
    }
}

const LOCATION_TABLE: [HitLocation; 6] = [
    HitLocation::Legs,
    HitLocation::Torso,
    HitLocation::Torso,
    HitLocation::Torso,
    HitLocation::Arm,
    HitLocation::Head,
];

/// A d6 read through the hit location table: 1 legs, 2-4 torso, 5 arm, 6 head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitLocationDie;

impl HitLocationDie {
    /// Look up the location for a d6 face. Returns `None` outside 1..=6.
    pub fn location_for(face: u32) -> Option<HitLocation> {
        (1..=6).contains(&face).then(|| lookup(face))
    }
}

/// Table entry for a d6 face, with the face clamped into 1..=6.
fn lookup(face: u32) -> HitLocation {
    LOCATION_TABLE[(face.clamp(1, 6) - 1) as usize]
}

impl Die for HitLocationDie {
    type Outcome = HitLocation;

    fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> HitLocation {
        lookup(SimpleDie::D6.throw(rng))
    }
}
