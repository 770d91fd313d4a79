//! Dice-pool engine for the Year Zero Engine family of games.
//!
//! Provides the YZE die primitives (plain, step, artefact and hit-location
//! dice), pure success/botch derivation, and one pool state machine per
//! game variant: Mutant: Year Zero, Forbidden Lands, Alien, Twilight 2000
//! and Blade Runner. Every pool moves through the same lifecycle
//! (fresh, thrown, pushed, multipushed) but rerolls under its own rules.

pub mod dice;
pub mod error;
pub mod outcome;
pub mod pool;

pub use dice::{
    ArtefactDie, Die, DieSize, GradedRoll, HitLocation, HitLocationDie, Rating, SimpleDie,
    StepDie,
};
pub use error::{YzeError, YzeResult};
pub use outcome::{ChannelFaces, LockRule};
pub use pool::{
    AlienPool, AlienRoll, BladeRunnerPool, BladeRunnerRoll, DicePool, ForbiddenLandsPool,
    ForbiddenLandsRoll, MutantPool, MutantRoll, PoolState, PushPolicy, Snapshot, TwilightPool,
    TwilightRoll,
};
