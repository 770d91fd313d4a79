//! Symbolic attribute and skill ratings.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DieSize;
use crate::error::{YzeError, YzeResult};

/// A letter rating, rolled as a step die of the matching size.
///
/// Ratings order by die size: `A` (d12) is the highest, `D` (d6) the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Rolled as a d12.
    A,
    /// Rolled as a d10.
    B,
    /// Rolled as a d8.
    C,
    /// Rolled as a d6.
    D,
}

impl Rating {
    /// The die size this rating rolls.
    pub fn die_size(self) -> DieSize {
        match self {
            Self::A => DieSize::D12,
            Self::B => DieSize::D10,
            Self::C => DieSize::D8,
            Self::D => DieSize::D6,
        }
    }

    /// Parse an optional rating. Empty input, `-` and `none` mean absent.
    pub fn parse_optional(s: &str) -> YzeResult<Option<Self>> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for Rating {
    type Err = YzeError;

    fn from_str(s: &str) -> YzeResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(YzeError::InvalidRating(s.to_string())),
        }
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.die_size().cmp(&other.die_size())
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        write!(f, "{letter}")
    }
}
