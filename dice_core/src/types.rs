use crate::critical::{classify, Critical};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of identical dice, e.g. `2d6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieGroup {
    /// Faces on each die (must be > 0 to roll)
    pub sides: u32,
    /// Number of dice in the group
    pub count: u32,
}

impl DieGroup {
    pub fn new(sides: u32, count: u32) -> Self {
        DieGroup { sides, count }
    }

    /// The single d20 used by attacks, checks and saves
    pub fn d20() -> Self {
        DieGroup::new(20, 1)
    }
}

impl fmt::Display for DieGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Total number of dice across a group sequence
pub fn total_dice(groups: &[DieGroup]) -> u64 {
    groups.iter().map(|g| g.count as u64).sum()
}

/// Roll mode for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdvMode {
    #[default]
    Normal,
    Advantage,
    Disadvantage,
}

impl AdvMode {
    /// Combine two mode sources (advantage + disadvantage = normal)
    pub fn combine(self, other: AdvMode) -> AdvMode {
        match (self, other) {
            (AdvMode::Normal, x) | (x, AdvMode::Normal) => x,
            (AdvMode::Advantage, AdvMode::Disadvantage)
            | (AdvMode::Disadvantage, AdvMode::Advantage) => AdvMode::Normal,
            (AdvMode::Advantage, AdvMode::Advantage) => AdvMode::Advantage,
            (AdvMode::Disadvantage, AdvMode::Disadvantage) => AdvMode::Disadvantage,
        }
    }

    /// Whether the pool is rolled twice under this mode
    pub fn rolls_twice(&self) -> bool {
        !matches!(self, AdvMode::Normal)
    }

    /// Suffix appended to formula text
    pub fn suffix(&self) -> &'static str {
        match self {
            AdvMode::Normal => "",
            AdvMode::Advantage => " (Advantage)",
            AdvMode::Disadvantage => " (Disadvantage)",
        }
    }
}

impl fmt::Display for AdvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvMode::Normal => write!(f, "Normal"),
            AdvMode::Advantage => write!(f, "Advantage"),
            AdvMode::Disadvantage => write!(f, "Disadvantage"),
        }
    }
}

/// A single rolled die. Only produced by the roller, so `1 <= value <= sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieFace {
    pub value: u32,
    pub sides: u32,
}

impl DieFace {
    /// Critical classification of this face on its own die
    pub fn critical(&self) -> Critical {
        classify(self)
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (d{})", self.value, self.sides)
    }
}
