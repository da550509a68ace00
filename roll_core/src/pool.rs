//! Free-form dice pool requests

use crate::formula::render_formula;
use crate::notation::parse_notation;
use crate::RollError;
use dice_core::{AdvMode, DieGroup};
use serde::{Deserialize, Serialize};

/// A manual roll that bypasses bindings: groups, mode and a flat modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRequest {
    pub groups: Vec<DieGroup>,
    #[serde(default)]
    pub mode: AdvMode,
    #[serde(default)]
    pub modifier: i32,
}

impl PoolRequest {
    pub fn new(groups: Vec<DieGroup>) -> Self {
        PoolRequest {
            groups,
            mode: AdvMode::Normal,
            modifier: 0,
        }
    }

    /// Build a pool from die notation such as "2d6+1d4"
    pub fn from_notation(notation: &str) -> Result<Self, RollError> {
        Ok(Self::new(parse_notation(notation)?))
    }

    pub fn with_mode(mut self, mode: AdvMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Add dice to the pool, merging into an existing group of the same size
    pub fn add_dice(&mut self, sides: u32, count: u32) {
        match self.groups.iter_mut().find(|g| g.sides == sides) {
            Some(group) => group.count = group.count.saturating_add(count),
            None => self.groups.push(DieGroup::new(sides, count)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.count == 0)
    }

    pub fn formula_text(&self) -> String {
        render_formula(&self.groups, self.modifier, self.mode)
    }
}
