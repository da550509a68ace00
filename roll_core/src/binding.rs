//! Roll bindings - what to roll and why

use crate::RollError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a binding rolls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind {
    Attack,
    Check,
    Save,
    Damage,
    Healing,
}

impl RollKind {
    /// Get all roll kinds
    pub fn all() -> &'static [RollKind] {
        &[
            RollKind::Attack,
            RollKind::Check,
            RollKind::Save,
            RollKind::Damage,
            RollKind::Healing,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RollKind::Attack => "attack",
            RollKind::Check => "check",
            RollKind::Save => "save",
            RollKind::Damage => "damage",
            RollKind::Healing => "healing",
        }
    }

    /// Whether this kind falls back to a single d20 without a die expression
    pub fn defaults_to_d20(&self) -> bool {
        matches!(self, RollKind::Attack | RollKind::Check | RollKind::Save)
    }
}

impl fmt::Display for RollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollKind {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RollKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RollError::UnsupportedRollKind(s.to_string()))
    }
}

/// Difficulty class: a bare number or `{ "value": n }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dc {
    Value(i32),
    Object { value: i32 },
}

impl Dc {
    pub fn value(&self) -> i32 {
        match self {
            Dc::Value(v) | Dc::Object { value: v } => *v,
        }
    }
}

/// A structured roll request bound to a feature, item, spell or stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBinding {
    pub kind: RollKind,
    /// Ability whose modifier is added (e.g. "STR")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    /// Flat bonus or penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat: Option<i32>,
    /// Die expression such as "2d6+1d4"; required for damage and healing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub die: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc: Option<Dc>,
}

impl RollBinding {
    pub fn new(kind: RollKind) -> Self {
        RollBinding {
            kind,
            ability: None,
            flat: None,
            die: None,
            dc: None,
        }
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_flat(mut self, flat: i32) -> Self {
        self.flat = Some(flat);
        self
    }

    pub fn with_die(mut self, die: impl Into<String>) -> Self {
        self.die = Some(die.into());
        self
    }

    pub fn with_dc(mut self, dc: i32) -> Self {
        self.dc = Some(Dc::Value(dc));
        self
    }

    /// Validate a binding read from an action catalog
    pub fn from_config(config: BindingConfig) -> Result<Self, RollError> {
        let kind: RollKind = config.kind.parse()?;

        Ok(RollBinding {
            kind,
            ability: non_blank(config.ability),
            flat: config.flat,
            die: non_blank(config.die),
            dc: config.dc,
        })
    }
}

/// Raw binding as stored by action catalogs; `type` is not yet validated
#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfig {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub flat: Option<i32>,
    #[serde(default)]
    pub die: Option<String>,
    #[serde(default)]
    pub dc: Option<Dc>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
