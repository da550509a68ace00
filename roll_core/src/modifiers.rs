//! Character ability modifiers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ability name -> modifier table supplied by the character sheet.
///
/// Names are stored upper-case and looked up case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterModifiers {
    modifiers: HashMap<String, i32>,
}

impl CharacterModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ability: impl Into<String>, modifier: i32) -> Self {
        self.insert(ability, modifier);
        self
    }

    pub fn insert(&mut self, ability: impl Into<String>, modifier: i32) {
        self.modifiers
            .insert(ability.into().trim().to_ascii_uppercase(), modifier);
    }

    /// Look up an ability modifier
    pub fn get(&self, ability: &str) -> Option<i32> {
        let ability = ability.trim();
        self.modifiers.get(ability).copied().or_else(|| {
            self.modifiers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(ability))
                .map(|(_, m)| *m)
        })
    }

    /// Modifier for an ability, 0 when the sheet has none
    pub fn modifier(&self, ability: &str) -> i32 {
        self.get(ability).unwrap_or_else(|| {
            tracing::debug!(ability, "no modifier on sheet, using 0");
            0
        })
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for CharacterModifiers {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut modifiers = CharacterModifiers::new();
        for (ability, modifier) in iter {
            modifiers.insert(ability, modifier);
        }
        modifiers
    }
}
