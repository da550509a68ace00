//! Formula compilation - turning a binding + ability modifiers into dice and text

use crate::binding::RollBinding;
use crate::modifiers::CharacterModifiers;
use crate::notation::parse_notation;
use crate::RollError;
use dice_core::{AdvMode, DieGroup};

/// A binding resolved against a character's modifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoll {
    pub groups: Vec<DieGroup>,
    pub modifier: i32,
    /// Canonical formula shown verbatim by logs and UI
    pub formula_text: String,
    pub mode: AdvMode,
}

/// Compile a binding into die groups, a numeric modifier and formula text.
///
/// modifier = ability modifier (if any) + flat + situational
pub fn compile(
    binding: &RollBinding,
    modifiers: &CharacterModifiers,
    situational: i32,
    mode: AdvMode,
) -> Result<CompiledRoll, RollError> {
    // Step 1: Numeric modifier
    let ability_mod = binding
        .ability
        .as_deref()
        .map(|ability| modifiers.modifier(ability))
        .unwrap_or(0);
    let modifier = ability_mod
        .saturating_add(binding.flat.unwrap_or(0))
        .saturating_add(situational);

    // Step 2: Die groups - an explicit die always wins, d20 kinds fall back to 1d20
    let die = binding.die.as_deref().filter(|d| !d.trim().is_empty());
    let (groups, formula_text) = match die {
        Some(notation) => {
            let groups = parse_notation(notation)?;
            let text = render_formula(&groups, modifier, mode);
            (groups, text)
        }
        None if binding.kind.defaults_to_d20() => {
            (vec![DieGroup::d20()], render_d20_formula(modifier, mode))
        }
        None => return Err(RollError::MissingDie(binding.kind)),
    };

    Ok(CompiledRoll {
        groups,
        modifier,
        formula_text,
        mode,
    })
}

/// Render explicit dice: `"2d6 + 1d4 + 3"`, `"1d8 - 1"`, `"2d6"`, plus mode suffix
pub fn render_formula(groups: &[DieGroup], modifier: i32, mode: AdvMode) -> String {
    let mut text = groups
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(" + ");

    if modifier > 0 {
        text.push_str(&format!(" + {}", modifier));
    } else if modifier < 0 {
        text.push_str(&format!(" - {}", modifier.unsigned_abs()));
    }

    text.push_str(mode.suffix());
    text
}

/// Render the implicit d20 of attacks, checks and saves: `"d20 +3"`, `"d20 -1"`, `"d20"`
fn render_d20_formula(modifier: i32, mode: AdvMode) -> String {
    let mut text = String::from("d20");
    if modifier != 0 {
        text.push_str(&format!(" {:+}", modifier));
    }
    text.push_str(mode.suffix());
    text
}
