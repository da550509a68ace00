//! Die notation parsing
//!
//! Accepts `NdS` tokens joined by `+`, e.g. `"2d6+1d4"`. The count may be
//! omitted (`"d20"` is one die); case and whitespace are ignored. Flat
//! numbers are not part of a die expression: they belong in the binding's
//! `flat` field.

use crate::RollError;
use dice_core::{DiceError, DieGroup};

/// Parse a die expression into ordered die groups
pub fn parse_notation(notation: &str) -> Result<Vec<DieGroup>, RollError> {
    if notation.trim().is_empty() {
        return Err(parse_error(notation, notation));
    }

    notation
        .split('+')
        .map(|token| parse_token(token, notation))
        .collect()
}

fn parse_token(token: &str, notation: &str) -> Result<DieGroup, RollError> {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let (count_str, sides_str) = compact
        .split_once('d')
        .ok_or_else(|| parse_error(token, notation))?;

    let count: u32 = if count_str.is_empty() {
        1
    } else {
        parse_digits(count_str).ok_or_else(|| parse_error(token, notation))?
    };
    let sides: u32 = parse_digits(sides_str).ok_or_else(|| parse_error(token, notation))?;

    if sides == 0 {
        return Err(DiceError::InvalidDie(sides).into());
    }

    Ok(DieGroup::new(sides, count))
}

/// Plain ASCII digits only; rejects signs such as "+6"
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_error(token: &str, notation: &str) -> RollError {
    RollError::FormulaParse {
        token: token.trim().to_string(),
        notation: notation.to_string(),
    }
}
