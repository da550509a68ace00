//! Single die rolls

use crate::random::RandomSource;
use crate::types::DieFace;
use crate::DiceError;

/// Roll one die with `sides` faces.
///
/// Uses `ceil(unit * sides)`; the result is clamped into `[1, sides]` since a
/// unit of exactly `0.0` would otherwise land on face 0.
pub fn roll_one<R: RandomSource + ?Sized>(sides: u32, rng: &mut R) -> Result<u32, DiceError> {
    if sides == 0 {
        return Err(DiceError::InvalidDie(sides));
    }

    let scaled = (rng.next_unit() * sides as f64).ceil();
    Ok((scaled as u32).clamp(1, sides))
}

/// Roll one die and keep its size alongside the value
pub fn roll_face<R: RandomSource + ?Sized>(sides: u32, rng: &mut R) -> Result<DieFace, DiceError> {
    let value = roll_one(sides, rng)?;
    Ok(DieFace { value, sides })
}
