//! Dice pool resolution
//!
//! Advantage and disadvantage apply to the whole pool: every group is rolled
//! twice as two complete sets, the set sums are compared, and one set is kept
//! in its entirety. Both sets stay in `all_rolled` for auditing.

use crate::random::RandomSource;
use crate::roller::roll_face;
use crate::types::{total_dice, AdvMode, DieFace, DieGroup};
use crate::DiceError;
use serde::{Deserialize, Serialize};

const PREALLOC_LIMIT: u64 = 1024;

/// Outcome of resolving a dice pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOutcome {
    /// The kept set, in group order
    pub kept: Vec<DieFace>,
    /// Every die rolled: the single set, or set A followed by set B
    pub all_rolled: Vec<DieFace>,
    /// Mode the pool was resolved under
    pub mode: AdvMode,
}

impl PoolOutcome {
    /// Sum of the kept dice, widened so large faces cannot overflow
    pub fn raw_total(&self) -> u64 {
        set_sum(&self.kept)
    }

    /// The discarded set (empty under normal mode)
    pub fn dropped(&self) -> &[DieFace] {
        dropped_set(&self.kept, &self.all_rolled, self.mode)
    }
}

/// The set not kept, given the kept set and the full audit trail
pub fn dropped_set<'a>(kept: &[DieFace], all_rolled: &'a [DieFace], mode: AdvMode) -> &'a [DieFace] {
    if !mode.rolls_twice() {
        return &[];
    }
    let (set_a, set_b) = all_rolled.split_at(kept.len().min(all_rolled.len()));
    if set_a == kept {
        set_b
    } else {
        set_a
    }
}

/// Resolve a pool of die groups under the given mode.
///
/// Group order in the output matches the input. Under advantage/disadvantage
/// set A is always rolled before set B.
pub fn resolve_pool<R: RandomSource + ?Sized>(
    groups: &[DieGroup],
    mode: AdvMode,
    rng: &mut R,
) -> Result<PoolOutcome, DiceError> {
    if total_dice(groups) == 0 {
        return Err(DiceError::EmptyPool);
    }
    // Validate before drawing so a bad group never leaves a half-rolled pool
    if let Some(bad) = groups.iter().find(|g| g.sides == 0) {
        return Err(DiceError::InvalidDie(bad.sides));
    }

    if !mode.rolls_twice() {
        let set = roll_set(groups, rng)?;
        return Ok(PoolOutcome {
            kept: set.clone(),
            all_rolled: set,
            mode,
        });
    }

    let set_a = roll_set(groups, rng)?;
    let set_b = roll_set(groups, rng)?;
    let (sum_a, sum_b) = (set_sum(&set_a), set_sum(&set_b));
    let keep_a = keeps_first_set(mode, sum_a, sum_b);
    tracing::trace!(%mode, sum_a, sum_b, keep_a, "selected kept set");

    let mut all_rolled = Vec::with_capacity(set_a.len() + set_b.len());
    all_rolled.extend_from_slice(&set_a);
    all_rolled.extend_from_slice(&set_b);

    let kept = if keep_a { set_a } else { set_b };
    Ok(PoolOutcome {
        kept,
        all_rolled,
        mode,
    })
}

/// Whether set A is kept given both set sums. Ties keep set A.
pub fn keeps_first_set(mode: AdvMode, sum_a: u64, sum_b: u64) -> bool {
    match mode {
        AdvMode::Normal => true,
        AdvMode::Advantage => sum_a >= sum_b,
        AdvMode::Disadvantage => sum_a <= sum_b,
    }
}

/// Roll every group once, in order
fn roll_set<R: RandomSource + ?Sized>(
    groups: &[DieGroup],
    rng: &mut R,
) -> Result<Vec<DieFace>, DiceError> {
    // Counts are caller-controlled; only reserve for ordinary pools
    let mut faces = Vec::with_capacity(total_dice(groups).min(PREALLOC_LIMIT) as usize);
    for group in groups {
        for _ in 0..group.count {
            faces.push(roll_face(group.sides, rng)?);
        }
    }
    Ok(faces)
}

fn set_sum(faces: &[DieFace]) -> u64 {
    faces
        .iter()
        .fold(0u64, |sum, f| sum.saturating_add(u64::from(f.value)))
}
