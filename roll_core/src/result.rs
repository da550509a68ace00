//! Roll results handed to UI, logs and storage

use dice_core::{dropped_set, AdvMode, Critical, DieFace, PoolOutcome};
use serde::{Deserialize, Serialize};

/// Complete result of one roll
///
/// `raw_result` sums the kept dice only; `total = raw_result + modifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    pub formula: String,
    pub raw_result: u64,
    pub modifier: i32,
    pub total: i64,
    /// Kept dice, in group order
    pub rolls: Vec<DieFace>,
    /// Every die rolled, both sets under advantage/disadvantage
    pub all_rolled: Vec<DieFace>,
    #[serde(default)]
    pub mode: AdvMode,
}

impl RollResult {
    /// Assemble a result from a resolved pool
    pub fn from_outcome(formula: String, modifier: i32, outcome: PoolOutcome) -> Self {
        let raw_result = outcome.raw_total();
        RollResult {
            formula,
            raw_result,
            modifier,
            total: i64::try_from(raw_result)
                .unwrap_or(i64::MAX)
                .saturating_add(i64::from(modifier)),
            rolls: outcome.kept,
            all_rolled: outcome.all_rolled,
            mode: outcome.mode,
        }
    }

    /// The discarded set (empty under normal mode)
    pub fn dropped(&self) -> &[DieFace] {
        dropped_set(&self.rolls, &self.all_rolled, self.mode)
    }

    /// Kept dice paired with their critical state
    pub fn criticals(&self) -> impl Iterator<Item = (&DieFace, Critical)> + '_ {
        self.rolls.iter().map(|face| (face, face.critical()))
    }

    pub fn has_crit_success(&self) -> bool {
        self.criticals().any(|(_, c)| c == Critical::Success)
    }

    pub fn has_crit_failure(&self) -> bool {
        self.criticals().any(|(_, c)| c == Critical::Failure)
    }

    /// Check if the roll meets or exceeds a DC
    pub fn meets_dc(&self, dc: i32) -> bool {
        self.total >= dc as i64
    }

    /// Individual dice for display: kept values, then the dropped set in parentheses
    pub fn dice_display(&self) -> String {
        let kept = join_values(&self.rolls);
        let dropped = self.dropped();
        if dropped.is_empty() {
            format!("[{}]", kept)
        } else {
            format!("[{}] ([{}])", kept, join_values(dropped))
        }
    }
}

fn join_values(faces: &[DieFace]) -> String {
    faces
        .iter()
        .map(|f| f.value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
