//! Result formatting - display lines and dice-log entries
//!
//! The [`LogEntry`] field set is what the persistent dice log stores; display
//! formatting never changes it.

use crate::binding::RollBinding;
use crate::result::RollResult;
use dice_core::{Critical, DieFace};
use serde::{Deserialize, Serialize};

/// One row of the external dice log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub character_name: String,
    pub character_id: String,
    pub formula: String,
    /// Sum of kept dice, modifier excluded
    pub raw_result: u64,
    pub modifier: i32,
    /// Modifier included
    pub total: i64,
    pub roll_type: String,
    /// Kept dice
    pub individual_rolls: Vec<DieFace>,
}

impl LogEntry {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Display line for a binding roll, e.g. `"Longsword (attack): d20 +5 = 17 [CRIT SUCCESS]"`
pub fn format_roll(label: &str, binding: &RollBinding, result: &RollResult) -> String {
    let mut line = format!(
        "{} ({}): {} = {}",
        label, binding.kind, result.formula, result.total
    );
    push_crit_annotation(&mut line, result);

    if let Some(dc) = binding.dc {
        let dc = dc.value();
        let outcome = if result.meets_dc(dc) {
            "success"
        } else {
            "failure"
        };
        line.push_str(&format!(" vs DC {}: {}", dc, outcome));
    }

    line
}

/// Display line for a free-form pool roll, e.g. `"Manual roll: 2d6 - 1 = 7"`
pub fn format_pool(label: &str, result: &RollResult) -> String {
    let mut line = format!("{}: {} = {}", label, result.formula, result.total);
    push_crit_annotation(&mut line, result);
    line
}

/// Build the dice-log entry for a binding roll
pub fn to_log_entry(
    character_name: &str,
    character_id: &str,
    binding: &RollBinding,
    result: &RollResult,
) -> LogEntry {
    log_entry(character_name, character_id, binding.kind.as_str(), result)
}

/// Build the dice-log entry for a free-form pool roll
pub fn pool_log_entry(
    character_name: &str,
    character_id: &str,
    roll_type: &str,
    result: &RollResult,
) -> LogEntry {
    log_entry(character_name, character_id, roll_type, result)
}

fn log_entry(
    character_name: &str,
    character_id: &str,
    roll_type: &str,
    result: &RollResult,
) -> LogEntry {
    LogEntry {
        character_name: character_name.to_string(),
        character_id: character_id.to_string(),
        formula: result.formula.clone(),
        raw_result: result.raw_result,
        modifier: result.modifier,
        total: result.total,
        roll_type: roll_type.to_string(),
        individual_rolls: result.rolls.clone(),
    }
}

/// Append `" [CRIT SUCCESS]"`, `" [CRIT FAIL]"` or both when kept dice crit
fn push_crit_annotation(line: &mut String, result: &RollResult) {
    let badges: Vec<&str> = [Critical::Success, Critical::Failure]
        .into_iter()
        .filter(|wanted| result.criticals().any(|(_, c)| c == *wanted))
        .filter_map(|c| c.badge())
        .collect();

    if !badges.is_empty() {
        line.push_str(&format!(" [{}]", badges.join(", ")));
    }
}
